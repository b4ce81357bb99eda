//! Random sources.
//!
//! Every random decision in the game (placement shuffles, scan rolls, robot
//! attacks, flee and portal destinations) goes through the [`Dice`] trait.
//! Production code uses a seeded [`StdRng`]; tests use [`ScriptedDice`] to
//! replay exact sequences.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random integers.
pub trait Dice {
    /// Roll an integer uniformly in `low..=high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// Pick an index uniformly in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Shuffle a slice in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Choose one element uniformly, or `None` if the slice is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }
}

impl Dice for StdRng {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Dice that replay a fixed sequence of values.
///
/// Each call to [`Dice::roll`] or [`Dice::index`] consumes the next value.
/// Meant for tests and deterministic replays.
///
/// # Panics
///
/// Panics when the script is exhausted or a value falls outside the range
/// the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<i32>,
}

impl ScriptedDice {
    /// Create dice that will return `values` in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more values to the script.
    pub fn push(&mut self, value: i32) {
        self.values.push_back(value);
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_value(&mut self) -> i32 {
        self.values.pop_front().expect("scripted dice exhausted")
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let value = self.next_value();
        assert!(
            (low..=high).contains(&value),
            "scripted roll {value} outside {low}..={high}"
        );
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.next_value();
        let index = usize::try_from(value).unwrap_or(usize::MAX);
        assert!(index < len, "scripted index {value} outside 0..{len}");
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn std_rng_rolls_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r = rng.roll(1, 5);
            assert!((1..=5).contains(&r));
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn scripted_dice_replay_in_order() {
        let mut dice = ScriptedDice::new([3, 1, 0]);
        assert_eq!(dice.roll(1, 5), 3);
        assert_eq!(dice.roll(1, 5), 1);
        assert_eq!(dice.index(4), 0);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn scripted_shuffle_uses_indices() {
        // Fisher-Yates over 3 elements asks for index(3) then index(2).
        let mut dice = ScriptedDice::new([0, 0]);
        let mut values = ['a', 'b', 'c'];
        dice.shuffle(&mut values);
        assert_eq!(values, ['b', 'c', 'a']);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut dice = ScriptedDice::default();
        let empty: [u8; 0] = [];
        assert!(dice.choose(&empty).is_none());
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_dice_panic_when_empty() {
        let mut dice = ScriptedDice::default();
        dice.roll(1, 5);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn scripted_dice_reject_out_of_range() {
        let mut dice = ScriptedDice::new([9]);
        dice.roll(1, 5);
    }
}
