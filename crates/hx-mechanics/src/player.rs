//! Player focus and one-shot buffs.
//!
//! Focus is the player's only health resource. Item effects never push it
//! below [`FOCUS_FLOOR`]; only a robot attack can drop it to zero or below.

use serde::{Deserialize, Serialize};

/// Focus at the start of every session.
pub const STARTING_FOCUS: i32 = 15;

/// Lowest focus an item effect can leave the player with.
pub const FOCUS_FLOOR: i32 = 1;

/// A single-use modifier armed by an item and cleared when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Buff {
    /// The next scan's progress is doubled.
    DoubleScan,
    /// The next scan gets +2 progress.
    RollBonus,
    /// The next robot attack is blocked.
    LogicFilter,
}

impl Buff {
    /// All buffs, in the order they are applied.
    pub const ALL: [Buff; 3] = [Self::DoubleScan, Self::RollBonus, Self::LogicFilter];

    /// Label shown in the status block.
    pub fn label(self) -> &'static str {
        match self {
            Self::DoubleScan => "Executive Order",
            Self::RollBonus => "Subpoenaed Diary Logs",
            Self::LogicFilter => "Logic Filter",
        }
    }
}

/// The player's mutable state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    focus: i32,
    double_scan: bool,
    roll_bonus: bool,
    logic_filter: bool,
}

impl PlayerState {
    /// A fresh player at [`STARTING_FOCUS`] with no buffs.
    pub fn new() -> Self {
        Self::with_focus(STARTING_FOCUS)
    }

    /// A player with the given focus and no buffs.
    pub fn with_focus(focus: i32) -> Self {
        Self {
            focus,
            double_scan: false,
            roll_bonus: false,
            logic_filter: false,
        }
    }

    /// Current focus.
    pub fn focus(&self) -> i32 {
        self.focus
    }

    /// Whether focus has run out.
    pub fn is_overwhelmed(&self) -> bool {
        self.focus <= 0
    }

    // -----------------------------------------------------------------------
    // Focus changes
    // -----------------------------------------------------------------------

    /// Add focus without any clamping. Returns the new focus.
    pub fn restore(&mut self, amount: i32) -> i32 {
        self.focus += amount;
        self.focus
    }

    /// Apply an item's focus delta, never going below [`FOCUS_FLOOR`].
    /// Returns the new focus.
    pub fn apply_item_delta(&mut self, delta: i32) -> i32 {
        self.focus = (self.focus + delta).max(FOCUS_FLOOR);
        self.focus
    }

    /// Lose focus to a robot attack. May drop to zero or below.
    pub fn drain(&mut self, amount: i32) -> i32 {
        self.focus -= amount;
        self.focus
    }

    // -----------------------------------------------------------------------
    // Buffs
    // -----------------------------------------------------------------------

    /// Arm a buff. Arming an already armed buff has no extra effect.
    pub fn arm(&mut self, buff: Buff) {
        *self.slot(buff) = true;
    }

    /// Whether a buff is armed.
    pub fn is_armed(&self, buff: Buff) -> bool {
        match buff {
            Buff::DoubleScan => self.double_scan,
            Buff::RollBonus => self.roll_bonus,
            Buff::LogicFilter => self.logic_filter,
        }
    }

    /// Clear a buff, returning whether it was armed.
    pub fn consume(&mut self, buff: Buff) -> bool {
        std::mem::replace(self.slot(buff), false)
    }

    /// Armed buffs, in application order.
    pub fn active_buffs(&self) -> Vec<Buff> {
        Buff::ALL
            .into_iter()
            .filter(|b| self.is_armed(*b))
            .collect()
    }

    fn slot(&mut self, buff: Buff) -> &mut bool {
        match buff {
            Buff::DoubleScan => &mut self.double_scan,
            Buff::RollBonus => &mut self.roll_bonus,
            Buff::LogicFilter => &mut self.logic_filter,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player() {
        let p = PlayerState::new();
        assert_eq!(p.focus(), 15);
        assert!(p.active_buffs().is_empty());
        assert!(!p.is_overwhelmed());
    }

    #[test]
    fn item_delta_floors_at_one() {
        let mut p = PlayerState::with_focus(2);
        assert_eq!(p.apply_item_delta(-4), 1);
        assert_eq!(p.apply_item_delta(5), 6);
    }

    #[test]
    fn drain_can_overwhelm() {
        let mut p = PlayerState::with_focus(3);
        assert_eq!(p.drain(5), -2);
        assert!(p.is_overwhelmed());
    }

    #[test]
    fn buffs_are_one_shot() {
        let mut p = PlayerState::new();
        p.arm(Buff::LogicFilter);
        p.arm(Buff::LogicFilter);
        assert_eq!(p.active_buffs(), vec![Buff::LogicFilter]);
        assert!(p.consume(Buff::LogicFilter));
        assert!(!p.consume(Buff::LogicFilter));
        assert!(!p.is_armed(Buff::LogicFilter));
    }

    #[test]
    fn active_buffs_in_order() {
        let mut p = PlayerState::new();
        p.arm(Buff::LogicFilter);
        p.arm(Buff::DoubleScan);
        assert_eq!(p.active_buffs(), vec![Buff::DoubleScan, Buff::LogicFilter]);
    }
}
