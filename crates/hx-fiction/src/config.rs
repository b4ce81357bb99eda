//! Configuration for a game session.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default length of a pacing beat.
pub const DEFAULT_PACE: Duration = Duration::from_millis(1500);

/// Configuration for a session.
///
/// Difficulty is fixed; only the random seed and the presentation pace can
/// be chosen.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for a reproducible world and reproducible rolls. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
    /// Length of the pauses a front end inserts for dramatic effect.
    pub pace: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pace: DEFAULT_PACE,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pacing delay.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// A random source for one session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Derive the config for the `n`th session of a run, so replays with
    /// the same seed produce the same sequence of worlds.
    pub fn for_round(&self, n: u64) -> Self {
        Self {
            seed: self.seed.map(|s| s.wrapping_add(n)),
            pace: self.pace,
        }
    }
}
