pub mod map;
pub mod play;

use hx_fiction::GameConfig;

/// Build a session config from the shared CLI flags.
fn config(seed: Option<u64>) -> GameConfig {
    match seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    }
}
