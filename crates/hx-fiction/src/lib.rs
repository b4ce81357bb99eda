//! Game loop for Hexagon.
//!
//! Drives a [`GameSession`] turn by turn: status, the villain check, robot
//! ambushes, then free actions (search, use, move, exit) until one ends the
//! turn. All input and output goes through the [`Frontend`] trait; the text
//! itself comes from the [`narrator`] and carries style tags instead of
//! terminal colors.

/// Session configuration.
pub mod config;
/// Error types for the game loop.
pub mod error;
/// The trait front ends implement, and the messages passed through it.
pub mod frontend;
/// Text for every message the game can show.
pub mod narrator;
/// Command and answer parsing.
pub mod parser;
/// Turn-by-turn session management.
pub mod session;
/// The per-turn status block.
pub mod status;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use frontend::{Frontend, Narration, Question};
pub use narrator::{Line, Style};
pub use parser::{Command, parse_command};
pub use session::{Ending, GameSession, TurnOutcome};
pub use status::StatusReport;
