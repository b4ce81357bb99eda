//! Error types for the game loop.

use thiserror::Error;

/// Result type for game loop operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A room has no exits to flee through.
    #[error("no exits to flee through from {0}")]
    DeadEnd(String),

    /// A staircase leads nowhere.
    #[error("the stairs in {0} have no other end")]
    BrokenStairs(String),

    /// Every room is closed to portals.
    #[error("no room for a portal to lead to")]
    NoPortalDestination,

    /// A robot was expected but missing.
    #[error("no robot in {0}")]
    NoRobot(String),

    /// World error.
    #[error(transparent)]
    Core(#[from] hx_core::HxError),

    /// Mechanics error.
    #[error(transparent)]
    Mechanics(#[from] hx_mechanics::MechError),
}
