//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An inventory slot does not exist.
    #[error("inventory slot {slot} out of range ({len} items)")]
    SlotOutOfRange {
        /// Requested slot.
        slot: usize,
        /// Inventory length.
        len: usize,
    },

    /// The item in a slot cannot be used.
    #[error("{0} cannot be used")]
    NotUsable(String),

    /// A picker returned an index outside the menu it was shown.
    #[error("menu choice {choice} out of range ({options} options)")]
    InvalidChoice {
        /// The returned index.
        choice: usize,
        /// Number of options offered.
        options: usize,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
