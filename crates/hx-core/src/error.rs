use crate::room::RoomId;

/// Alias for `Result<T, HxError>`.
pub type HxResult<T> = Result<T, HxError>;

/// Errors that can occur when building or populating a world.
#[derive(Debug, thiserror::Error)]
pub enum HxError {
    /// The requested room ID does not exist in the building.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room name could not be resolved.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// A content pool holds more entries than there are rooms to receive them.
    #[error("cannot place {needed} {what}: only {available} rooms available")]
    PlacementOverflow {
        /// What was being placed (items, robots, portals).
        what: &'static str,
        /// Size of the pool.
        needed: usize,
        /// Rooms that could receive an entry.
        available: usize,
    },

    /// Every room is excluded from hosting the villain.
    #[error("no room can host the villain")]
    NoVillainCandidate,

    /// The vial effect table does not match the vial pool.
    #[error("vial pool has {vials} vials but {effects} effects")]
    VialMismatch {
        /// Number of vials in the pool.
        vials: usize,
        /// Number of effects to bind.
        effects: usize,
    },
}
