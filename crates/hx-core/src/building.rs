use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{HxError, HxResult};
use crate::room::{Direction, Room, RoomId, SpecialExit};

/// The room graph. Owns every room and indexes them by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Display name of the building.
    pub name: String,
    rooms: Vec<Room>,

    // Indexes
    #[serde(skip)]
    by_name_lower: HashMap<String, RoomId>,
}

impl Building {
    /// Create an empty building.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            by_name_lower: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room. Returns its ID.
    pub fn add_room(&mut self, name: impl Into<String>) -> HxResult<RoomId> {
        let name = name.into();
        let name_lower = name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(HxError::DuplicateRoom(name));
        }

        let id = RoomId(self.rooms.len());
        self.by_name_lower.insert(name_lower, id);
        self.rooms.push(Room::new(id, name));
        Ok(id)
    }

    /// Get a room by ID.
    pub fn room(&self, id: RoomId) -> HxResult<&Room> {
        self.rooms.get(id.0).ok_or(HxError::RoomNotFound(id))
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> HxResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(HxError::RoomNotFound(id))
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Find a room ID by name, failing if it does not exist.
    pub fn require(&self, name: &str) -> HxResult<RoomId> {
        self.find_id_by_name(name)
            .ok_or_else(|| HxError::UnknownRoom(name.to_string()))
    }

    /// All rooms, in authoring order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// All room IDs, in authoring order.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(Room::id).collect()
    }

    /// Number of rooms in the building.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> HxResult<()> {
        self.room(to)?;
        self.room_mut(from)?.set_exit(direction, to);
        Ok(())
    }

    /// Rooms reachable in one step from `id`.
    pub fn neighbors(&self, id: RoomId) -> HxResult<Vec<(Direction, RoomId)>> {
        Ok(self.room(id)?.exits().to_vec())
    }

    /// Where a staircase in `from` leads: the room holding the counterpart
    /// staircase. `None` if `from` has no stairs or the other end is missing.
    pub fn stairs_target(&self, from: RoomId) -> Option<RoomId> {
        let exit = self.rooms.get(from.0)?.special_exit()?;
        let other = exit.counterpart()?;
        self.rooms
            .iter()
            .find(|r| r.id() != from && r.special_exit() == Some(other))
            .map(Room::id)
    }

    // -----------------------------------------------------------------------
    // Contents
    // -----------------------------------------------------------------------

    /// The room the villain waits in, if one has been placed.
    pub fn villain_room(&self) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.is_villain()).map(Room::id)
    }

    /// Move the villain to `id`, clearing any previous villain room.
    pub fn set_villain(&mut self, id: RoomId) -> HxResult<()> {
        self.room(id)?;
        for room in &mut self.rooms {
            room.set_villain(room.id() == id);
        }
        Ok(())
    }

    /// Rooms holding a given special exit.
    pub fn rooms_with_exit(&self, exit: SpecialExit) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|r| r.special_exit() == Some(exit))
            .map(Room::id)
            .collect()
    }

    /// Rebuild the name index (needed after deserializing).
    pub fn reindex(&mut self) {
        self.by_name_lower = self
            .rooms
            .iter()
            .map(|r| (r.name().to_lowercase(), r.id()))
            .collect();
    }
}
