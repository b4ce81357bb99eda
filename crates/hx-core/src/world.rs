use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::error::HxResult;
use crate::item::Vial;
use crate::room::{Room, RoomId};

/// Which focus delta each vial carries in this world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VialBinding {
    effects: Vec<(Vial, i32)>,
}

impl VialBinding {
    /// Bind vials to effects pairwise.
    pub fn new(effects: Vec<(Vial, i32)>) -> Self {
        Self { effects }
    }

    /// Focus delta of a vial. Unbound vials have no effect.
    pub fn effect(&self, vial: Vial) -> i32 {
        self.effects
            .iter()
            .find(|(v, _)| *v == vial)
            .map(|(_, e)| *e)
            .unwrap_or(0)
    }

    /// All bindings.
    pub fn iter(&self) -> impl Iterator<Item = (Vial, i32)> + '_ {
        self.effects.iter().copied()
    }
}

/// A populated building ready to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    building: Building,
    start: RoomId,
    villain: RoomId,
    vials: VialBinding,
}

impl World {
    /// Assemble a world. Marks `villain` as the villain's room.
    pub fn new(
        mut building: Building,
        start: RoomId,
        villain: RoomId,
        vials: VialBinding,
    ) -> HxResult<Self> {
        building.room(start)?;
        building.set_villain(villain)?;
        Ok(Self {
            building,
            start,
            villain,
            vials,
        })
    }

    /// The room graph and its contents.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Mutable access to the building.
    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }

    /// Where the player begins.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Where the villain waits.
    pub fn villain(&self) -> RoomId {
        self.villain
    }

    /// This world's vial effects.
    pub fn vials(&self) -> &VialBinding {
        &self.vials
    }

    /// Shorthand for `building().room(id)`.
    pub fn room(&self, id: RoomId) -> HxResult<&Room> {
        self.building.room(id)
    }

    /// Shorthand for `building_mut().room_mut(id)`.
    pub fn room_mut(&mut self, id: RoomId) -> HxResult<&mut Room> {
        self.building.room_mut(id)
    }

    /// Rooms a portal may drop the player into: everywhere but the villain's room.
    pub fn portal_destinations(&self) -> Vec<RoomId> {
        self.building
            .room_ids()
            .into_iter()
            .filter(|id| *id != self.villain)
            .collect()
    }
}
