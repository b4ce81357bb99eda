//! Randomized world generation.
//!
//! Takes an authored [`Building`] and a set of [`ContentPools`] and fills the
//! rooms: one villain room, then items and robots sliced from one shuffled
//! placement pool, then portals in robot-free rooms. Vials get their focus
//! effects shuffled at the same time.
//!
//! Items and robots are both assigned from the front of the same shuffled
//! pool, so a room may hold an item and a robot together. A room never holds
//! two items or two robots.

use log::debug;

use crate::building::Building;
use crate::content::ContentPools;
use crate::dice::Dice;
use crate::error::{HxError, HxResult};
use crate::room::{RoomId, SpecialExit};
use crate::world::{VialBinding, World};

/// Places content into a building.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    pools: ContentPools,
}

impl WorldGenerator {
    /// A generator for the given content.
    pub fn new(pools: ContentPools) -> Self {
        Self { pools }
    }

    /// The content this generator places.
    pub fn pools(&self) -> &ContentPools {
        &self.pools
    }

    /// Populate `building`. Previously placed items, robots, and portals are
    /// cleared first; stairs are kept.
    ///
    /// Fails if any pool is larger than the rooms available to it.
    pub fn generate<D: Dice>(&self, mut building: Building, dice: &mut D) -> HxResult<World> {
        clear_contents(&mut building)?;

        let vials = self.bind_vials(dice)?;

        let start = building.require(&self.pools.start_room)?;
        let villain = self.pick_villain(&building, start, dice)?;
        debug!("villain placed in {}", building.room(villain)?.name());

        let mut placement: Vec<RoomId> = building
            .room_ids()
            .into_iter()
            .filter(|id| *id != start && *id != villain)
            .collect();
        dice.shuffle(&mut placement);

        let mut items = self.pools.all_items();
        check_capacity("items", items.len(), placement.len())?;
        dice.shuffle(&mut items);
        for (room, item) in placement.iter().zip(items) {
            debug!("{item} placed in {}", building.room(*room)?.name());
            building.room_mut(*room)?.place_item(item);
        }

        let mut robots = self.pools.robots.clone();
        check_capacity("robots", robots.len(), placement.len())?;
        dice.shuffle(&mut robots);
        let robot_rooms = &placement[..robots.len()];
        for (room, robot) in robot_rooms.iter().zip(robots) {
            debug!("{} stationed in {}", robot.name, building.room(*room)?.name());
            building.room_mut(*room)?.place_robot(robot);
        }

        let mut portal_rooms = Vec::new();
        for id in &placement {
            let room = building.room(*id)?;
            if !robot_rooms.contains(id) && room.special_exit().is_none() {
                portal_rooms.push(*id);
            }
        }
        check_capacity("portals", self.pools.portals, portal_rooms.len())?;
        dice.shuffle(&mut portal_rooms);
        for room in &portal_rooms[..self.pools.portals] {
            debug!("portal opened in {}", building.room(*room)?.name());
            building
                .room_mut(*room)?
                .set_special_exit(Some(SpecialExit::Portal));
        }

        World::new(building, start, villain, vials)
    }

    fn bind_vials<D: Dice>(&self, dice: &mut D) -> HxResult<VialBinding> {
        if self.pools.vials.len() != self.pools.vial_effects.len() {
            return Err(HxError::VialMismatch {
                vials: self.pools.vials.len(),
                effects: self.pools.vial_effects.len(),
            });
        }
        let mut effects = self.pools.vial_effects.clone();
        dice.shuffle(&mut effects);
        Ok(VialBinding::new(
            self.pools.vials.iter().copied().zip(effects).collect(),
        ))
    }

    fn pick_villain<D: Dice>(
        &self,
        building: &Building,
        start: RoomId,
        dice: &mut D,
    ) -> HxResult<RoomId> {
        let mut excluded = vec![start];
        for name in &self.pools.villain_safe_zones {
            excluded.push(building.require(name)?);
        }
        let candidates: Vec<RoomId> = building
            .rooms()
            .filter(|r| !excluded.contains(&r.id()) && r.special_exit().is_none())
            .map(|r| r.id())
            .collect();
        dice.choose(&candidates)
            .copied()
            .ok_or(HxError::NoVillainCandidate)
    }
}

/// Populate the authored Hexagon with the standard content.
pub fn generate_hexagon<D: Dice>(dice: &mut D) -> HxResult<World> {
    WorldGenerator::default().generate(crate::layout::hexagon()?, dice)
}

fn check_capacity(what: &'static str, needed: usize, available: usize) -> HxResult<()> {
    if needed > available {
        return Err(HxError::PlacementOverflow {
            what,
            needed,
            available,
        });
    }
    Ok(())
}

fn clear_contents(building: &mut Building) -> HxResult<()> {
    for id in building.room_ids() {
        let room = building.room_mut(id)?;
        room.take_item();
        room.clear_robot();
        if room.special_exit() == Some(SpecialExit::Portal) {
            room.set_special_exit(None);
        }
    }
    Ok(())
}
