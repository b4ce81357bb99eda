use crate::item::{FoundItem, QuestItem, Vial, Wildcard};
use crate::layout::{START_ROOM, VILLAIN_SAFE_ZONES};
use crate::robot::Robot;

/// Focus deltas bound to the vials, one per vial.
pub const VIAL_EFFECTS: [i32; 3] = [5, 3, -4];

/// Number of portals placed per world.
pub const PORTAL_COUNT: usize = 2;

/// Everything world generation places into a building.
#[derive(Debug, Clone)]
pub struct ContentPools {
    /// Device components.
    pub quest_items: Vec<QuestItem>,
    /// Single-use oddities.
    pub wildcards: Vec<Wildcard>,
    /// Focus vials.
    pub vials: Vec<Vial>,
    /// Effects shuffled across `vials`.
    pub vial_effects: Vec<i32>,
    /// Robots to station.
    pub robots: Vec<Robot>,
    /// How many portals to open.
    pub portals: usize,
    /// Name of the room every session starts in.
    pub start_room: String,
    /// Rooms the villain is never placed in.
    pub villain_safe_zones: Vec<String>,
}

impl ContentPools {
    /// The content of the Hexagon.
    pub fn standard() -> Self {
        Self {
            quest_items: QuestItem::ALL.to_vec(),
            wildcards: Wildcard::ALL.to_vec(),
            vials: Vial::ALL.to_vec(),
            vial_effects: VIAL_EFFECTS.to_vec(),
            robots: standard_robots(),
            portals: PORTAL_COUNT,
            start_room: START_ROOM.to_string(),
            villain_safe_zones: VILLAIN_SAFE_ZONES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Quest items, wildcards, then vials.
    pub fn all_items(&self) -> Vec<FoundItem> {
        self.quest_items
            .iter()
            .map(|q| FoundItem::Quest(*q))
            .chain(self.wildcards.iter().map(|w| FoundItem::Wildcard(*w)))
            .chain(self.vials.iter().map(|v| FoundItem::Vial(*v)))
            .collect()
    }
}

impl Default for ContentPools {
    fn default() -> Self {
        Self::standard()
    }
}

/// The six corrupted robots of the Hexagon.
pub fn standard_robots() -> Vec<Robot> {
    vec![
        Robot::new("Corrupted Floor Buffer", 2, 3),
        Robot::new("Malfunctioning Auto-Stapler", 2, 3),
        Robot::new("Aggressive BaristaBot", 4, 4),
        Robot::new("TPS Report Drone", 4, 4),
        Robot::new("Overzealous Scheduling Robot", 5, 5),
        Robot::new("Head of Synergy Enforcement Bot", 6, 6),
    ]
}
