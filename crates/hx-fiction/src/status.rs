//! The per-turn status block.

use serde::Serialize;

use hx_core::{Inventory, QuestItem};
use hx_mechanics::{Buff, PlayerState};

/// What the player sees at the top of each turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Current room name.
    pub room: String,
    /// Current focus.
    pub focus: i32,
    /// Distinct quest components carried.
    pub quest_found: usize,
    /// Size of the quest set.
    pub quest_total: usize,
    /// Inventory labels, starting items marked ready or used.
    pub inventory: Vec<String>,
    /// Armed buffs.
    pub buffs: Vec<Buff>,
}

impl StatusReport {
    /// Collect the status for a player standing in `room`.
    pub fn new(room: impl Into<String>, player: &PlayerState, inventory: &Inventory) -> Self {
        Self {
            room: room.into(),
            focus: player.focus(),
            quest_found: inventory.quest_progress(),
            quest_total: QuestItem::ALL.len(),
            inventory: inventory.labels(),
            buffs: player.active_buffs(),
        }
    }
}
