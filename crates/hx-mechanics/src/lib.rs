//! Game mechanics for Hexagon.
//!
//! Holds the player's focus and one-shot buffs, the table of item effects,
//! and the Reprogramming Sequence: the turn-based encounter between the
//! player and a corrupted robot. Player choices come in through the
//! [`EncounterDriver`] and [`ItemPicker`] traits; every random number comes
//! from a [`hx_core::Dice`].

pub mod encounter;
pub mod error;
pub mod item_use;
pub mod player;

pub use encounter::{
    Encounter, EncounterAction, EncounterDriver, EncounterEvent, EncounterOutcome, EncounterStatus,
};
pub use error::{MechError, MechResult};
pub use item_use::{
    ItemEffect, ItemPicker, NoActionReason, UseContext, UseOutcome, UsableItem, apply_item,
    usable_items, use_item,
};
pub use player::{Buff, PlayerState};
