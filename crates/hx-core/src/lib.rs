//! Core types for Hexagon: the building's room graph, the content catalogs
//! (items, robots), the dice abstraction, and the world generator.
//!
//! Nothing in this crate talks to a terminal. A [`World`] is produced by
//! [`generate::WorldGenerator`] from a static [`Building`] and a set of
//! [`content::ContentPools`], drawing all randomness from a [`Dice`] source.

/// The static room graph and its per-room contents.
pub mod building;
/// Fixed content pools: quest items, wildcards, vials, robots.
pub mod content;
/// Random sources used by generation and encounters.
pub mod dice;
/// Error types used throughout the crate.
pub mod error;
/// Randomized placement of content into a building.
pub mod generate;
/// Item types and the inventory.
pub mod item;
/// The authored layout of the Hexagon building.
pub mod layout;
/// Robots that block the player's path.
pub mod robot;
/// Room identity, directions, and special exits.
pub mod room;
/// A fully generated world.
pub mod world;

/// Re-export the room graph.
pub use building::Building;
/// Re-export content pools.
pub use content::ContentPools;
/// Re-export dice types.
pub use dice::{Dice, ScriptedDice};
/// Re-export error types.
pub use error::{HxError, HxResult};
/// Re-export the generator.
pub use generate::{WorldGenerator, generate_hexagon};
/// Re-export item types.
pub use item::{FoundItem, Inventory, Item, QuestItem, StartingItem, Vial, Wildcard};
/// Re-export robot types.
pub use robot::Robot;
/// Re-export room types.
pub use room::{Direction, Room, RoomId, SpecialExit};
/// Re-export world types.
pub use world::{VialBinding, World};
