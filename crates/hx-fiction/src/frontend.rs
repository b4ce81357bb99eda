//! The seam between the game loop and whatever displays it.

use hx_core::{Direction, FoundItem, SpecialExit};
use hx_mechanics::{EncounterDriver, UseOutcome};

use crate::status::StatusReport;

/// A yes/no decision put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Pick up the item found by searching.
    TakeItem(FoundItem),
    /// Climb or descend the staircase.
    UseStairs(SpecialExit),
    /// Step through the portal.
    EnterPortal,
}

/// Something the game loop reports outside an encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    /// The player walked into the villain's office.
    VillainConfronted {
        /// Whether the full quest set was carried.
        victory: bool,
    },
    /// A robot was reprogrammed and removed from the room.
    RobotPacified {
        /// Robot name.
        robot: String,
    },
    /// The player escaped an encounter through an exit.
    Fled {
        /// Exit taken.
        direction: Direction,
        /// Room reached.
        room: String,
    },
    /// Focus ran out during an encounter.
    Overwhelmed,
    /// A search has started.
    Searching,
    /// An item was added to the inventory.
    PickedUp(FoundItem),
    /// The search turned up nothing.
    NothingFound,
    /// The player took the stairs.
    TookStairs {
        /// Which end of the staircase was used.
        exit: SpecialExit,
        /// Room reached.
        room: String,
    },
    /// The player went through a portal.
    EnteredPortal {
        /// Room reached.
        room: String,
    },
    /// The item menu was used outside an encounter.
    ItemUse(UseOutcome),
    /// A direction with no exit was typed.
    NoExit(Direction),
    /// Unrecognized input at the room prompt.
    InvalidCommand(String),
}

/// Everything a session needs from its surroundings.
///
/// The encounter methods come from [`EncounterDriver`]; the rest cover the
/// room prompt.
pub trait Frontend: EncounterDriver {
    /// Show the status block at the start of a turn.
    fn show_status(&mut self, status: &StatusReport);

    /// Read one line at the room prompt. `None` means input has ended.
    fn read_command(&mut self, exits: &[Direction]) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &Question) -> bool;

    /// Report something that happened.
    fn narrate(&mut self, narration: &Narration);
}
