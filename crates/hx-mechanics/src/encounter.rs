//! The Reprogramming Sequence: a turn-based fight against one robot.
//!
//! Each turn the player scans, uses an item, or forfeits. If the robot's
//! corruption reaches zero the player wins on the spot; otherwise the robot
//! attacks back. The fight ends when corruption or focus runs out, or when
//! the player uses a flee item.
//!
//! Everything that happens is reported as an [`EncounterEvent`], both to the
//! [`EncounterDriver`] and to the encounter's log.

use log::debug;
use serde::Serialize;

use hx_core::{Dice, Inventory, Robot, VialBinding};

use crate::error::MechResult;
use crate::item_use::{ItemPicker, UseContext, UseOutcome, use_item};
use crate::player::{Buff, PlayerState};

/// Highest base progress a scan can roll.
pub const SCAN_MAX: i32 = 5;

/// Extra scan progress from the roll bonus.
pub const ROLL_BONUS: i32 = 2;

/// Focus restored by forfeiting a turn.
pub const FORFEIT_RESTORE: i32 = 2;

/// Number of taunts a robot picks from when it lands an attack.
pub const TAUNT_COUNT: usize = 3;

/// What the player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterAction {
    /// Run a diagnostic scan.
    Scan,
    /// Open the item menu.
    UseItem,
    /// Skip the turn and recover focus.
    Forfeit,
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EncounterOutcome {
    /// The robot was pacified.
    Win,
    /// The player ran out of focus.
    Lose,
    /// The player escaped.
    Flee,
}

/// Snapshot shown to the driver before each choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterStatus {
    /// Robot name.
    pub robot: String,
    /// Robot corruption.
    pub corruption: i32,
    /// Player focus.
    pub focus: i32,
    /// Turn number, starting at 1.
    pub turn: u32,
}

/// Something that happened during an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EncounterEvent {
    /// The robot blocks the player's path.
    Started {
        /// Robot name.
        robot: String,
        /// Starting corruption.
        corruption: i32,
        /// Player focus going in.
        focus: i32,
    },
    /// A scan was run.
    Scanned {
        /// Rolled progress.
        base: i32,
        /// Whether the Executive Order doubled it.
        doubled: bool,
        /// Whether the diary logs added their bonus.
        bonus: bool,
        /// Total progress applied.
        progress: i32,
        /// Corruption left.
        corruption: i32,
    },
    /// The item menu was opened.
    ItemUsed(UseOutcome),
    /// The player skipped the turn.
    Forfeited {
        /// Focus restored.
        restored: i32,
        /// Focus after restoring.
        focus: i32,
    },
    /// The robot's corruption hit zero.
    Cleared {
        /// Robot name.
        robot: String,
    },
    /// The logic filter blocked an attack.
    Blocked,
    /// The robot drained focus.
    Attacked {
        /// Focus lost.
        drain: i32,
        /// Focus left.
        focus: i32,
        /// Which taunt the robot used, below [`TAUNT_COUNT`].
        taunt: usize,
    },
    /// Both sides have acted.
    TurnEnded {
        /// Player focus.
        focus: i32,
        /// Robot corruption.
        corruption: i32,
    },
}

/// Supplies the player's decisions and receives the running commentary.
pub trait EncounterDriver: ItemPicker {
    /// Choose this turn's action.
    fn choose_action(&mut self, status: &EncounterStatus) -> EncounterAction;

    /// React to an event.
    fn observe(&mut self, event: &EncounterEvent);

    /// The beat between the player's action and the robot's reply.
    fn pause(&mut self) {}
}

/// A single encounter against one robot.
///
/// The robot is borrowed mutably so its corruption persists if the player
/// flees and comes back later.
#[derive(Debug)]
pub struct Encounter<'r> {
    robot: &'r mut Robot,
    turn: u32,
    log: Vec<EncounterEvent>,
}

impl<'r> Encounter<'r> {
    /// Prepare an encounter.
    pub fn new(robot: &'r mut Robot) -> Self {
        Self {
            robot,
            turn: 0,
            log: Vec::new(),
        }
    }

    /// The robot being fought.
    pub fn robot(&self) -> &Robot {
        self.robot
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every event so far, in order.
    pub fn log(&self) -> &[EncounterEvent] {
        &self.log
    }

    /// Fight to the end.
    pub fn run<D, R>(
        &mut self,
        player: &mut PlayerState,
        inventory: &mut Inventory,
        vials: &VialBinding,
        dice: &mut D,
        driver: &mut R,
    ) -> MechResult<EncounterOutcome>
    where
        D: Dice,
        R: EncounterDriver + ?Sized,
    {
        self.record(
            driver,
            EncounterEvent::Started {
                robot: self.robot.name.clone(),
                corruption: self.robot.corruption,
                focus: player.focus(),
            },
        );

        while !self.robot.is_pacified() && !player.is_overwhelmed() {
            self.turn += 1;
            let status = self.status(player);
            match driver.choose_action(&status) {
                EncounterAction::Scan => self.scan(player, dice, driver),
                EncounterAction::UseItem => {
                    let outcome =
                        use_item(player, inventory, vials, UseContext::Encounter, driver)?;
                    let fled = outcome == UseOutcome::Flee;
                    self.record(driver, EncounterEvent::ItemUsed(outcome));
                    if fled {
                        debug!("fled from {}", self.robot.name);
                        return Ok(EncounterOutcome::Flee);
                    }
                }
                EncounterAction::Forfeit => {
                    let focus = player.restore(FORFEIT_RESTORE);
                    self.record(
                        driver,
                        EncounterEvent::Forfeited {
                            restored: FORFEIT_RESTORE,
                            focus,
                        },
                    );
                }
            }

            if self.robot.is_pacified() {
                break;
            }

            driver.pause();
            self.robot_attacks(player, dice, driver);
            self.record(
                driver,
                EncounterEvent::TurnEnded {
                    focus: player.focus(),
                    corruption: self.robot.corruption,
                },
            );
        }

        if player.is_overwhelmed() {
            debug!("overwhelmed by {} after {} turns", self.robot.name, self.turn);
            return Ok(EncounterOutcome::Lose);
        }
        self.record(
            driver,
            EncounterEvent::Cleared {
                robot: self.robot.name.clone(),
            },
        );
        Ok(EncounterOutcome::Win)
    }

    fn status(&self, player: &PlayerState) -> EncounterStatus {
        EncounterStatus {
            robot: self.robot.name.clone(),
            corruption: self.robot.corruption,
            focus: player.focus(),
            turn: self.turn,
        }
    }

    fn scan<D, R>(&mut self, player: &mut PlayerState, dice: &mut D, driver: &mut R)
    where
        D: Dice,
        R: EncounterDriver + ?Sized,
    {
        let base = dice.roll(1, SCAN_MAX);
        let mut progress = base;
        let doubled = player.consume(Buff::DoubleScan);
        if doubled {
            progress *= 2;
        }
        let bonus = player.consume(Buff::RollBonus);
        if bonus {
            progress += ROLL_BONUS;
        }
        let corruption = self.robot.reprogram(progress);
        debug!("scan rolled {base}, progress {progress}, corruption now {corruption}");
        self.record(
            driver,
            EncounterEvent::Scanned {
                base,
                doubled,
                bonus,
                progress,
                corruption,
            },
        );
    }

    fn robot_attacks<D, R>(&mut self, player: &mut PlayerState, dice: &mut D, driver: &mut R)
    where
        D: Dice,
        R: EncounterDriver + ?Sized,
    {
        let drain = dice.roll(1, self.robot.max_focus_drain);
        if player.consume(Buff::LogicFilter) {
            debug!("{} attack for {drain} blocked", self.robot.name);
            self.record(driver, EncounterEvent::Blocked);
            return;
        }
        let focus = player.drain(drain);
        let taunt = dice.index(TAUNT_COUNT);
        debug!("{} drained {drain}, focus now {focus}", self.robot.name);
        self.record(driver, EncounterEvent::Attacked { drain, focus, taunt });
    }

    fn record<R: EncounterDriver + ?Sized>(&mut self, driver: &mut R, event: EncounterEvent) {
        driver.observe(&event);
        self.log.push(event);
    }
}
