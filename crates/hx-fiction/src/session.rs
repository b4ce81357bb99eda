//! Turn-by-turn session management.
//!
//! A turn runs in a fixed order: status, the villain check, a robot ambush,
//! then free actions until one of them ends the turn. Searching and using
//! items are free; moving, taking a special exit, and exiting end the turn.

use log::{debug, info};
use rand::rngs::StdRng;
use serde::Serialize;

use hx_core::{Dice, Inventory, RoomId, SpecialExit, World, generate_hexagon};
use hx_mechanics::{Encounter, EncounterOutcome, PlayerState, UseContext, use_item};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::frontend::{Frontend, Narration, Question};
use crate::parser::{Command, parse_command};
use crate::status::StatusReport;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    /// Reached the villain with the full quest set.
    Victory,
    /// Reached the villain without it.
    Defeat,
    /// Lost all focus to a robot.
    Overwhelmed,
    /// The player typed EXIT or input ran out.
    Quit,
}

impl Ending {
    /// Whether the player won.
    pub fn is_victory(self) -> bool {
        self == Self::Victory
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Victory => write!(f, "victory"),
            Self::Defeat => write!(f, "defeat"),
            Self::Overwhelmed => write!(f, "overwhelmed"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play goes on.
    Continue,
    /// The session is over.
    Ended(Ending),
}

/// One playthrough of a generated world.
pub struct GameSession<D: Dice> {
    world: World,
    player: PlayerState,
    inventory: Inventory,
    location: RoomId,
    dice: D,
    turns: u32,
}

impl GameSession<StdRng> {
    /// Generate a fresh world and start a session in it.
    pub fn from_config(config: &GameConfig) -> FictionResult<Self> {
        let mut rng = config.rng();
        let world = generate_hexagon(&mut rng)?;
        info!(
            "generated world (seed {:?}), villain in {}",
            config.seed,
            world.room(world.villain())?.name()
        );
        Ok(Self::new(world, rng))
    }
}

impl<D: Dice> GameSession<D> {
    /// Start a session at the world's start room with a fresh player.
    pub fn new(world: World, dice: D) -> Self {
        let location = world.start();
        Self {
            world,
            player: PlayerState::new(),
            inventory: Inventory::new(),
            location,
            dice,
            turns: 0,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player's focus and buffs.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player's state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The carried items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the carried items.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// The room the player stands in.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// Put the player in a room.
    pub fn set_location(&mut self, room: RoomId) -> FictionResult<()> {
        self.world.room(room)?;
        self.location = room;
        Ok(())
    }

    /// Turns started so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The status block for the current turn.
    pub fn status(&self) -> FictionResult<StatusReport> {
        let room = self.world.room(self.location)?;
        Ok(StatusReport::new(room.name(), &self.player, &self.inventory))
    }

    /// Play turns until the session ends.
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> FictionResult<Ending> {
        loop {
            if let TurnOutcome::Ended(ending) = self.play_turn(frontend)? {
                info!("session ended after {} turns: {ending}", self.turns);
                return Ok(ending);
            }
        }
    }

    /// Play a single turn.
    pub fn play_turn<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> FictionResult<TurnOutcome> {
        self.turns += 1;
        frontend.show_status(&self.status()?);

        let room = self.world.room(self.location)?;
        if room.is_villain() {
            let victory = self.inventory.has_quest_set();
            frontend.narrate(&Narration::VillainConfronted { victory });
            let ending = if victory {
                Ending::Victory
            } else {
                Ending::Defeat
            };
            return Ok(TurnOutcome::Ended(ending));
        }

        if room.robot().is_some() {
            return self.ambush(frontend);
        }

        loop {
            let room = self.world.room(self.location)?;
            let exits = room.exit_directions();
            let Some(input) = frontend.read_command(&exits) else {
                debug!("input ended, quitting");
                return Ok(TurnOutcome::Ended(Ending::Quit));
            };
            match parse_command(&input) {
                Command::Search => {
                    if self.search(frontend)? {
                        return Ok(TurnOutcome::Continue);
                    }
                }
                Command::Use => {
                    let outcome = use_item(
                        &mut self.player,
                        &mut self.inventory,
                        self.world.vials(),
                        UseContext::Exploration,
                        frontend,
                    )?;
                    frontend.narrate(&Narration::ItemUse(outcome));
                }
                Command::Move(direction) => match room.exit(direction) {
                    Some(to) => {
                        debug!("moved {direction} to {}", self.world.room(to)?.name());
                        self.location = to;
                        return Ok(TurnOutcome::Continue);
                    }
                    None => frontend.narrate(&Narration::NoExit(direction)),
                },
                Command::Exit => return Ok(TurnOutcome::Ended(Ending::Quit)),
                Command::Unknown(input) => frontend.narrate(&Narration::InvalidCommand(input)),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Encounters
    // -----------------------------------------------------------------------

    fn ambush<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> FictionResult<TurnOutcome> {
        let here = self.location;
        let vials = self.world.vials().clone();
        let room = self.world.room_mut(here)?;
        let room_name = room.name().to_string();
        let robot = room
            .robot_mut()
            .ok_or_else(|| FictionError::NoRobot(room_name.clone()))?;
        let robot_name = robot.name.clone();

        let outcome = Encounter::new(robot).run(
            &mut self.player,
            &mut self.inventory,
            &vials,
            &mut self.dice,
            frontend,
        )?;
        info!("encounter with {robot_name} in {room_name}: {outcome:?}");

        match outcome {
            EncounterOutcome::Win => {
                self.world.room_mut(here)?.clear_robot();
                frontend.narrate(&Narration::RobotPacified { robot: robot_name });
                Ok(TurnOutcome::Continue)
            }
            EncounterOutcome::Flee => {
                let exits = self.world.room(here)?.exits().to_vec();
                let (direction, to) = *self
                    .dice
                    .choose(&exits)
                    .ok_or(FictionError::DeadEnd(room_name))?;
                self.location = to;
                frontend.narrate(&Narration::Fled {
                    direction,
                    room: self.world.room(to)?.name().to_string(),
                });
                Ok(TurnOutcome::Continue)
            }
            EncounterOutcome::Lose => {
                frontend.narrate(&Narration::Overwhelmed);
                Ok(TurnOutcome::Ended(Ending::Overwhelmed))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// Offer the room's item, then its special exit. Returns true if the
    /// player took the exit.
    fn search<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> FictionResult<bool> {
        frontend.narrate(&Narration::Searching);
        let here = self.location;
        let room = self.world.room(here)?;
        let item = room.item();
        let special = room.special_exit();

        if let Some(item) = item {
            let take = frontend.confirm(&Question::TakeItem(item));
            if take {
                self.world.room_mut(here)?.take_item();
                self.inventory.add(item);
                debug!("picked up {item}");
                frontend.narrate(&Narration::PickedUp(item));
            }
        }

        if let Some(exit) = special {
            let question = match exit {
                SpecialExit::Portal => Question::EnterPortal,
                stairs => Question::UseStairs(stairs),
            };
            if frontend.confirm(&question) {
                let target = self.special_exit_target(exit)?;
                let name = self.world.room(target)?.name().to_string();
                self.location = target;
                frontend.narrate(&match exit {
                    SpecialExit::Portal => Narration::EnteredPortal { room: name },
                    stairs => Narration::TookStairs { exit: stairs, room: name },
                });
                return Ok(true);
            }
        }

        if item.is_none() && special.is_none() {
            frontend.narrate(&Narration::NothingFound);
        }
        Ok(false)
    }

    fn special_exit_target(&mut self, exit: SpecialExit) -> FictionResult<RoomId> {
        match exit {
            SpecialExit::Portal => {
                let destinations = self.world.portal_destinations();
                self.dice
                    .choose(&destinations)
                    .copied()
                    .ok_or(FictionError::NoPortalDestination)
            }
            SpecialExit::StairsUp | SpecialExit::StairsDown => {
                self.world.building().stairs_target(self.location).ok_or_else(|| {
                    let name = self
                        .world
                        .room(self.location)
                        .map(|r| r.name().to_string())
                        .unwrap_or_default();
                    FictionError::BrokenStairs(name)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use hx_core::{
        Building, Direction, FoundItem, QuestItem, Robot, ScriptedDice, StartingItem,
        VialBinding,
    };
    use hx_mechanics::{
        EncounterAction, EncounterDriver, EncounterEvent, EncounterStatus, ItemPicker,
        NoActionReason, UsableItem, UseOutcome,
    };

    /// Plays back canned input and records everything shown.
    #[derive(Default)]
    struct ScriptedFrontend {
        commands: VecDeque<&'static str>,
        answers: VecDeque<bool>,
        actions: VecDeque<EncounterAction>,
        picks: VecDeque<Option<usize>>,
        statuses: Vec<StatusReport>,
        narrations: Vec<Narration>,
        events: Vec<EncounterEvent>,
    }

    impl ScriptedFrontend {
        fn commands(commands: impl IntoIterator<Item = &'static str>) -> Self {
            Self {
                commands: commands.into_iter().collect(),
                ..Self::default()
            }
        }

        fn answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
            self.answers = answers.into_iter().collect();
            self
        }

        fn actions(mut self, actions: impl IntoIterator<Item = EncounterAction>) -> Self {
            self.actions = actions.into_iter().collect();
            self
        }

        fn picks(mut self, picks: impl IntoIterator<Item = Option<usize>>) -> Self {
            self.picks = picks.into_iter().collect();
            self
        }
    }

    impl ItemPicker for ScriptedFrontend {
        fn pick_item(&mut self, _usable: &[UsableItem]) -> Option<usize> {
            self.picks.pop_front().flatten()
        }
    }

    impl EncounterDriver for ScriptedFrontend {
        fn choose_action(&mut self, _status: &EncounterStatus) -> EncounterAction {
            self.actions.pop_front().unwrap_or(EncounterAction::Scan)
        }

        fn observe(&mut self, event: &EncounterEvent) {
            self.events.push(event.clone());
        }
    }

    impl Frontend for ScriptedFrontend {
        fn show_status(&mut self, status: &StatusReport) {
            self.statuses.push(status.clone());
        }

        fn read_command(&mut self, _exits: &[Direction]) -> Option<String> {
            self.commands.pop_front().map(str::to_string)
        }

        fn confirm(&mut self, _question: &Question) -> bool {
            self.answers.pop_front().unwrap_or(false)
        }

        fn narrate(&mut self, narration: &Narration) {
            self.narrations.push(narration.clone());
        }
    }

    const A: RoomId = RoomId(0);
    const B: RoomId = RoomId(1);
    const C: RoomId = RoomId(2);
    const D: RoomId = RoomId(3);

    /// A -east-> B -east-> C (villain); A -south-> D.
    fn small_world() -> World {
        let mut building = Building::new("Annex");
        for name in ["A", "B", "C", "D"] {
            building.add_room(name).unwrap();
        }
        building.connect(A, Direction::East, B).unwrap();
        building.connect(A, Direction::South, D).unwrap();
        building.connect(B, Direction::West, A).unwrap();
        building.connect(B, Direction::East, C).unwrap();
        building.connect(D, Direction::North, A).unwrap();
        World::new(building, A, C, VialBinding::new(vec![])).unwrap()
    }

    fn session(dice: impl IntoIterator<Item = i32>) -> GameSession<ScriptedDice> {
        GameSession::new(small_world(), ScriptedDice::new(dice))
    }

    // -----------------------------------------------------------------------
    // Villain
    // -----------------------------------------------------------------------

    #[test]
    fn villain_with_full_set_is_victory() {
        let mut s = session([]);
        for quest in QuestItem::ALL {
            s.inventory_mut().add(FoundItem::Quest(quest));
        }
        s.set_location(C).unwrap();
        let mut fe = ScriptedFrontend::default();

        let outcome = s.play_turn(&mut fe).unwrap();
        assert_eq!(outcome, TurnOutcome::Ended(Ending::Victory));
        assert_eq!(
            fe.narrations,
            vec![Narration::VillainConfronted { victory: true }]
        );
        assert_eq!(fe.statuses[0].quest_found, 7);
    }

    #[test]
    fn villain_without_full_set_is_defeat() {
        let mut s = session([]);
        s.inventory_mut().add(FoundItem::Quest(QuestItem::FactChecker));
        s.set_location(C).unwrap();
        let mut fe = ScriptedFrontend::commands(["east"]);

        let outcome = s.play_turn(&mut fe).unwrap();
        assert_eq!(outcome, TurnOutcome::Ended(Ending::Defeat));
        assert_eq!(fe.commands.len(), 1, "no prompt in the villain's room");
    }

    #[test]
    fn villain_with_one_quest_item_missing_is_defeat() {
        let mut s = session([]);
        for quest in &QuestItem::ALL[..6] {
            s.inventory_mut().add(FoundItem::Quest(*quest));
        }
        s.set_location(C).unwrap();
        let mut fe = ScriptedFrontend::default();

        let outcome = s.play_turn(&mut fe).unwrap();
        assert_eq!(outcome, TurnOutcome::Ended(Ending::Defeat));
        assert_eq!(
            fe.narrations,
            vec![Narration::VillainConfronted { victory: false }]
        );
        assert_eq!(fe.statuses[0].quest_found, 6);
    }

    #[test]
    fn villain_with_full_set_and_wildcards_is_victory() {
        let mut s = session([]);
        s.inventory_mut()
            .add(FoundItem::Wildcard(hx_core::Wildcard::SnackCake));
        for quest in QuestItem::ALL {
            s.inventory_mut().add(FoundItem::Quest(quest));
        }
        s.inventory_mut()
            .add(FoundItem::Wildcard(hx_core::Wildcard::BlankKeycard));
        s.set_location(C).unwrap();
        let mut fe = ScriptedFrontend::default();

        let outcome = s.play_turn(&mut fe).unwrap();
        assert_eq!(outcome, TurnOutcome::Ended(Ending::Victory));
        assert_eq!(
            fe.narrations,
            vec![Narration::VillainConfronted { victory: true }]
        );
    }

    // -----------------------------------------------------------------------
    // Moving and prompting
    // -----------------------------------------------------------------------

    #[test]
    fn moving_ends_the_turn() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["east", "west"]);
        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), B);
        assert_eq!(fe.commands.len(), 1);
    }

    #[test]
    fn bad_input_reprompts_without_ending_the_turn() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["north", "dance", "South"]);
        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), D);
        assert_eq!(
            fe.narrations,
            vec![
                Narration::NoExit(Direction::North),
                Narration::InvalidCommand("dance".to_string()),
            ]
        );
        assert_eq!(fe.statuses.len(), 1);
    }

    #[test]
    fn exit_and_end_of_input_quit() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["exit"]);
        assert_eq!(
            s.play_turn(&mut fe).unwrap(),
            TurnOutcome::Ended(Ending::Quit)
        );

        let mut fe = ScriptedFrontend::default();
        assert_eq!(
            s.play_turn(&mut fe).unwrap(),
            TurnOutcome::Ended(Ending::Quit)
        );
    }

    #[test]
    fn run_counts_turns_until_quit() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["east", "west", "exit"]);
        assert_eq!(s.run(&mut fe).unwrap(), Ending::Quit);
        assert_eq!(s.turns(), 3);
        assert_eq!(s.location(), A);
    }

    #[test]
    fn run_ends_at_the_villain() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["east", "east"]);
        assert_eq!(s.run(&mut fe).unwrap(), Ending::Defeat);
        assert_eq!(s.turns(), 3);
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    #[test]
    fn search_picks_up_item_and_turn_continues() {
        let mut s = session([]);
        let item = FoundItem::Quest(QuestItem::GreenEnergyCore);
        s.world_mut().room_mut(A).unwrap().place_item(item);
        let mut fe = ScriptedFrontend::commands(["search", "search", "east"]).answers([true]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert!(s.inventory().contains(item));
        assert_eq!(s.world().room(A).unwrap().item(), None);
        assert_eq!(
            fe.narrations,
            vec![
                Narration::Searching,
                Narration::PickedUp(item),
                Narration::Searching,
                Narration::NothingFound,
            ]
        );
        assert_eq!(s.location(), B);
    }

    #[test]
    fn declined_item_stays_in_the_room() {
        let mut s = session([]);
        let item = FoundItem::Quest(QuestItem::FactChecker);
        s.world_mut().room_mut(A).unwrap().place_item(item);
        let mut fe = ScriptedFrontend::commands(["search", "exit"]).answers([false]);

        s.play_turn(&mut fe).unwrap();
        assert_eq!(s.world().room(A).unwrap().item(), Some(item));
        assert_eq!(s.inventory().len(), 3);
        assert_eq!(fe.narrations, vec![Narration::Searching]);
    }

    #[test]
    fn portal_moves_to_a_random_non_villain_room() {
        // Destinations are A, B, D; index 2 picks D.
        let mut s = session([2]);
        s.world_mut()
            .room_mut(A)
            .unwrap()
            .set_special_exit(Some(SpecialExit::Portal));
        let mut fe = ScriptedFrontend::commands(["search"]).answers([true]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), D);
        assert_eq!(
            fe.narrations.last(),
            Some(&Narration::EnteredPortal {
                room: "D".to_string()
            })
        );
    }

    #[test]
    fn item_then_stairs_in_one_search() {
        let mut s = session([]);
        let item = FoundItem::Wildcard(hx_core::Wildcard::SnackCake);
        {
            let world = s.world_mut();
            let a = world.room_mut(A).unwrap();
            a.place_item(item);
            a.set_special_exit(Some(SpecialExit::StairsUp));
            world
                .room_mut(D)
                .unwrap()
                .set_special_exit(Some(SpecialExit::StairsDown));
        }
        let mut fe = ScriptedFrontend::commands(["search"]).answers([true, true]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), D);
        assert_eq!(
            fe.narrations,
            vec![
                Narration::Searching,
                Narration::PickedUp(item),
                Narration::TookStairs {
                    exit: SpecialExit::StairsUp,
                    room: "D".to_string()
                },
            ]
        );
    }

    #[test]
    fn stairs_without_other_end_is_an_error() {
        let mut s = session([]);
        s.world_mut()
            .room_mut(A)
            .unwrap()
            .set_special_exit(Some(SpecialExit::StairsDown));
        let mut fe = ScriptedFrontend::commands(["search"]).answers([true]);
        assert!(matches!(
            s.play_turn(&mut fe),
            Err(FictionError::BrokenStairs(name)) if name == "A"
        ));
    }

    // -----------------------------------------------------------------------
    // Items outside encounters
    // -----------------------------------------------------------------------

    #[test]
    fn use_does_not_end_the_turn() {
        let mut s = session([]);
        let mut fe = ScriptedFrontend::commands(["use", "use", "east"]).picks([Some(0), None]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), B);
        assert_eq!(
            fe.narrations,
            vec![
                Narration::ItemUse(UseOutcome::NoAction(NoActionReason::CombatOnly(
                    StartingItem::CivilityCharm
                ))),
                Narration::ItemUse(UseOutcome::NoAction(NoActionReason::Cancelled)),
            ]
        );
        assert_eq!(s.inventory().len(), 3);
    }

    // -----------------------------------------------------------------------
    // Encounters
    // -----------------------------------------------------------------------

    #[test]
    fn winning_clears_the_robot_and_skips_the_prompt() {
        let mut s = session([1]);
        s.world_mut()
            .room_mut(A)
            .unwrap()
            .place_robot(Robot::new("Drone", 1, 3));
        let mut fe = ScriptedFrontend::commands(["exit"]).actions([EncounterAction::Scan]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert!(s.world().room(A).unwrap().robot().is_none());
        assert_eq!(s.location(), A);
        assert_eq!(
            fe.narrations,
            vec![Narration::RobotPacified {
                robot: "Drone".to_string()
            }]
        );
        assert_eq!(fe.commands.len(), 1);
        assert!(matches!(
            fe.events.last(),
            Some(EncounterEvent::Cleared { .. })
        ));
    }

    #[test]
    fn fleeing_moves_through_a_random_exit_and_keeps_the_robot() {
        // Parachute is the third usable item; the die picks A's second exit.
        let mut s = session([1]);
        s.world_mut()
            .room_mut(A)
            .unwrap()
            .place_robot(Robot::new("Bulldozer", 12, 4));
        let mut fe = ScriptedFrontend::default()
            .actions([EncounterAction::UseItem])
            .picks([Some(2)]);

        assert_eq!(s.play_turn(&mut fe).unwrap(), TurnOutcome::Continue);
        assert_eq!(s.location(), D);
        assert_eq!(
            fe.narrations,
            vec![Narration::Fled {
                direction: Direction::South,
                room: "D".to_string()
            }]
        );
        let robot = s.world().room(A).unwrap().robot().cloned();
        assert_eq!(robot.map(|r| r.corruption), Some(12));
    }

    #[test]
    fn losing_all_focus_ends_the_session() {
        // Scan rolls 1, the robot drains 3, taunt 0.
        let mut s = session([1, 3, 0]);
        *s.player_mut() = PlayerState::with_focus(2);
        s.world_mut()
            .room_mut(A)
            .unwrap()
            .place_robot(Robot::new("Enforcer", 10, 3));
        let mut fe = ScriptedFrontend::default().actions([EncounterAction::Scan]);

        assert_eq!(
            s.play_turn(&mut fe).unwrap(),
            TurnOutcome::Ended(Ending::Overwhelmed)
        );
        assert_eq!(fe.narrations, vec![Narration::Overwhelmed]);
        assert_eq!(s.player().focus(), -1);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let config = GameConfig::default().with_seed(11);
        let a = GameSession::from_config(&config).unwrap();
        let b = GameSession::from_config(&config).unwrap();
        assert_eq!(a.world().villain(), b.world().villain());
        assert_eq!(a.world().vials(), b.world().vials());
        assert_eq!(
            a.world().room(a.location()).unwrap().name(),
            hx_core::layout::START_ROOM
        );
    }
}
