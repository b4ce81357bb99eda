//! Message templates.

use hx_core::{Direction, FoundItem, Item, QuestItem, StartingItem, Vial, Wildcard};
use hx_mechanics::{EncounterEvent, ItemEffect, NoActionReason, UsableItem, UseOutcome};

use super::line::{Line, Style};
use crate::frontend::{Narration, Question};
use crate::status::StatusReport;

/// Prompt at the start of each free action.
pub const COMMAND_PROMPT: &str = "> What do you do? ";

/// Prompt for the encounter menu.
pub const ENCOUNTER_PROMPT: &str = "> Choose (1, 2, or 3): ";

/// Prompt for the item menu.
pub const ITEM_PROMPT: &str = "> Use which item?: ";

/// Prompt after a session ends.
pub const PLAY_AGAIN_PROMPT: &str = "> Would you like to play again? (YES/NO): ";

const RULE: &str = "===============================================================";
const TURN_RULE: &str = "---------------------------------------------------------------";

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

/// The title screen and briefing.
pub fn intro() -> Vec<Line> {
    let quest: Vec<&str> = QuestItem::ALL.iter().map(|q| q.name()).collect();
    let mut lines = vec![
        Line::styled(Style::Frame, RULE),
        Line::plain("      Dr. Eaton vs. Ton Drump and the Evil Robots      "),
        Line::styled(Style::Frame, RULE),
        Line::blank(),
        Line::plain(
            "At the Hexagon, a petty workplace squabble over a parking spot has escalated. Dr. Eaton is",
        ),
        Line::plain(
            "in town for a clean energy meeting and accidentally took Mr. Ton Drump's parking place, even though",
        ),
        Line::plain(
            "there is no assigned parking. Mr. Drump threw a KING-sized temper tantrum and swore revenge.",
        ),
        Line::plain(
            "Now he has corrupted the building's helpful robots with his tantrum-fueled code! Dr. Eaton must",
        ),
        Line::plain(
            "build a network-wide healing device, and she needs YOUR help retrieving its components and",
        ),
        Line::plain("reprogramming any evil robots you meet along the way!"),
        Line::blank(),
        Line::plain("Your Mission:"),
        Line::styled(
            Style::Alert,
            format!(
                "Collect the {} missing components for Dr. Eaton's network-wide healing device:",
                quest.len()
            ),
        ),
    ];
    for chunk in quest.chunks(3) {
        lines.push(Line::styled(Style::Notice, format!("  {}", chunk.join(", "))));
    }
    lines.push(Line::blank());
    lines.push(Line::styled(Style::Alert, "Your Starting Toolkit (Single Use):"));
    for kind in StartingItem::ALL {
        lines.push(Line::styled(
            Style::Notice,
            format!("  - {}: {}.", kind.name(), kind.summary()),
        ));
    }
    lines.extend([
        Line::blank(),
        Line::plain(
            "You will also find other items during your quest. Some will help, some not so much, and each",
        ),
        Line::plain(
            "can be used only once. Mr. Ton Drump's corrupted robots lurk around every corner, so use your",
        ),
        Line::plain("items wisely!"),
        Line::blank(),
        Line::styled(
            Style::Alert,
            format!(
                "Once you hold all {} components, find Mr. Ton Drump and win the game!",
                quest.len()
            ),
        ),
        Line::blank(),
        Line::plain("'Good luck, ally,' Dr. Eaton says with a determined look."),
        Line::plain(
            "'This is a mission of restoration, not retribution. May your logic be sound, your sources",
        ),
        Line::plain(" peer-reviewed, and may you prove that civility is not, in fact, a weakness.'"),
        Line::blank(),
        Line::styled(Style::Alert, "Controls:"),
        Line::styled(Style::Good, "  - Movement: NORTH, SOUTH, EAST, WEST (or N, S, E, W)"),
        Line::styled(Style::Good, "  - Actions: SEARCH, USE"),
        Line::styled(Style::Good, "  - Responses: YES, NO"),
        Line::styled(Style::Bad, "  - Quit Game: EXIT"),
        Line::styled(Style::Frame, RULE),
    ]);
    lines
}

/// Closing line after the last session.
pub fn farewell() -> Line {
    Line::plain("Thanks for playing!")
}

/// Reprompt listing the accepted answers.
pub fn invalid_choice(valid: &[&str]) -> Line {
    Line::plain(format!(
        "Invalid command. Please enter one of the following: {}",
        valid.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Turn
// ---------------------------------------------------------------------------

/// The status block shown at the top of every turn.
pub fn status_block(status: &StatusReport) -> Vec<Line> {
    let inventory = if status.inventory.is_empty() {
        "(empty)".to_string()
    } else {
        status.inventory.join(", ")
    };
    let mut lines = vec![
        Line::blank(),
        Line::plain(TURN_RULE),
        Line::plain("> You are in the: ").then(Style::Frame, &status.room),
        Line::plain("> Your Focus: ").then(Style::Good, status.focus.to_string()),
        Line::plain("> Quest Progress: ")
            .then(
                Style::Notice,
                format!("{} of {}", status.quest_found, status.quest_total),
            )
            .then(Style::Plain, " components found."),
        Line::plain("> Inventory: ").then(Style::Notice, inventory),
    ];
    for buff in &status.buffs {
        lines.push(
            Line::plain("> ")
                .then(Style::Alert, "Status")
                .then(Style::Plain, format!(": {} is ", buff.label()))
                .then(Style::Alert, "ACTIVE"),
        );
    }
    lines.push(Line::blank());
    lines.push(
        Line::plain("> Controls: ")
            .then(Style::Good, "SEARCH, USE, EXIT,")
            .then(Style::Plain, " or a direction ")
            .then(Style::Good, "(NORTH, SOUTH, EAST, WEST)"),
    );
    lines
}

/// The exits line shown before each command prompt.
pub fn room_prompt(exits: &[Direction]) -> Vec<Line> {
    let mut line = Line::plain("> Available exits: ");
    for (i, direction) in exits.iter().enumerate() {
        if i > 0 {
            line = line.then(Style::Plain, ", ");
        }
        line = line.then(Style::Good, direction.name());
    }
    vec![Line::blank(), line]
}

/// Description lines and the prompt for a yes/no question.
pub fn question(question: &Question) -> (Vec<Line>, Line) {
    match question {
        Question::TakeItem(item) => {
            let lines = item_description(*item)
                .map(|d| vec![Line::plain(format!("  {d}"))])
                .unwrap_or_default();
            let prompt = Line::plain("> You see a ")
                .then(Style::Notice, item.name())
                .then(Style::Plain, ". Would you like to get it? (")
                .then(Style::Good, "YES")
                .then(Style::Plain, "/")
                .then(Style::Bad, "NO")
                .then(Style::Plain, "): ");
            (lines, prompt)
        }
        Question::UseStairs(_) => (
            Vec::new(),
            Line::plain("> You see a grand, winding staircase. Use it? (YES/NO): "),
        ),
        Question::EnterPortal => (
            Vec::new(),
            Line::plain("> A shimmering portal hums in the corner. Enter it? (YES/NO): "),
        ),
    }
}

/// Flavor text shown when an item is found, if it has any.
pub fn item_description(item: FoundItem) -> Option<&'static str> {
    match item {
        FoundItem::Wildcard(Wildcard::BlankKeycard) => Some(
            "You find a beautifully framed, but completely blank, healthcare plan. Its sheer, unadulterated uselessness is almost an art form.",
        ),
        FoundItem::Wildcard(Wildcard::OldSharpie) => Some(
            "You find a thick, black marker. It seems to hum with a strange, world-altering power.",
        ),
        FoundItem::Wildcard(Wildcard::SubpoenaedDiaryLogs) => Some(
            "You find a dusty old diary. The pages are filled with what looks like binary code and complaints about toner cartridges.",
        ),
        FoundItem::Wildcard(Wildcard::TrickleDownTextbook) => {
            Some("This looks important, but it seems to be filled with flawed logic.")
        }
        FoundItem::Vial(Vial::Red) => Some(
            "A vial containing a swirling, crimson liquid. It smells faintly of cherries and determination.",
        ),
        FoundItem::Vial(Vial::Blue) => {
            Some("A vial of calm, blue liquid. It bubbles gently, like a peaceful spring.")
        }
        FoundItem::Vial(Vial::Purple) => Some(
            "A vial of a deep, mysterious purple fluid. You're not entirely sure if it's supposed to be glowing like that.",
        ),
        _ => None,
    }
}

/// Text for a game loop event.
pub fn narration(narration: &Narration) -> Vec<Line> {
    match narration {
        Narration::VillainConfronted { victory } => villain(*victory),
        Narration::RobotPacified { robot } => vec![
            Line::blank(),
            Line::styled(
                Style::Good,
                format!("The {robot} has been pacified. The room is now safe."),
            ),
        ],
        Narration::Fled { direction, room } => vec![
            Line::blank(),
            Line::plain(format!("You hastily flee {direction} into the {room}...")),
        ],
        Narration::Overwhelmed => vec![
            Line::blank(),
            Line::styled(
                Style::Bad,
                "Your focus shatters under the barrage of alternative facts.",
            ),
            Line::styled(Style::Bad, "GAME OVER."),
        ],
        Narration::Searching => vec![Line::blank(), Line::plain("> You search the room...")],
        Narration::PickedUp(item) => {
            let mut lines = vec![Line::styled(
                Style::Good,
                format!("> You picked up the {item}."),
            )];
            if item.is_quest() {
                lines.push(Line::styled(
                    Style::Alert,
                    "> This looks like a crucial component for Dr. Eaton's device!",
                ));
            } else if *item != FoundItem::Wildcard(Wildcard::BlankKeycard) {
                lines.push(Line::styled(
                    Style::Notice,
                    "> This item looks like it could be used once during your quest.",
                ));
            }
            lines
        }
        Narration::NothingFound => vec![Line::plain("> You find nothing else of interest.")],
        Narration::TookStairs { exit, room } => vec![
            Line::blank(),
            Line::plain(format!("> You take the {exit} to the {room}.")),
        ],
        Narration::EnteredPortal { room } => vec![
            Line::blank(),
            Line::plain("> You step into the portal..."),
            Line::Beat,
            Line::plain("> A whirlwind of colors and strange noises envelops you."),
            Line::Beat,
            Line::plain("> Things get weird."),
            Line::Beat,
            Line::plain(format!("> You stumble out into the {room}...")),
        ],
        Narration::ItemUse(outcome) => use_outcome(outcome),
        Narration::NoExit(direction) => {
            vec![Line::plain(format!("> You can't go {direction} from here."))]
        }
        Narration::InvalidCommand(_) => vec![Line::blank(), Line::plain("Invalid command.")],
    }
}

fn villain(victory: bool) -> Vec<Line> {
    let mut lines = vec![
        Line::blank(),
        Line::plain(
            "You've entered a pristine, minimalist office. A single, perfectly polished nameplate reads 'Mr. Ton Drump'.",
        ),
        Line::Beat,
        Line::plain("He looks up from a teetering stack of TPS reports, his ")
            .then(Style::Bad, "eyes")
            .then(Style::Plain, " narrowing."),
        Line::Beat,
        Line::plain("'My parking spot,' he whispers with icy rage. 'You... you know what she did.'"),
        Line::Beat,
    ];
    if victory {
        lines.extend([
            Line::blank(),
            Line::styled(
                Style::Good,
                "You hold up the final component and say, 'Looks like your alternative facts just ran into a peer-reviewed reality.'",
            ),
            Line::Beat,
            Line::blank(),
            Line::plain(
                "As he sputters in confusion, a wave of calming, green energy pulses through the walls.",
            ),
            Line::plain(
                "On a monitor behind him, you see security footage of the corrupted robots slowing down,",
            ),
            Line::plain("whirring gently, and returning to their peaceful programming."),
            Line::Beat,
            Line::blank(),
            Line::styled(Style::Frame, RULE),
            Line::styled(Style::Good, "                 Y O U   W I N ! ! !                 "),
            Line::styled(Style::Frame, RULE),
            Line::plain("You didn't win by ")
                .then(Style::Bad, "fighting")
                .then(Style::Plain, ", you won by ")
                .then(Style::Frame, "healing")
                .then(Style::Plain, ". Congratulations!"),
            Line::styled(Style::Frame, RULE),
        ]);
    } else {
        lines.extend([
            Line::blank(),
            Line::plain("He presses a button on his desk, and the door slams shut behind you."),
            Line::styled(Style::Bad, "GAME OVER."),
        ]);
    }
    lines
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// The numbered item menu, ending with a cancel entry.
pub fn item_menu(usable: &[UsableItem]) -> Vec<Line> {
    let mut lines = vec![Line::blank(), Line::plain("> Your Inventory:")];
    for (i, entry) in usable.iter().enumerate() {
        lines.push(Line::plain(format!(
            "  {}. {}: Effects - {}",
            i + 1,
            entry.name,
            entry.summary.unwrap_or("Unknown")
        )));
    }
    lines.push(Line::plain(format!("  {}. Cancel", usable.len() + 1)));
    lines
}

/// Text for the result of using an item.
pub fn use_outcome(outcome: &UseOutcome) -> Vec<Line> {
    match outcome {
        UseOutcome::NoAction(NoActionReason::NoUsableItems) => {
            vec![Line::plain("  You have no usable items right now.")]
        }
        UseOutcome::NoAction(NoActionReason::Cancelled) => Vec::new(),
        UseOutcome::NoAction(NoActionReason::CombatOnly(kind)) => vec![Line::plain(format!(
            "> The {} can only be used during a Reprogramming Sequence.",
            kind.name()
        ))],
        UseOutcome::Flee => vec![Line::styled(
            Style::Good,
            "> You use your Golden Parachute! You can now escape.",
        )],
        UseOutcome::Used { item, effect } => used_item(item, effect),
    }
}

fn used_item(item: &Item, effect: &ItemEffect) -> Vec<Line> {
    let line = match item {
        Item::Starting {
            kind: StartingItem::CivilityCharm,
            ..
        } => Line::styled(
            Style::Good,
            "> You use the Civility Charm and restore 3 Focus.",
        ),
        Item::Starting {
            kind: StartingItem::ExecutiveOrder,
            ..
        } => Line::styled(
            Style::Good,
            "> You enact an Executive Order. Your next scan will be supercharged.",
        ),
        Item::Starting {
            kind: StartingItem::GoldenParachute,
            ..
        } => Line::styled(
            Style::Good,
            "> You use your Golden Parachute! You can now escape.",
        ),
        Item::Found(FoundItem::Wildcard(wildcard)) => return wildcard_used(*wildcard),
        Item::Found(FoundItem::Vial(vial)) => match effect {
            ItemEffect::FocusChanged { delta, .. } if *delta > 0 => Line::styled(
                Style::Good,
                format!("> You drink the {}. You gain {delta} Focus.", vial.name()),
            ),
            ItemEffect::FocusChanged { delta, .. } => Line::styled(
                Style::Bad,
                format!("> You drink the {}. You lose {} Focus.", vial.name(), -delta),
            ),
            _ => Line::plain(format!("> You drink the {}.", vial.name())),
        },
        Item::Found(found) => Line::plain(format!("> You use the {found}.")),
    };
    vec![line]
}

fn wildcard_used(wildcard: Wildcard) -> Vec<Line> {
    match wildcard {
        Wildcard::TrickleDownTextbook => vec![Line::styled(
            Style::Bad,
            "> You try to apply its flawed principles. It backfires, instantly draining 3 Focus.",
        )],
        Wildcard::SubpoenaedDiaryLogs => vec![Line::styled(
            Style::Good,
            "> You activate the Subpoenaed Diary Logs! Your next reprogramming roll will have a +2 bonus.",
        )],
        Wildcard::LogicFilter => vec![Line::styled(
            Style::Good,
            "> You activate the Logic Filter! It will block the next illogical statement.",
        )],
        Wildcard::SnackCake => vec![Line::styled(
            Style::Bad,
            "> You eat the snack cake... a bold choice. You lose 4 Focus.",
        )],
        Wildcard::OldSharpie => vec![Line::styled(
            Style::Bad,
            "> You feel a powerful urge to redraw the map to make your path shorter. The effort drains 3 Focus.",
        )],
        Wildcard::BlankKeycard => vec![
            Line::blank(),
            Line::plain("> You hold up the Blank Keycard. It feels strangely important..."),
            Line::Beat,
            Line::plain("> ... and absolutely nothing happens."),
        ],
    }
}

// ---------------------------------------------------------------------------
// Encounters
// ---------------------------------------------------------------------------

/// The action menu shown at the start of each encounter turn.
pub fn encounter_menu() -> Vec<Line> {
    vec![
        Line::blank(),
        Line::plain("--- Your Turn ---"),
        Line::styled(Style::Alert, "Choose your action:"),
        Line::plain("  1. Run Diagnostic Scan (your standard action to clear the robot's corrupted code)"),
        Line::plain("  2. Use an Item (opens your usable inventory)"),
        Line::plain(
            "  3. Forfeit Turn (skips your turn, but restores 2 Focus points)",
        ),
    ]
}

/// One of the robot's taunts when it drains focus.
pub fn taunt(index: usize, drain: i32) -> String {
    match index % 3 {
        0 => format!("> The robot's corrupted code pushes back! You lose {drain} Focus."),
        1 => format!(
            "> The robot insists its Corruption Level is actually zero, the best corruption level, and that everyone agrees. The blatant lie is disorienting. You lose {drain} Focus."
        ),
        _ => format!(
            "> The robot runs a subroutine to calculate the number of dust particles in the room, then declares it to be the largest crowd of dust particles in history, period. The sheer illogicality of the statement drains {drain} Focus."
        ),
    }
}

/// Text for an encounter event.
pub fn encounter_event(event: &EncounterEvent) -> Vec<Line> {
    match event {
        EncounterEvent::Started {
            robot,
            corruption,
            focus,
        } => vec![
            Line::blank(),
            Line::styled(
                Style::Alert,
                format!("! A {robot} running corrupted code blocks your path!"),
            ),
            Line::styled(
                Style::Alert,
                "! You must run a defragmenting sequence to pacify it.",
            ),
            Line::plain("! Your Focus: ")
                .then(Style::Good, focus.to_string())
                .then(Style::Plain, " | Robot's Corruption: ")
                .then(Style::Bad, corruption.to_string()),
        ],
        EncounterEvent::Scanned {
            doubled,
            bonus,
            progress,
            ..
        } => {
            let mut lines = Vec::new();
            if *doubled {
                lines.push(Line::styled(
                    Style::Good,
                    "> Your Executive Order doubles your progress!",
                ));
            }
            if *bonus {
                lines.push(Line::styled(
                    Style::Good,
                    "> The Subpoenaed Diary Logs enhance the scan! +2 progress!",
                ));
            }
            lines.push(Line::plain(format!(
                "> You make {progress} points of reprogramming progress."
            )));
            lines
        }
        EncounterEvent::ItemUsed(outcome) => use_outcome(outcome),
        EncounterEvent::Forfeited { restored, .. } => vec![Line::styled(
            Style::Good,
            format!("> You recalibrate, restoring {restored} Focus points."),
        )],
        EncounterEvent::Cleared { robot } => vec![
            Line::blank(),
            Line::styled(
                Style::Good,
                format!("> Success! The {robot}'s corruption is cleared."),
            ),
        ],
        EncounterEvent::Blocked => vec![
            Line::blank(),
            Line::plain("--- Robot's Turn ---"),
            Line::styled(
                Style::Good,
                "> The robot spews a stream of alternative facts, but your Logic Filter flags",
            ),
            Line::styled(
                Style::Good,
                "them all as 'Pants on Fire' and blocks the disorienting effect!",
            ),
        ],
        EncounterEvent::Attacked { drain, taunt: t, .. } => vec![
            Line::blank(),
            Line::plain("--- Robot's Turn ---"),
            Line::styled(Style::Bad, taunt(*t, *drain)),
        ],
        EncounterEvent::TurnEnded { focus, corruption } => vec![
            Line::blank(),
            Line::plain("-- End of Turn --"),
            Line::plain(format!(
                "> Your Focus: {focus} | Robot's Corruption: {corruption}"
            )),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::plain_text;

    #[test]
    fn intro_lists_every_component() {
        let text = plain_text(&intro());
        for q in QuestItem::ALL {
            assert!(text.contains(q.name()), "missing {}", q.name());
        }
        assert!(text.contains("Golden Parachute"));
    }

    #[test]
    fn pickup_feedback_by_kind() {
        let quest = plain_text(&narration(&Narration::PickedUp(FoundItem::Quest(
            QuestItem::CivicsPatch,
        ))));
        assert!(quest.contains("crucial component"));

        let vial = plain_text(&narration(&Narration::PickedUp(FoundItem::Vial(Vial::Red))));
        assert!(vial.contains("used once"));

        let keycard = narration(&Narration::PickedUp(FoundItem::Wildcard(
            Wildcard::BlankKeycard,
        )));
        assert_eq!(keycard.len(), 1);
    }

    #[test]
    fn taunts_name_the_drain() {
        for i in 0..3 {
            assert!(taunt(i, 4).contains("4 Focus"));
        }
        assert_ne!(taunt(0, 1), taunt(1, 1));
        assert_ne!(taunt(1, 1), taunt(2, 1));
    }

    #[test]
    fn vial_text_follows_the_sign() {
        let gain = UseOutcome::Used {
            item: Item::Found(FoundItem::Vial(Vial::Blue)),
            effect: ItemEffect::FocusChanged { delta: 5, focus: 20 },
        };
        assert_eq!(
            plain_text(&use_outcome(&gain)),
            "> You drink the Blue Focus Vial. You gain 5 Focus."
        );
        let loss = UseOutcome::Used {
            item: Item::Found(FoundItem::Vial(Vial::Red)),
            effect: ItemEffect::FocusChanged { delta: -4, focus: 1 },
        };
        assert_eq!(
            plain_text(&use_outcome(&loss)),
            "> You drink the Red Focus Vial. You lose 4 Focus."
        );
    }

    #[test]
    fn item_menu_numbers_and_cancel() {
        let menu = item_menu(&[
            UsableItem {
                slot: 0,
                name: "Civility Charm",
                summary: Some("Restores 3 Focus"),
            },
            UsableItem {
                slot: 4,
                name: "Logic Filter",
                summary: None,
            },
        ]);
        insta::assert_snapshot!(plain_text(&menu[1..]), @r"
        > Your Inventory:
          1. Civility Charm: Effects - Restores 3 Focus
          2. Logic Filter: Effects - Unknown
          3. Cancel
        ");
    }

    #[test]
    fn villain_endings_differ() {
        let win = plain_text(&narration(&Narration::VillainConfronted { victory: true }));
        let lose = plain_text(&narration(&Narration::VillainConfronted { victory: false }));
        assert!(win.contains("Y O U   W I N"));
        assert!(lose.contains("GAME OVER."));
        assert!(!lose.contains("Y O U   W I N"));
    }

    #[test]
    fn room_prompt_lists_exits() {
        let lines = room_prompt(&[Direction::North, Direction::East]);
        assert_eq!(lines[1].text(), "> Available exits: NORTH, EAST");
    }

    #[test]
    fn questions_have_prompts() {
        let (desc, prompt) = question(&Question::TakeItem(FoundItem::Vial(Vial::Purple)));
        assert_eq!(desc.len(), 1);
        assert!(prompt.text().contains("Purple Focus Vial"));
        let (desc, prompt) = question(&Question::EnterPortal);
        assert!(desc.is_empty());
        assert!(prompt.text().contains("portal"));
    }
}
