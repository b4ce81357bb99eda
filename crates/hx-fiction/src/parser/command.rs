//! Parsing for player input.
//!
//! All input is trimmed and case-insensitive.

use hx_core::Direction;
use hx_mechanics::EncounterAction;

/// A free action typed at the room prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave through an exit.
    Move(Direction),
    /// Search the room.
    Search,
    /// Open the item menu.
    Use,
    /// End the session.
    Exit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Tokens accepted at the room prompt, besides directions.
    pub const KEYWORDS: [&'static str; 3] = ["SEARCH", "USE", "EXIT"];
}

/// Parse a line from the room prompt.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "search" => Command::Search,
        "use" => Command::Use,
        "exit" => Command::Exit,
        other => match Direction::parse(other) {
            Some(direction) => Command::Move(direction),
            None => Command::Unknown(input.to_string()),
        },
    }
}

/// Parse a yes/no answer. `None` means the answer was not understood.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse the numbered encounter menu (1 scan, 2 use item, 3 forfeit).
pub fn parse_action(input: &str) -> Option<EncounterAction> {
    match input.trim() {
        "1" => Some(EncounterAction::Scan),
        "2" => Some(EncounterAction::UseItem),
        "3" => Some(EncounterAction::Forfeit),
        _ => None,
    }
}

/// A choice from a numbered item menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index of the chosen entry.
    Pick(usize),
    /// The trailing "Cancel" entry.
    Cancel,
}

/// Parse a choice from a menu of `len` entries numbered from 1, followed by
/// a cancel entry numbered `len + 1`.
pub fn parse_menu(input: &str, len: usize) -> Option<MenuChoice> {
    let n: usize = input.trim().parse().ok()?;
    if n == len + 1 {
        Some(MenuChoice::Cancel)
    } else if (1..=len).contains(&n) {
        Some(MenuChoice::Pick(n - 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("search"), Command::Search);
        assert_eq!(parse_command("  USE "), Command::Use);
        assert_eq!(parse_command("Exit"), Command::Exit);
    }

    #[test]
    fn parse_directions() {
        assert_eq!(parse_command("NORTH"), Command::Move(Direction::North));
        assert_eq!(parse_command("w"), Command::Move(Direction::West));
    }

    #[test]
    fn parse_unknown_keeps_input() {
        assert_eq!(
            parse_command(" dance wildly "),
            Command::Unknown("dance wildly".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }

    #[test]
    fn yes_no() {
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn encounter_actions() {
        assert_eq!(parse_action("1"), Some(EncounterAction::Scan));
        assert_eq!(parse_action(" 3 "), Some(EncounterAction::Forfeit));
        assert_eq!(parse_action("scan"), None);
    }

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu("1", 3), Some(MenuChoice::Pick(0)));
        assert_eq!(parse_menu("3", 3), Some(MenuChoice::Pick(2)));
        assert_eq!(parse_menu("4", 3), Some(MenuChoice::Cancel));
        assert_eq!(parse_menu("0", 3), None);
        assert_eq!(parse_menu("5", 3), None);
        assert_eq!(parse_menu("x", 3), None);
    }
}
