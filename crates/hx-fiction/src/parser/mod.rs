//! Command and answer parsing.

mod command;

pub use command::{Command, MenuChoice, parse_action, parse_command, parse_menu, parse_yes_no};
