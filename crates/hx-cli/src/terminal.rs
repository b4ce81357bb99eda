//! Line-oriented terminal front end.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use hx_core::Direction;
use hx_fiction::narrator::{self, Line, Style};
use hx_fiction::parser::{MenuChoice, parse_action, parse_menu, parse_yes_no};
use hx_fiction::{Frontend, Narration, Question, StatusReport};
use hx_mechanics::{
    EncounterAction, EncounterDriver, EncounterEvent, EncounterStatus, ItemPicker, UsableItem,
};

/// Plays the game over a reader and a writer.
///
/// Write errors are ignored; a failed or exhausted read counts as end of
/// input.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    pace: Duration,
    buf: String,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    /// Wrap `input` and `output`, pausing `pace` on each beat.
    pub fn new(input: R, output: W, pace: Duration) -> Self {
        Self {
            input,
            output,
            pace,
            buf: String::new(),
        }
    }

    /// Print lines, sleeping on beats.
    pub fn show(&mut self, lines: &[Line]) {
        for line in lines {
            match line {
                Line::Beat => {
                    self.output.flush().ok();
                    self.beat();
                }
                Line::Text(_) => {
                    writeln!(self.output, "{}", render(line)).ok();
                }
            }
        }
    }

    /// Ask whether to start another session. End of input means no.
    pub fn play_again(&mut self) -> bool {
        self.ask_until(&Line::plain(narrator::PLAY_AGAIN_PROMPT), &["yes", "no"], parse_yes_no)
            .unwrap_or(false)
    }

    fn beat(&self) {
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    /// Print a prompt without a newline and read the answer.
    fn ask(&mut self, prompt: &Line) -> Option<String> {
        write!(self.output, "{}", render(prompt)).ok();
        self.output.flush().ok();

        self.buf.clear();
        match self.input.read_line(&mut self.buf) {
            Ok(0) | Err(_) => {
                writeln!(self.output).ok();
                None
            }
            Ok(_) => Some(self.buf.trim().to_string()),
        }
    }

    /// Ask until `parse` accepts the answer, listing `valid` after each miss.
    fn ask_until<T>(
        &mut self,
        prompt: &Line,
        valid: &[&str],
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Some(value),
                None => self.show(&[narrator::invalid_choice(valid)]),
            }
        }
    }
}

impl<R: BufRead, W: Write> ItemPicker for TerminalFrontend<R, W> {
    fn pick_item(&mut self, usable: &[UsableItem]) -> Option<usize> {
        self.show(&narrator::item_menu(usable));
        let len = usable.len();
        let valid: Vec<String> = (1..=len + 1).map(|n| n.to_string()).collect();
        let valid: Vec<&str> = valid.iter().map(String::as_str).collect();
        let choice = self.ask_until(&Line::plain(narrator::ITEM_PROMPT), &valid, |answer| {
            parse_menu(answer, len)
        })?;
        match choice {
            MenuChoice::Pick(index) => Some(index),
            MenuChoice::Cancel => None,
        }
    }
}

impl<R: BufRead, W: Write> EncounterDriver for TerminalFrontend<R, W> {
    fn choose_action(&mut self, _status: &EncounterStatus) -> EncounterAction {
        self.show(&narrator::encounter_menu());
        self.ask_until(
            &Line::plain(narrator::ENCOUNTER_PROMPT),
            &["1", "2", "3"],
            parse_action,
        )
        .unwrap_or(EncounterAction::Scan)
    }

    fn observe(&mut self, event: &EncounterEvent) {
        self.show(&narrator::encounter_event(event));
    }

    fn pause(&mut self) {
        self.output.flush().ok();
        self.beat();
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn show_status(&mut self, status: &StatusReport) {
        self.show(&narrator::status_block(status));
    }

    fn read_command(&mut self, exits: &[Direction]) -> Option<String> {
        self.show(&narrator::room_prompt(exits));
        self.ask(&Line::plain(narrator::COMMAND_PROMPT))
    }

    fn confirm(&mut self, question: &Question) -> bool {
        let (description, prompt) = narrator::question(question);
        self.show(&description);
        self.ask_until(&prompt, &["yes", "no"], parse_yes_no)
            .unwrap_or(false)
    }

    fn narrate(&mut self, narration: &Narration) {
        self.show(&narrator::narration(narration));
    }
}

/// Apply terminal colors to a line.
fn render(line: &Line) -> String {
    let Line::Text(spans) = line else {
        return String::new();
    };
    spans
        .iter()
        .map(|span| {
            let text = span.text.as_str();
            match span.style {
                Style::Plain => text.to_string(),
                Style::Frame => text.cyan().bold().to_string(),
                Style::Good => text.green().to_string(),
                Style::Bad => text.red().to_string(),
                Style::Notice => text.yellow().to_string(),
                Style::Alert => text.magenta().bold().to_string(),
            }
        })
        .collect()
}
