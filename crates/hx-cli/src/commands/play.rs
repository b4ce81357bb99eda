use std::io;
use std::time::Duration;

use log::info;

use hx_fiction::GameSession;
use hx_fiction::narrator::{self, Line};

use crate::terminal::TerminalFrontend;

pub fn run(
    seed: Option<u64>,
    pace_ms: Option<u64>,
    no_color: bool,
    skip_intro: bool,
) -> Result<(), String> {
    if no_color {
        colored::control::set_override(false);
    }
    let mut config = super::config(seed);
    if let Some(ms) = pace_ms {
        config = config.with_pace(Duration::from_millis(ms));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut term = TerminalFrontend::new(stdin.lock(), stdout.lock(), config.pace);

    if !skip_intro {
        term.show(&narrator::intro());
    }

    let mut round = 0;
    loop {
        let mut session = GameSession::from_config(&config.for_round(round))
            .map_err(|e| format!("failed to start session: {e}"))?;
        let ending = session.run(&mut term).map_err(|e| e.to_string())?;
        info!("round {round} ended: {ending}");

        if !term.play_again() {
            break;
        }
        round += 1;
    }

    term.show(&[Line::blank(), narrator::farewell()]);
    Ok(())
}
