use std::io::{self, Write};
use std::sync::mpsc::Sender;

use anyhow::Result;
use colored::Colorize;
use log::warn;

use crate::platform::{Navigator, Outcome, SessionSummary};

/// Hands the end of a session over to the menu thread
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: Sender<SessionSummary>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<SessionSummary>) -> Self {
        ChannelNavigator { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn return_to_menu(&mut self, summary: SessionSummary) {
        if self.tx.send(summary).is_err() {
            warn!("menu is gone, session summary dropped");
        }
    }
}

fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Wall => "hit the wall",
        Outcome::SelfCollision => "bit itself",
        Outcome::Victory => "filled the whole body, you win!",
    }
}

pub(crate) fn menu_text(last: Option<SessionSummary>) -> String {
    let mut text = format!("{}[2J{}[1;1H", 27 as char, 27 as char);
    text.push_str(&format!("{}\r\n\r\n", "SNAKE".green().bold()));
    if let Some(summary) = last {
        text.push_str(&format!(
            "Last game: {} with score {}\r\n\r\n",
            outcome_text(summary.outcome),
            summary.score
        ));
    }
    text.push_str("Click or press p / Enter to play\r\n");
    text.push_str("Press q to quit (q during a game returns here)\r\n");
    text
}

pub(crate) fn show(last: Option<SessionSummary>) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(menu_text(last).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
