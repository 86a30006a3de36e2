use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use mazerun_core::{MoveError, Session};

use crate::render::render;

const PROMPT: &str = "Enter your move: ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Move(char),
    Map,
}

impl Command {
    /// A command line holds exactly one character. `M` shows the map, anything else is
    /// handed to the session as a direction key.
    fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim_end_matches(['\r', '\n']).chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Some(match symbol.to_ascii_uppercase() {
            'M' => Self::Map,
            _ => Self::Move(symbol),
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlayEnd {
    Won,
    InputClosed,
}

/// Runs the command loop until the player reaches the end or `input` runs dry.
pub(crate) fn play(
    mut session: Session,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<PlayEnd> {
    let mut line = String::new();

    while !session.is_won() {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("read move")? == 0 {
            log::info!(
                "Input closed at {:?} before reaching the end",
                session.player()
            );
            return Ok(PlayEnd::InputClosed);
        }

        match Command::parse(&line) {
            None => writeln!(output, "Invalid input")?,
            Some(Command::Map) => render(&mut output, session.grid(), session.player())?,
            Some(Command::Move(key)) => match session.step(key) {
                Ok(_) => {}
                Err(MoveError::InvalidDirection(_)) => writeln!(output, "Invalid input")?,
                Err(err) => writeln!(output, "{err}")?,
            },
        }
    }

    writeln!(output, "Congrats, you have made to the end of the maze")?;
    Ok(PlayEnd::Won)
}
