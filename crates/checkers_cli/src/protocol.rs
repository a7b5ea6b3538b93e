//! Input lines understood by the front end.
//!
//! Two forms are accepted on the same stream. Plain text commands:
//!
//! ```text
//! new [white|black]
//! move 5,0 4,1
//! board
//! difficulty easy|medium|hard
//! reset
//! quit
//! ```
//!
//! and JSON messages, one per line, as a networked client would send them:
//!
//! ```text
//! {"type":"move","from":[5,0],"to":[4,1]}
//! {"type":"new","color":"black"}
//! ```

use checkers_core::{Color, Difficulty, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a match; the color is the local player's (None = configured)
    New(Option<Color>),
    Move { from: Square, to: Square },
    Board,
    Difficulty(Difficulty),
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Value(String),
    #[error("bad message: {0}")]
    Json(String),
}

/// JSON wire message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireMessage {
    Move { from: [i8; 2], to: [i8; 2] },
    New {
        #[serde(default)]
        color: Option<Color>,
    },
    Board,
    Reset,
    Quit,
}

impl From<WireMessage> for Command {
    fn from(msg: WireMessage) -> Self {
        match msg {
            WireMessage::Move { from, to } => Command::Move {
                from: Square::new(from[0], from[1]),
                to: Square::new(to[0], to[1]),
            },
            WireMessage::New { color } => Command::New(color),
            WireMessage::Board => Command::Board,
            WireMessage::Reset => Command::Reset,
            WireMessage::Quit => Command::Quit,
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        let msg: WireMessage =
            serde_json::from_str(line).map_err(|e| ProtocolError::Json(e.to_string()))?;
        return Ok(Some(msg.into()));
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = match parts[0].to_ascii_lowercase().as_str() {
        "new" | "start" => match parts.get(1) {
            None => Command::New(None),
            Some(c) => Command::New(Some(c.parse().map_err(ProtocolError::Value)?)),
        },
        "move" | "m" => {
            if parts.len() != 3 {
                return Err(ProtocolError::Usage("move <row,col> <row,col>"));
            }
            Command::Move {
                from: parts[1].parse().map_err(ProtocolError::Value)?,
                to: parts[2].parse().map_err(ProtocolError::Value)?,
            }
        }
        "board" | "show" => Command::Board,
        "difficulty" => {
            let level = parts
                .get(1)
                .ok_or(ProtocolError::Usage("difficulty easy|medium|hard"))?;
            Command::Difficulty(level.parse().map_err(ProtocolError::Value)?)
        }
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ProtocolError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

pub const HELP: &str = "\
commands:
  new [white|black]          start a match as the given color
  move <row,col> <row,col>   move a piece, e.g. `move 5,0 4,1`
  board                      show the board
  difficulty easy|medium|hard
  reset                      back to the opening position
  quit";

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
