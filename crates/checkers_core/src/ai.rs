//! Engine-controlled side: asks an [`Engine`] for moves and feeds them
//! through the same `submit_move` a human uses.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::game::{GameController, MoveOutcome};
use crate::types::*;
use crate::Engine;

/// How an engine picks among the legal candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    Heuristic,
}

/// User-facing difficulty. There is no look-ahead behind any level, so
/// `Medium` and `Hard` both score moves heuristically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium | Difficulty::Hard => Strategy::Heuristic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Plays one color of a [`GameController`] with a boxed engine.
pub struct AiPlayer {
    color: Color,
    engine: Box<dyn Engine>,
}

impl AiPlayer {
    pub fn new(color: Color, engine: Box<dyn Engine>) -> Self {
        Self { color, engine }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Plays this side's whole turn, following a capture chain to its end.
    /// Returns the moves made, empty if it was not this side's turn, the
    /// match is over, or the side has nothing to play.
    pub fn play_turn(&mut self, game: &mut GameController) -> Vec<Move> {
        if game.active() != self.color {
            return Vec::new();
        }
        play_turn(self.engine.as_mut(), game)
    }
}

/// Lets `engine` play the whole turn of whichever side is to move.
///
/// Each move goes through `submit_move`, and the engine is asked again for
/// as long as the controller reports that the turn continues.
pub fn play_turn(engine: &mut dyn Engine, game: &mut GameController) -> Vec<Move> {
    let mut played = Vec::new();
    let color = game.active();
    while game.is_over().is_none() && game.active() == color {
        let snapshot = game.snapshot();
        let turn = game.turn_state();
        let mv = match engine.choose_move(&snapshot, &turn) {
            Some(mv) => mv,
            None => {
                debug!(%color, "engine has no move");
                break;
            }
        };
        match game.submit_move(mv.from, mv.to) {
            MoveOutcome::Accepted { mv, continue_turn } => {
                played.push(mv);
                if !continue_turn {
                    break;
                }
            }
            MoveOutcome::Rejected(reason) => {
                warn!(engine = engine.name(), %mv, %reason, "engine move rejected");
                break;
            }
        }
    }
    played
}

#[cfg(test)]
#[path = "ai_tests.rs"]
mod ai_tests;
