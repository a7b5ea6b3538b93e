//! Boundaries to the outside world: what a renderer is shown and what a
//! results store is told. Neither can feed anything back into the game.

use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;
use crate::types::*;

/// Everything a UI needs to redraw after a move.
#[derive(Clone, Debug)]
pub struct GameView {
    pub board: BoardSnapshot,
    pub active: Color,
    pub chain_square: Option<Square>,
    /// Set when the side to move is obliged to capture.
    pub must_capture: bool,
    /// Pieces of the side to move that can capture.
    pub capturing_squares: Vec<Square>,
    /// Accepted moves per color, indexed by `Color::idx`.
    pub move_counts: [u32; 2],
    pub local_player: Option<Color>,
    pub result: Option<MatchResult>,
}

/// What the results store hears when a match ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub winner: Color,
    /// The color the local (human) player had, if any.
    pub local_player: Option<Color>,
}

impl GameReport {
    /// `Some(true)` if the local player won, `None` without a local player.
    pub fn local_won(&self) -> Option<bool> {
        self.local_player.map(|c| c == self.winner)
    }
}

pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Redraw hook, called after `start`, `reset` and every accepted move.
pub trait Renderer {
    fn redraw(&mut self, view: &GameView);
}

/// Results store, called exactly once when a match reaches a terminal state.
///
/// Failures are logged by the caller and otherwise ignored.
pub trait ResultSink {
    fn record(&mut self, report: &GameReport) -> Result<(), CollaboratorError>;
}
