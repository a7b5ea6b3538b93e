//! Per-turn capture chain state machine.

use tracing::debug;

use crate::{board::Board, movegen::capture_targets, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChainState {
    /// No capture in progress; any piece of the side to move may go.
    #[default]
    Idle,
    /// The piece on this square just captured and must capture again.
    Chained(Square),
}

/// Tracks whether the current turn is pinned to one capturing piece.
#[derive(Clone, Debug, Default)]
pub struct CaptureChain {
    state: ChainState,
}

impl CaptureChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChainState {
        self.state
    }

    pub fn square(&self) -> Option<Square> {
        match self.state {
            ChainState::Idle => None,
            ChainState::Chained(sq) => Some(sq),
        }
    }

    /// Whether a move starting on `from` is allowed to proceed.
    pub fn permits(&self, from: Square) -> bool {
        match self.state {
            ChainState::Idle => true,
            ChainState::Chained(sq) => sq == from,
        }
    }

    /// Updates the state after `mv` has been applied to `board` (capture
    /// removed, promotion done). Returns true when the turn continues.
    pub fn advance(&mut self, board: &Board, mv: Move) -> bool {
        self.state = if mv.is_capture() && !capture_targets(board, mv.to).is_empty() {
            debug!(square = %mv.to, "capture chain continues");
            ChainState::Chained(mv.to)
        } else {
            ChainState::Idle
        };
        self.state != ChainState::Idle
    }

    pub fn reset(&mut self) {
        self.state = ChainState::Idle;
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod chain_tests;
