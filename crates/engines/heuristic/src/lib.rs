//! Heuristic Checkers Engine
//!
//! Scores every legal move on its own merits and plays the best one.
//! There is no look-ahead; see [`eval`] for the scoring terms.

pub mod eval;

use checkers_core::{legal_moves_into, BoardSnapshot, Engine, Move, TurnState};
use tracing::trace;

/// One-ply engine that maximises [`eval::score_move`].
///
/// Ties go to the first candidate in move-generation order, so the engine
/// is fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEngine {
    /// Candidates scored in the last call, for statistics
    nodes: u64,
    moves: Vec<Move>,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for HeuristicEngine {
    fn choose_move(&mut self, board: &BoardSnapshot, turn: &TurnState) -> Option<Move> {
        let board = board.as_board();
        legal_moves_into(board, turn, &mut self.moves);
        self.nodes = self.moves.len() as u64;

        let mut best: Option<(Move, i32)> = None;
        for &mv in &self.moves {
            let score = eval::score_move(board, mv);
            trace!(%mv, score, "scored candidate");
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }
        best.map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::score_move;
