//! Random Move Checkers Engine
//!
//! Picks uniformly among the legal moves. Used for:
//! - The `Easy` difficulty
//! - Baseline comparisons in engine-vs-engine series
//! - Stress testing the rules engine with arbitrary play

use checkers_core::{legal_moves_into, BoardSnapshot, Engine, Move, TurnState};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An engine that plays random legal moves.
///
/// The random source is owned by the engine and can be seeded, so a game
/// against it is reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    moves: Vec<Move>,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(32),
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &BoardSnapshot, turn: &TurnState) -> Option<Move> {
        legal_moves_into(board.as_board(), turn, &mut self.moves);
        self.moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

#[cfg(test)]
mod lib_tests;
