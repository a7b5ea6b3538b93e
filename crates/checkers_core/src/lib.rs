pub mod ai;
pub mod board;
pub mod chain;
pub mod collab;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use ai::*;
pub use board::*;
pub use chain::*;
pub use collab::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use notation::squares_to_string;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all move choosers (random, heuristic, ...)
// =============================================================================

/// Trait that all checkers engines must implement.
///
/// Engines see a read-only snapshot, so nothing they do while evaluating can
/// reach the live game; the chosen move still goes through
/// [`GameController::submit_move`].
pub trait Engine: Send {
    /// Picks one of the legal moves for `turn`, or `None` when there is none.
    ///
    /// # Arguments
    /// * `board` - The current position
    /// * `turn` - Side to move and, mid-chain, the piece that must continue
    fn choose_move(&mut self, board: &BoardSnapshot, turn: &TurnState) -> Option<Move>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "checkers-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
