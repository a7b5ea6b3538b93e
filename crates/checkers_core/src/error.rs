//! Error and rejection types.

use thiserror::Error;

use crate::types::Square;

/// Failures of raw board access. Board operations check geometry only and
/// know nothing about checkers rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is off the board")]
    OutOfBounds(Square),
    #[error("square {0} is a light square")]
    NotPlayable(Square),
    #[error("no piece on {0}")]
    Vacant(Square),
    #[error("invalid board diagram: {0}")]
    Parse(String),
}

/// Why a submitted move was refused.
///
/// Rejections are ordinary values returned from
/// [`GameController::submit_move`](crate::GameController::submit_move); the
/// board and turn state are untouched whenever one is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("square is off the board")]
    OutOfBounds,
    #[error("no piece on the origin square")]
    NotAPiece,
    #[error("it is not that color's turn")]
    WrongTurn,
    #[error("a capture is available and must be taken")]
    MustCapture,
    #[error("destination is not a legal move for this piece")]
    IllegalDestination,
    #[error("another piece is in the middle of a capture chain")]
    WrongChainPiece,
    #[error("the match is already over")]
    GameOver,
}
