//! Static move scoring.

use checkers_core::{apply_to_board, is_threatened, Board, Move};

/// Bonus for a jump.
pub const CAPTURE_BONUS: i32 = 10;
/// Bonus for moving toward the promotion row.
pub const PROGRESS_BONUS: i32 = 5;
/// Bonus for landing in the central 4x4 block.
pub const CENTER_BONUS: i32 = 3;
/// Bonus for taking a threatened piece out of danger.
pub const RESCUE_BONUS: i32 = 4;

/// Scores `mv` for the piece that makes it. Higher is better.
///
/// `board` is only read; the rescue term is judged on a scratch copy.
pub fn score_move(board: &Board, mv: Move) -> i32 {
    let mut score = 0;
    if mv.is_capture() {
        score += CAPTURE_BONUS;
    }
    if advances(board, mv) {
        score += PROGRESS_BONUS;
    }
    if in_center(mv.to.row, mv.to.col) {
        score += CENTER_BONUS;
    }
    if rescues(board, mv) {
        score += RESCUE_BONUS;
    }
    score
}

fn advances(board: &Board, mv: Move) -> bool {
    match board.piece_at(mv.from) {
        Ok(Some(pc)) => (mv.to.row - mv.from.row) * pc.color.forward() > 0,
        _ => false,
    }
}

fn in_center(row: i8, col: i8) -> bool {
    (2..=5).contains(&row) && (2..=5).contains(&col)
}

/// The moving piece can be jumped where it stands but not where it lands.
fn rescues(board: &Board, mv: Move) -> bool {
    if !is_threatened(board, mv.from) {
        return false;
    }
    let mut scratch = board.clone();
    match apply_to_board(&mut scratch, mv) {
        Ok(()) => !is_threatened(&scratch, mv.to),
        Err(_) => false,
    }
}
