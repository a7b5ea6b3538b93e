//! Move validation: which squares a piece may reach, and whether capturing
//! is compulsory. Everything here is a pure function of the board.
//!
//! Results keep a fixed order (piece directions in `Piece::directions` order,
//! pieces in row-major order) so callers that pick "the first" option are
//! deterministic.

use crate::{board::Board, types::*};

/// Destinations reachable from `from` with a single jump over an enemy piece.
///
/// Kings jump the same two squares as men, only in all four directions.
/// Empty or off-board origins have no targets.
pub fn capture_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let pc = match board.get(from) {
        Some(p) => p,
        None => return out,
    };
    for &(dr, dc) in pc.directions() {
        let (over, to) = match (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) {
            (Some(over), Some(to)) => (over, to),
            _ => continue,
        };
        if !to.is_playable() || board.get(to).is_some() {
            continue;
        }
        match board.get(over) {
            Some(victim) if victim.color != pc.color => out.push(to),
            _ => {}
        }
    }
    out
}

/// Destinations reachable from `from` with a single diagonal step onto an
/// empty square.
pub fn step_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let pc = match board.get(from) {
        Some(p) => p,
        None => return out,
    };
    for &(dr, dc) in pc.directions() {
        if let Some(to) = from.offset(dr, dc) {
            if to.is_playable() && board.get(to).is_none() {
                out.push(to);
            }
        }
    }
    out
}

/// True when some piece of `color` has a jump available.
pub fn any_capture_available(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(sq, _)| !capture_targets(board, sq).is_empty())
}

/// Pieces of `color` that can capture right now, for highlighting.
pub fn capturing_squares(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces(color)
        .filter(|&(sq, _)| !capture_targets(board, sq).is_empty())
        .map(|(sq, _)| sq)
        .collect()
}

/// Legal moves for the piece on `from` under `turn`.
///
/// Only the active color's pieces move, only the chained piece moves while a
/// chain is pending, and jumps shut out steps whenever any piece of the
/// active color can jump.
pub fn legal_moves_for(board: &Board, from: Square, turn: &TurnState) -> Vec<Move> {
    match turn.chain_square {
        Some(chained) if chained != from => return Vec::new(),
        _ => {}
    }
    match board.get(from) {
        Some(pc) if pc.color == turn.active => {}
        _ => return Vec::new(),
    }

    if turn.chain_square.is_some() || any_capture_available(board, turn.active) {
        capture_targets(board, from)
            .into_iter()
            .map(|to| Move::jump(from, to))
            .collect()
    } else {
        step_targets(board, from)
            .into_iter()
            .map(|to| Move::step(from, to))
            .collect()
    }
}

/// All legal moves for the side to move, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, turn: &TurnState) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, turn, &mut out);
    out
}

/// All legal moves for the side to move into the provided buffer, reusing it
/// across calls.
pub fn legal_moves_into(board: &Board, turn: &TurnState, out: &mut Vec<Move>) {
    out.clear();
    if let Some(chained) = turn.chain_square {
        out.extend(legal_moves_for(board, chained, turn));
        return;
    }

    let must_capture = any_capture_available(board, turn.active);
    for (sq, _) in board.pieces(turn.active) {
        if must_capture {
            out.extend(
                capture_targets(board, sq)
                    .into_iter()
                    .map(|to| Move::jump(sq, to)),
            );
        } else {
            out.extend(step_targets(board, sq).into_iter().map(|to| Move::step(sq, to)));
        }
    }
}

/// True when the piece on `sq` could be jumped by the opponent on their
/// next move.
pub fn is_threatened(board: &Board, sq: Square) -> bool {
    let pc = match board.get(sq) {
        Some(p) => p,
        None => return false,
    };
    board.pieces(pc.color.other()).any(|(attacker, _)| {
        capture_targets(board, attacker)
            .into_iter()
            .any(|to| attacker.midpoint(to) == Some(sq))
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
