use std::fmt;

use crate::error::BoardError;
use crate::types::*;

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The 8x8 grid. Pure storage: every operation checks square bounds, none
/// checks checkers rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard opening layout: black men on the dark squares of rows 0..3,
    /// white men on rows 5..8.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for sq in Square::playable() {
            let piece = match sq.row {
                0..=2 => Some(Piece::man(Color::Black)),
                5..=7 => Some(Piece::man(Color::White)),
                _ => None,
            };
            b.squares[sq.row as usize][sq.col as usize] = piece;
        }
        b
    }

    /// Parses an 8-line diagram, top row first. `.` is an empty square,
    /// `w`/`b` are men, `W`/`B` kings. Whitespace inside a line is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::Parse(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(BoardError::Parse(format!(
                    "row {} has {} cells",
                    row,
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(ch)
                    .ok_or_else(|| BoardError::Parse(format!("unknown piece `{ch}`")))?;
                board.place(Square::new(row as i8, col as i8), piece)?;
            }
        }
        Ok(board)
    }

    fn check(sq: Square) -> Result<(), BoardError> {
        if sq.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(sq))
        }
    }

    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        Self::check(sq)?;
        Ok(self.squares[sq.row as usize][sq.col as usize])
    }

    pub fn is_playable(&self, sq: Square) -> Result<bool, BoardError> {
        Self::check(sq)?;
        Ok(sq.is_playable())
    }

    /// Puts `piece` on `sq`, replacing whatever was there.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), BoardError> {
        Self::check(sq)?;
        if !sq.is_playable() {
            return Err(BoardError::NotPlayable(sq));
        }
        self.squares[sq.row as usize][sq.col as usize] = Some(piece);
        Ok(())
    }

    /// Clears `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Result<Option<Piece>, BoardError> {
        Self::check(sq)?;
        Ok(self.squares[sq.row as usize][sq.col as usize].take())
    }

    /// Relocates the piece on `from` to `to`. Captured pieces are the
    /// caller's business.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        Self::check(from)?;
        Self::check(to)?;
        if !to.is_playable() {
            return Err(BoardError::NotPlayable(to));
        }
        let piece = self.remove(from)?.ok_or(BoardError::Vacant(from))?;
        self.squares[to.row as usize][to.col as usize] = Some(piece);
        Ok(())
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Squares and pieces of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::playable().filter_map(move |sq| {
            self.squares[sq.row as usize][sq.col as usize]
                .filter(|pc| pc.color == color)
                .map(|pc| (sq, pc))
        })
    }

    /// Read-only copy for renderers and engines.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.clone(),
        }
    }

    /// In-bounds lookup used by move generation, where squares come from
    /// already-checked offsets.
    pub(crate) fn get(&self, sq: Square) -> Option<Piece> {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Immutable copy of a [`Board`]. Nothing a consumer does with it can reach
/// the live game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    board: Board,
}

impl BoardSnapshot {
    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.board.piece_at(sq)
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.board.count_pieces(color)
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.pieces(color)
    }

    /// A mutable scratch copy, e.g. for evaluating a candidate move.
    pub fn to_board(&self) -> Board {
        self.board.clone()
    }

    pub fn as_board(&self) -> &Board {
        &self.board
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
