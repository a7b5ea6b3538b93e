//! Plain-text board rendering.

use std::io::Write;

use checkers_core::{squares_to_string, Color, GameView, Renderer, Square, BOARD_SIZE};

/// Draws the board with row and column numbers, followed by a status block.
///
/// ```text
///    0 1 2 3 4 5 6 7
/// 0    b   b   b   b
/// 1  b   b   b   b
/// ...
/// ```
pub fn render_view(view: &GameView) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col} "));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row}  "));
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            let cell = match view.board.piece_at(sq) {
                Ok(Some(piece)) => piece.symbol(),
                _ if sq.is_playable() => '.',
                _ => ' ',
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "moves: white {}, black {}\n",
        view.move_counts[Color::White.idx()],
        view.move_counts[Color::Black.idx()]
    ));

    if let Some(result) = view.result {
        out.push_str(&format!("game over: {} wins\n", result.winner));
        return out;
    }

    let you = match view.local_player {
        Some(c) if c == view.active => " (you)",
        _ => "",
    };
    out.push_str(&format!("{} to move{}\n", view.active, you));
    if let Some(sq) = view.chain_square {
        out.push_str(&format!("continue capturing with {sq}\n"));
    } else if view.must_capture {
        out.push_str(&format!(
            "must capture with: {}\n",
            squares_to_string(&view.capturing_squares)
        ));
    }
    out
}

/// [`Renderer`] writing [`render_view`] output to any writer.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn redraw(&mut self, view: &GameView) {
        // A broken terminal is not the game's problem
        let _ = writeln!(self.out, "{}", render_view(view));
        let _ = self.out.flush();
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
