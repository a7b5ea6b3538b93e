//! Match orchestration: the single entry point through which every move,
//! local, engine or remote, is validated and applied.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::board::{Board, BoardSnapshot};
use crate::chain::CaptureChain;
use crate::collab::{GameReport, GameView, Renderer, ResultSink};
use crate::error::{BoardError, Rejection};
use crate::movegen::{any_capture_available, capturing_squares, legal_moves, legal_moves_for};
use crate::types::*;

/// Optional rule variations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Treat a side to move that has pieces but no legal move as lost.
    /// Off by default: only running out of pieces ends a match.
    pub blocked_side_loses: bool,
}

/// Result of [`GameController::submit_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted {
        mv: Move,
        /// The same piece must capture again before the turn passes.
        continue_turn: bool,
    },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn continue_turn(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Accepted {
                continue_turn: true,
                ..
            }
        )
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(r) => Some(*r),
            MoveOutcome::Accepted { .. } => None,
        }
    }
}

/// Owns the board and turn state of one match.
///
/// Calls must be serialized by the host: `submit_move` runs to completion and
/// its effect is permanent (there is no undo).
pub struct GameController {
    board: Board,
    chain: CaptureChain,
    active: Color,
    local_player: Option<Color>,
    move_counts: [u32; 2],
    rules: RuleOptions,
    result: Option<MatchResult>,
    renderer: Option<Box<dyn Renderer>>,
    results: Option<Box<dyn ResultSink>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// A controller at the opening position with White to move and no local
    /// player assigned.
    pub fn new() -> Self {
        Self::from_position(Board::startpos(), Color::White)
    }

    /// A controller over an arbitrary position, e.g. a puzzle or test setup.
    pub fn from_position(board: Board, active: Color) -> Self {
        Self {
            board,
            chain: CaptureChain::new(),
            active,
            local_player: None,
            move_counts: [0; 2],
            rules: RuleOptions::default(),
            result: None,
            renderer: None,
            results: None,
        }
    }

    pub fn with_rules(mut self, rules: RuleOptions) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_result_sink(mut self, sink: Box<dyn ResultSink>) -> Self {
        self.results = Some(sink);
        self
    }

    /// Starts a fresh match with the local player on `color`.
    pub fn start(&mut self, color: Color) {
        self.restart();
        self.local_player = Some(color);
        info!(local = %color, "match started");
        self.redraw();
    }

    /// Back to the opening position with no local player. Cumulative scores
    /// kept by a results store are not touched.
    pub fn reset(&mut self) {
        self.restart();
        self.local_player = None;
        debug!("match reset");
        self.redraw();
    }

    fn restart(&mut self) {
        self.board = Board::startpos();
        self.chain.reset();
        self.active = Color::White;
        self.move_counts = [0; 2];
        self.result = None;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.board.piece_at(sq)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.board.count_pieces(color)
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn local_player(&self) -> Option<Color> {
        self.local_player
    }

    pub fn rules(&self) -> RuleOptions {
        self.rules
    }

    pub fn turn_state(&self) -> TurnState {
        TurnState {
            active: self.active,
            chain_square: self.chain.square(),
        }
    }

    pub fn move_count(&self, color: Color) -> u32 {
        self.move_counts[color.idx()]
    }

    /// Every move the side to move may submit right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, &self.turn_state())
    }

    pub fn legal_moves_for(&self, from: Square) -> Vec<Move> {
        legal_moves_for(&self.board, from, &self.turn_state())
    }

    /// The winner, once a side has run out of pieces (or, with
    /// `blocked_side_loses`, out of moves).
    pub fn is_over(&self) -> Option<MatchResult> {
        self.result.or_else(|| self.terminal_state())
    }

    fn terminal_state(&self) -> Option<MatchResult> {
        for color in Color::ALL {
            if self.board.count_pieces(color) == 0 {
                return Some(MatchResult {
                    winner: color.other(),
                });
            }
        }
        if self.rules.blocked_side_loses && self.legal_moves().is_empty() {
            return Some(MatchResult {
                winner: self.active.other(),
            });
        }
        None
    }

    pub fn view(&self) -> GameView {
        let turn = self.turn_state();
        GameView {
            board: self.board.snapshot(),
            active: turn.active,
            chain_square: turn.chain_square,
            must_capture: turn.chain_square.is_some()
                || any_capture_available(&self.board, turn.active),
            capturing_squares: match turn.chain_square {
                Some(sq) => vec![sq],
                None => capturing_squares(&self.board, turn.active),
            },
            move_counts: self.move_counts,
            local_player: self.local_player,
            result: self.is_over(),
        }
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Validates and applies a move from `from` to `to` for the side to move.
    ///
    /// On rejection nothing changes. On acceptance the piece is moved, a
    /// jumped piece removed, a man reaching the far row crowned, and the turn
    /// passes unless the same piece has another capture.
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.validate(from, to) {
            Ok(mv) => self.apply(mv),
            Err(reason) => {
                debug!(%from, %to, %reason, "move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    fn validate(&self, from: Square, to: Square) -> Result<Move, Rejection> {
        if !from.in_bounds() || !to.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        if self.is_over().is_some() {
            return Err(Rejection::GameOver);
        }
        let piece = self.board.get(from).ok_or(Rejection::NotAPiece)?;
        if piece.color != self.active {
            return Err(Rejection::WrongTurn);
        }
        if !self.chain.permits(from) {
            return Err(Rejection::WrongChainPiece);
        }

        let turn = self.turn_state();
        if let Some(mv) = legal_moves_for(&self.board, from, &turn)
            .into_iter()
            .find(|mv| mv.to == to)
        {
            return Ok(mv);
        }

        let capture_due =
            turn.chain_square.is_some() || any_capture_available(&self.board, turn.active);
        if capture_due && from.midpoint(to).is_none() {
            Err(Rejection::MustCapture)
        } else {
            Err(Rejection::IllegalDestination)
        }
    }

    fn apply(&mut self, mv: Move) -> MoveOutcome {
        // Work on a copy so a failure cannot leave half a move behind.
        let mut next = self.board.clone();
        if let Err(e) = apply_to_board(&mut next, mv) {
            error!(%mv, error = %e, "validated move failed to apply");
            return MoveOutcome::Rejected(Rejection::IllegalDestination);
        }
        self.board = next;

        let mover = self.active;
        self.move_counts[mover.idx()] += 1;
        let continue_turn = self.chain.advance(&self.board, mv);
        if !continue_turn {
            self.active = mover.other();
        }
        debug!(color = %mover, %mv, continue_turn, "move applied");

        self.redraw();
        self.check_terminal();

        MoveOutcome::Accepted { mv, continue_turn }
    }

    fn check_terminal(&mut self) {
        if self.result.is_some() {
            return;
        }
        let result = match self.terminal_state() {
            Some(r) => r,
            None => return,
        };
        self.result = Some(result);
        info!(winner = %result.winner, "match over");

        let report = GameReport {
            winner: result.winner,
            local_player: self.local_player,
        };
        if let Some(sink) = self.results.as_mut() {
            if let Err(e) = sink.record(&report) {
                warn!(error = %e, "failed to record match result");
            }
        }
    }

    fn redraw(&mut self) {
        if self.renderer.is_none() {
            return;
        }
        let view = self.view();
        if let Some(r) = self.renderer.as_mut() {
            r.redraw(&view);
        }
    }
}

/// Relocates the piece, removes any jumped piece and crowns a man that
/// reached the far row.
pub fn apply_to_board(board: &mut Board, mv: Move) -> Result<(), BoardError> {
    board.move_piece(mv.from, mv.to)?;
    if let Some(captured) = mv.captured() {
        board.remove(captured)?;
    }
    if let Some(pc) = board.piece_at(mv.to)? {
        if !pc.is_king() && mv.to.row == pc.color.promotion_row() {
            board.place(mv.to, Piece::king(pc.color))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
