use super::*;
use crate::collab::CollaboratorError;
use std::cell::RefCell;
use std::rc::Rc;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn game(diagram: &str, active: Color) -> GameController {
    GameController::from_position(Board::from_diagram(diagram).unwrap(), active)
}

#[derive(Clone, Default)]
struct Recorder {
    reports: Rc<RefCell<Vec<GameReport>>>,
    redraws: Rc<RefCell<Vec<GameView>>>,
}

impl ResultSink for Recorder {
    fn record(&mut self, report: &GameReport) -> Result<(), CollaboratorError> {
        self.reports.borrow_mut().push(*report);
        Ok(())
    }
}

impl Renderer for Recorder {
    fn redraw(&mut self, view: &GameView) {
        self.redraws.borrow_mut().push(view.clone());
    }
}

struct BrokenSink;

impl ResultSink for BrokenSink {
    fn record(&mut self, _report: &GameReport) -> Result<(), CollaboratorError> {
        Err("disk full".into())
    }
}

#[test]
fn test_start_resets_everything() {
    let mut g = GameController::new();
    assert!(g.submit_move(sq(5, 0), sq(4, 1)).is_accepted());
    g.start(Color::Black);

    assert_eq!(g.snapshot(), Board::startpos().snapshot());
    assert_eq!(g.turn_state(), TurnState::new(Color::White));
    assert_eq!(g.local_player(), Some(Color::Black));
    assert_eq!(g.move_count(Color::White), 0);
}

#[test]
fn test_rejection_reasons() {
    let mut g = GameController::new();
    let cases = [
        (sq(8, 0), sq(7, 1), Rejection::OutOfBounds),
        (sq(5, 0), sq(4, -1), Rejection::OutOfBounds),
        (sq(4, 1), sq(3, 0), Rejection::NotAPiece),
        (sq(2, 1), sq(3, 0), Rejection::WrongTurn),
        (sq(5, 0), sq(3, 2), Rejection::IllegalDestination),
        (sq(6, 1), sq(5, 0), Rejection::IllegalDestination),
        (sq(5, 2), sq(5, 3), Rejection::IllegalDestination),
    ];
    for (from, to, reason) in cases {
        assert_eq!(
            g.submit_move(from, to),
            MoveOutcome::Rejected(reason),
            "{from} -> {to}"
        );
    }
    assert_eq!(g.snapshot(), Board::startpos().snapshot());
    assert_eq!(g.active(), Color::White);
    assert_eq!(g.move_count(Color::White), 0);
}

#[test]
fn test_must_capture_rejection_leaves_state_alone() {
    let mut g = game(
        "........
         ........
         ........
         ........
         .....b..
         w...w...
         ........
         ........",
        Color::White,
    );
    let before = g.snapshot();
    assert_eq!(
        g.submit_move(sq(5, 0), sq(4, 1)),
        MoveOutcome::Rejected(Rejection::MustCapture)
    );
    assert_eq!(
        g.submit_move(sq(5, 4), sq(4, 3)),
        MoveOutcome::Rejected(Rejection::MustCapture)
    );
    assert_eq!(g.snapshot(), before);
    assert_eq!(g.turn_state(), TurnState::new(Color::White));
}

#[test]
fn test_promotion_mid_chain_uses_king_geometry() {
    let mut g = game(
        "........
         ..b.b...
         .w......
         ........
         ........
         ........
         ........
         ......b.",
        Color::White,
    );
    let first = g.submit_move(sq(2, 1), sq(0, 3));
    assert_eq!(
        first,
        MoveOutcome::Accepted {
            mv: Move::jump(sq(2, 1), sq(0, 3)),
            continue_turn: true,
        }
    );
    assert_eq!(g.piece_at(sq(0, 3)).unwrap(), Some(Piece::king(Color::White)));
    assert_eq!(g.turn_state().chain_square, Some(sq(0, 3)));

    // Backward jump only a king can make
    let second = g.submit_move(sq(0, 3), sq(2, 5));
    assert!(second.is_accepted());
    assert!(!second.continue_turn());
    assert_eq!(g.active(), Color::Black);
    assert_eq!(g.count_pieces(Color::Black), 1);
    assert_eq!(g.move_count(Color::White), 2);
}

#[test]
fn test_result_reported_once_with_local_color() {
    let rec = Recorder::default();
    let mut g = game(
        "........
         ........
         ...b....
         ..w.....
         ........
         ........
         ........
         ........",
        Color::White,
    )
    .with_result_sink(Box::new(rec.clone()));
    g.local_player = Some(Color::Black);

    assert!(g.submit_move(sq(3, 2), sq(1, 4)).is_accepted());
    assert_eq!(g.is_over(), Some(MatchResult { winner: Color::White }));
    assert_eq!(
        g.submit_move(sq(1, 4), sq(0, 5)),
        MoveOutcome::Rejected(Rejection::GameOver)
    );

    let reports = rec.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].winner, Color::White);
    assert_eq!(reports[0].local_won(), Some(false));
}

#[test]
fn test_failing_sink_does_not_disturb_game() {
    let mut g = game(
        "........
         ........
         ...b....
         ..w.....
         ........
         ........
         ........
         ........",
        Color::White,
    )
    .with_result_sink(Box::new(BrokenSink));
    let outcome = g.submit_move(sq(3, 2), sq(1, 4));
    assert!(outcome.is_accepted());
    assert_eq!(g.piece_at(sq(1, 4)).unwrap(), Some(Piece::man(Color::White)));
    assert_eq!(g.is_over(), Some(MatchResult { winner: Color::White }));
}

#[test]
fn test_renderer_sees_every_accepted_move() {
    let rec = Recorder::default();
    let mut g = GameController::new().with_renderer(Box::new(rec.clone()));
    g.start(Color::White);
    g.submit_move(sq(5, 0), sq(4, 1));
    g.submit_move(sq(5, 0), sq(4, 1)); // rejected, no redraw

    let views = rec.redraws.borrow();
    assert_eq!(views.len(), 2);
    let last = &views[1];
    assert_eq!(last.active, Color::Black);
    assert_eq!(last.move_counts, [1, 0]);
    assert!(!last.must_capture);
    assert_eq!(
        last.board.piece_at(sq(4, 1)).unwrap(),
        Some(Piece::man(Color::White))
    );
}

#[test]
fn test_view_flags_forced_captures() {
    let g = game(
        "........
         ........
         ........
         ........
         .....b..
         w...w...
         ........
         ........",
        Color::White,
    );
    let view = g.view();
    assert!(view.must_capture);
    assert_eq!(view.capturing_squares, vec![sq(5, 4)]);
    assert_eq!(view.result, None);
}

#[test]
fn test_blocked_side_only_loses_when_enabled() {
    // Black man on (0,1) is boxed in by white kings it cannot jump
    let blocked = "
         .b......
         W.W.....
         ...W....
         ........
         ........
         ........
         ........
         ........";
    let plain = game(blocked, Color::Black);
    assert!(plain.legal_moves().is_empty());
    assert_eq!(plain.is_over(), None);

    let strict = game(blocked, Color::Black).with_rules(RuleOptions {
        blocked_side_loses: true,
    });
    assert_eq!(strict.is_over(), Some(MatchResult { winner: Color::White }));
}

#[test]
fn test_reset_clears_local_player() {
    let mut g = GameController::new();
    g.start(Color::White);
    g.submit_move(sq(5, 2), sq(4, 3));
    g.reset();
    assert_eq!(g.local_player(), None);
    assert_eq!(g.snapshot(), Board::startpos().snapshot());
    assert_eq!(g.move_count(Color::White), 0);
}
