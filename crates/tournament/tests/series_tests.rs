//! End-to-end checks: engine lookup, engine series, and a match result
//! reaching the stats file through the controller's results sink.

use checkers_core::{Board, Color, Difficulty, GameController, Piece, Square};
use tournament::{create_engine, engine_for, quick_series, StatsRecorder, StatsStore};

#[test]
fn test_engine_names() {
    assert!(create_engine("random", Some(1)).is_some());
    assert!(create_engine("Heuristic", None).is_some());
    assert!(create_engine("hard", None).is_some());
    assert!(create_engine("minimax", None).is_none());

    assert_eq!(engine_for(Difficulty::Easy, Some(3)).name(), "Random v1.0");
    assert_eq!(
        engine_for(Difficulty::Hard, None).name(),
        engine_for(Difficulty::Medium, None).name()
    );
}

#[test]
fn test_series_completes() {
    let mut a = create_engine("heuristic", None).unwrap();
    let mut b = create_engine("random", Some(5)).unwrap();
    let result = quick_series(a.as_mut(), b.as_mut(), 4);
    assert_eq!(result.total_games(), 4);
}

#[test]
fn test_finished_match_reaches_stats_file() {
    let path = std::env::temp_dir().join(format!("checkers_e2e_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    // White captures the last black man
    let mut board = Board::empty();
    board.place(Square::new(3, 2), Piece::man(Color::White)).unwrap();
    board.place(Square::new(2, 3), Piece::man(Color::Black)).unwrap();

    let mut game = GameController::from_position(board, Color::White)
        .with_result_sink(Box::new(StatsRecorder::new(&path, "alice")));
    let outcome = game.submit_move(Square::new(3, 2), Square::new(1, 4));
    assert!(outcome.is_accepted());
    assert_eq!(game.is_over().map(|r| r.winner), Some(Color::White));

    let store = StatsStore::load(&path).unwrap();
    assert_eq!(store.score.white, 1);
    assert_eq!(store.score.black, 0);
    // No local player was seated, so nobody's rating moved
    assert!(store.players.is_empty());

    std::fs::remove_file(&path).unwrap();
}
