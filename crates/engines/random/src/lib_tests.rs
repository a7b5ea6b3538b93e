use super::*;
use checkers_core::{legal_moves, Board, Color, Square};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(7);
    let board = Board::startpos();
    let turn = TurnState::new(Color::White);

    let mv = engine.choose_move(&board.snapshot(), &turn);

    assert!(mv.is_some());
    assert!(legal_moves(&board, &turn).contains(&mv.unwrap()));
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let board = Board::startpos().snapshot();
    let turn = TurnState::new(Color::Black);
    let picks = |seed| {
        let mut engine = RandomEngine::with_seed(seed);
        (0..10)
            .map(|_| engine.choose_move(&board, &turn))
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn random_engine_respects_mandatory_capture() {
    let board = Board::from_diagram(
        "........
         ........
         ........
         ........
         .....b..
         w...w...
         ........
         ........",
    )
    .unwrap();
    let mut engine = RandomEngine::with_seed(3);
    for _ in 0..20 {
        let mv = engine
            .choose_move(&board.snapshot(), &TurnState::new(Color::White))
            .unwrap();
        assert!(mv.is_capture());
        assert_eq!(mv.from, Square::new(5, 4));
    }
}

#[test]
fn random_engine_handles_blocked_side() {
    let board = Board::from_diagram(
        ".b......
         W.W.....
         ...W....
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    let mut engine = RandomEngine::with_seed(1);
    let mv = engine.choose_move(&board.snapshot(), &TurnState::new(Color::Black));
    assert!(mv.is_none());
}
