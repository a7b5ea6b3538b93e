use super::*;

#[test]
fn test_chain_continues_only_while_captures_remain() {
    let after_first = Board::from_diagram(
        "........
         ........
         .....b..
         ....w...
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    let mut chain = CaptureChain::new();
    let first = Move::jump(Square::new(5, 2), Square::new(3, 4));

    assert!(chain.advance(&after_first, first));
    assert_eq!(chain.state(), ChainState::Chained(Square::new(3, 4)));
    assert!(chain.permits(Square::new(3, 4)));
    assert!(!chain.permits(Square::new(7, 0)));

    let after_second = Board::from_diagram(
        "........
         ......w.
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    assert!(!chain.advance(&after_second, Move::jump(Square::new(3, 4), Square::new(1, 6))));
    assert_eq!(chain.square(), None);
}

#[test]
fn test_step_never_starts_a_chain() {
    // A capture is available from (4,1) but a step does not open a chain
    let b = Board::from_diagram(
        "........
         ........
         ........
         ..b.....
         .w......
         ........
         ........
         ........",
    )
    .unwrap();
    let mut chain = CaptureChain::new();
    assert!(!chain.advance(&b, Move::step(Square::new(5, 0), Square::new(4, 1))));
    assert_eq!(chain.state(), ChainState::Idle);
}

#[test]
fn test_reset_returns_to_idle() {
    let mut chain = CaptureChain {
        state: ChainState::Chained(Square::new(3, 4)),
    };
    chain.reset();
    assert_eq!(chain.state(), ChainState::Idle);
    assert!(chain.permits(Square::new(0, 1)));
}
