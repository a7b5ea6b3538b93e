//! Randomised playouts checking invariants after every applied move:
//! - pieces only ever stand on dark squares
//! - men never move toward their own back rank
//! - kings are never demoted
//! - with a capture available, steps are refused with `MustCapture`
//! - the turn only passes when a chain is finished

use checkers_core::{
    any_capture_available, step_targets, Color, GameController, MoveKind, MoveOutcome, Rank,
    Rejection, Square,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const GAMES: u64 = 40;
const MAX_PLIES: usize = 300;

fn assert_on_dark_squares(game: &GameController) {
    let snap = game.snapshot();
    for color in Color::ALL {
        for (sq, _) in snap.pieces(color) {
            assert!(sq.is_playable(), "{color} piece on light square {sq}");
        }
    }
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square::new(row, col);
            if !sq.is_playable() {
                assert_eq!(snap.piece_at(sq).unwrap(), None);
            }
        }
    }
}

#[test]
fn test_random_playouts_hold_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameController::new();

        for _ in 0..MAX_PLIES {
            if game.is_over().is_some() {
                break;
            }
            let moves = game.legal_moves();
            let mv = match moves.choose(&mut rng) {
                Some(mv) => *mv,
                None => break,
            };
            let mover = game.active();
            let before = game.piece_at(mv.from).unwrap().unwrap();

            // Any step attempt is refused while a capture is pending
            let board = game.snapshot().to_board();
            if game.turn_state().chain_square.is_none() && any_capture_available(&board, mover) {
                for (sq, _) in board.pieces(mover) {
                    for to in step_targets(&board, sq) {
                        assert_eq!(
                            game.submit_move(sq, to),
                            MoveOutcome::Rejected(Rejection::MustCapture)
                        );
                    }
                }
            }

            let outcome = game.submit_move(mv.from, mv.to);
            let continue_turn = match outcome {
                MoveOutcome::Accepted { continue_turn, .. } => continue_turn,
                MoveOutcome::Rejected(r) => panic!("seed {seed}: legal move {mv} rejected: {r}"),
            };

            let after = game.piece_at(mv.to).unwrap().unwrap();
            assert_eq!(after.color, mover);
            if before.rank == Rank::King {
                assert_eq!(after.rank, Rank::King, "king demoted by {mv}");
            } else {
                let d_row = mv.to.row - mv.from.row;
                assert_eq!(d_row.signum(), mover.forward(), "man moved backwards: {mv}");
            }
            if mv.kind == MoveKind::Jump {
                assert_eq!(game.piece_at(mv.captured().unwrap()).unwrap(), None);
            }

            if continue_turn {
                assert_eq!(game.active(), mover);
                assert_eq!(game.turn_state().chain_square, Some(mv.to));
            } else {
                assert_eq!(game.active(), mover.other());
            }

            assert_on_dark_squares(&game);
        }
    }
}
