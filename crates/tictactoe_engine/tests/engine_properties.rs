//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_engine::{Board, GameEngine, GameStatus, Player, Position, Square, rules::WIN_LINES};

fn started() -> GameEngine {
    let mut engine = GameEngine::new();
    engine.initialize();
    engine
}

fn marks(board: &Board, player: Player) -> usize {
    board
        .squares()
        .iter()
        .filter(|sq| **sq == Square::Occupied(player))
        .count()
}

/// Every cell index exactly once, in random order.
fn move_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9usize).collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_game_ends_exactly_when_line_or_full(order in move_order()) {
        let mut engine = started();
        for index in order {
            let mover = engine.current_player();
            let before = engine.board().clone();
            let accepted = engine.attempt_move(index).is_accepted();
            if !accepted {
                prop_assert!(!engine.is_active());
                prop_assert_eq!(engine.board(), &before);
                prop_assert!(engine.drain_events().is_empty());
                continue;
            }
            engine.drain_events();

            let board = engine.board();
            let mark = Square::Occupied(mover);
            let line_for_mover = WIN_LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos) == mark));
            let full = board.squares().iter().all(|sq| *sq != Square::Empty);

            if line_for_mover {
                prop_assert_eq!(engine.status(), GameStatus::Won(mover));
                prop_assert!(!engine.is_active());
            } else if full {
                prop_assert_eq!(engine.status(), GameStatus::Draw);
                prop_assert!(!engine.is_active());
            } else {
                prop_assert_eq!(engine.status(), GameStatus::InProgress);
                prop_assert_eq!(engine.current_player(), mover.opponent());
            }
        }
        prop_assert!(!engine.is_active());
    }

    #[test]
    fn prop_marks_alternate(moves in proptest::collection::vec(0..12usize, 0..30)) {
        let mut engine = started();
        for index in moves {
            engine.attempt_move(index);
            let x = marks(engine.board(), Player::X);
            let o = marks(engine.board(), Player::O);
            prop_assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn prop_occupied_move_changes_nothing(moves in proptest::collection::vec(0..9usize, 1..9)) {
        let mut engine = started();
        for index in &moves {
            engine.attempt_move(*index);
        }
        let board = engine.board().clone();
        let Some(taken) = Position::ALL.into_iter().find(|pos| !board.is_empty(*pos)) else {
            return Ok(());
        };

        let player = engine.current_player();
        prop_assert!(!engine.attempt_move(taken.to_index()).is_accepted());
        prop_assert_eq!(engine.board(), &board);
        prop_assert_eq!(engine.current_player(), player);
    }

    #[test]
    fn prop_restart_always_resets(moves in proptest::collection::vec(0..9usize, 0..12)) {
        let mut engine = started();
        for index in moves {
            engine.attempt_move(index);
        }
        engine.restart();
        prop_assert_eq!(engine.board(), &Board::new());
        prop_assert_eq!(engine.current_player(), Player::X);
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert!(engine.is_active());
    }
}
