//! Sliding-tile acceptance scenarios driven through the kernel's public API.

use proptest::prelude::*;
use waypoint_harness::worlds::sliding_tile::{Board, BoardError, Direction};
use waypoint_kernel::{Node, State};

fn center() -> Board {
    Board::new(3, vec![1, 2, 3, 4, 0, 5, 6, 7, 8]).expect("valid board")
}

fn last_move(state: &State<Board>) -> Direction {
    *state.path().last().expect("non-root").label()
}

#[test]
fn center_board_moves_in_every_direction() {
    let board = center();
    for d in Direction::ALL {
        assert!(board.can_move(d));
    }
    assert_eq!(
        board.apply_move(Direction::Up).unwrap().tiles(),
        &[1, 0, 3, 4, 2, 5, 6, 7, 8]
    );
}

#[test]
fn root_state_is_not_filtered() {
    let successors = State::root(center()).successors();
    let moves: Vec<Direction> = successors.iter().map(last_move).collect();
    assert_eq!(moves, Direction::ALL.to_vec());
}

#[test]
fn reversal_of_up_is_excluded() {
    let up = State::root(center())
        .successors()
        .into_iter()
        .find(|s| last_move(s) == Direction::Up)
        .unwrap();
    assert_eq!(up.node().neighbours().len(), 3);
    let moves: Vec<Direction> = up.successors().iter().map(last_move).collect();
    assert_eq!(moves, vec![Direction::Left, Direction::Right]);
    assert!(up.successors().iter().all(|s| *s.node() != center()));
}

#[test]
fn returning_by_a_longer_cycle_is_allowed() {
    // Circling the empty tile around a 2×2 board rotates the other three
    // tiles; three laps return to the solved board.
    let cycle = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    let mut state = State::root(Board::solved(2).unwrap());
    for d in cycle.iter().cycle().take(12) {
        state = state
            .successors()
            .into_iter()
            .find(|s| last_move(s) == *d)
            .unwrap_or_else(|| panic!("{d:?} filtered at depth {}", state.depth()));
    }
    assert_eq!(state.node(), &Board::solved(2).unwrap());
    assert_eq!(state.depth(), 12);
}

#[test]
fn single_tile_board_is_a_dead_end() {
    let board = Board::new(1, vec![0]).unwrap();
    for d in Direction::ALL {
        assert!(!board.can_move(d));
    }
    assert!(board.neighbours().is_empty());
}

#[test]
fn mismatched_tile_count_is_a_construction_error() {
    assert_eq!(
        Board::new(2, vec![0, 1, 2]).unwrap_err(),
        BoardError::InvalidDimensions { size: 2, tiles: 3 }
    );
}

#[test]
fn illegal_move_is_an_error_not_a_panic() {
    let err = Board::solved(3).unwrap().apply_move(Direction::Left).unwrap_err();
    assert_eq!(
        err,
        BoardError::IllegalMove {
            direction: Direction::Left
        }
    );
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_neighbours_are_pure(walk in prop::collection::vec(direction(), 0..32)) {
        let board = walk
            .into_iter()
            .fold(Board::solved(4).unwrap(), |b, d| b.apply_move(d).unwrap_or(b));
        prop_assert_eq!(board.neighbours(), board.neighbours());
        prop_assert_eq!(board.neighbours(), board.clone().neighbours());
    }

    #[test]
    fn prop_legal_move_then_inverse_restores_board(
        walk in prop::collection::vec(direction(), 0..32),
        d in direction(),
    ) {
        let board = walk
            .into_iter()
            .fold(Board::solved(3).unwrap(), |b, d| b.apply_move(d).unwrap_or(b));
        prop_assume!(board.can_move(d));
        let back = board.apply_move(d).unwrap().apply_move(d.inverse()).unwrap();
        prop_assert_eq!(back, board);
    }
}
