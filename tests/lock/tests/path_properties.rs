//! Path continuity and immutability over random board walks.

use proptest::prelude::*;
use waypoint_harness::worlds::sliding_tile::{Board, Direction};
use waypoint_kernel::{Edge, GraphError, Path, State};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Walk from the solved board, taking each requested direction when it is
/// an available successor and skipping it otherwise.
fn walk(size: usize, moves: &[Direction]) -> State<Board> {
    moves
        .iter()
        .fold(State::root(Board::solved(size).unwrap()), |state, d| {
            state
                .successors()
                .into_iter()
                .find(|s| s.path().last().map(Edge::label) == Ok(d))
                .unwrap_or(state)
        })
}

proptest! {
    #[test]
    fn prop_successor_paths_are_continuous(moves in prop::collection::vec(direction(), 0..40)) {
        let state = walk(3, &moves);
        let path = state.path();
        for i in 1..path.len() {
            prop_assert_eq!(path[i - 1].node_b(), path[i].node_a());
        }
        if let Ok(last) = path.last() {
            prop_assert_eq!(last.node_b(), state.node());
        }
        // Rebuilding from the raw edges accepts the same sequence.
        let rebuilt = Path::from_edges(path.iter().cloned().collect()).unwrap();
        prop_assert_eq!(&rebuilt, path);
    }

    #[test]
    fn prop_append_leaves_original_untouched(moves in prop::collection::vec(direction(), 0..20)) {
        let state = walk(3, &moves);
        let before = state.path().clone();
        for next in state.successors() {
            let edge = next.path().last().unwrap().clone();
            let longer = state.path().append(edge).unwrap();
            prop_assert_eq!(longer.len(), before.len() + 1);
            prop_assert_eq!(state.path(), &before);
        }
    }

    #[test]
    fn prop_no_successor_undoes_the_last_move(moves in prop::collection::vec(direction(), 1..30)) {
        let state = walk(4, &moves);
        if let Ok(last) = state.path().last() {
            for next in state.successors() {
                let taken = next.path().last().unwrap();
                prop_assert!(!taken.is_reverse_of(last));
                prop_assert_ne!(*taken.label(), last.label().inverse());
            }
        }
    }
}

#[test]
fn last_on_empty_path_signals_no_prior_move() {
    let path: Path<Board> = Path::new();
    assert_eq!(path.last().unwrap_err(), GraphError::EmptyPath);
}

#[test]
fn discontinuous_append_is_rejected() {
    let board = Board::solved(3).unwrap();
    let right = board.apply_move(Direction::Right).unwrap();
    let down = board.apply_move(Direction::Down).unwrap();

    let path = Path::new()
        .append(Edge::new(board.clone(), right, Direction::Right))
        .unwrap();
    // Starts at the root again instead of at `right`.
    let err = path
        .append(Edge::new(board, down, Direction::Down))
        .unwrap_err();
    assert_eq!(err, GraphError::DiscontinuousPath { position: 1 });
    assert_eq!(path.len(), 1);
}
