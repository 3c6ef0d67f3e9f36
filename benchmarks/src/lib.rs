//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::worlds::sliding_tile::{Board, Direction};

/// A board `moves` steps from solved, walked by a fixed linear congruential
/// sequence so every run benchmarks the same input.
///
/// Immediate reversals are skipped, so the walk wanders instead of
/// oscillating. The result is always solvable back to `Board::solved(size)`.
///
/// # Panics
///
/// Panics if `size` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn scrambled_board(size: usize, moves: usize, seed: u64) -> Board {
    let mut board = Board::solved(size).expect("size must be positive");
    let mut state = seed;
    let mut last: Option<Direction> = None;
    let mut taken = 0;

    while taken < moves {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let direction = Direction::ALL[usize::try_from(state >> 62).unwrap_or(0)];
        if last == Some(direction.inverse()) {
            continue;
        }
        if let Ok(next) = board.apply_move(direction) {
            board = next;
            last = Some(direction);
            taken += 1;
        } else if size == 1 {
            break;
        }
    }
    board
}
