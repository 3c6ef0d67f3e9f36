//! Binary that solves a fixed scrambled 3×3 board under every strategy
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per field, prefixed by the strategy name.
//! Logging goes to stderr (`RUST_LOG`), never stdout.

use waypoint_harness::runner::run_search;
use waypoint_harness::worlds::sliding_tile::{Board, Direction, SlidingTileWorld};
use waypoint_search::{SearchPolicy, SearchStrategy};

const SCRAMBLE: [Direction; 8] = [
    Direction::Down,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Left,
    Direction::Down,
];

fn main() {
    env_logger::init();

    let goal = Board::solved(3).expect("3x3 board");
    let root = goal.apply_moves(SCRAMBLE).expect("legal scramble");
    let world = SlidingTileWorld::new(goal);

    for strategy in [
        SearchStrategy::BreadthFirst,
        SearchStrategy::DepthFirst,
        SearchStrategy::BestFirst,
    ] {
        let policy = SearchPolicy::with_strategy(strategy);
        let report = run_search(&world, root.clone(), &policy).expect("search run failed");
        let name = strategy.as_str();
        let solution = report
            .solution
            .as_ref()
            .map(|moves| {
                moves
                    .iter()
                    .map(|d| format!("{d:?}"))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();

        println!("{name}.world_id={}", report.world_id);
        println!("{name}.policy_digest={}", report.policy_digest);
        println!("{name}.graph_digest={}", report.graph_digest);
        println!("{name}.termination_reason={:?}", report.termination_reason);
        println!("{name}.total_expansions={}", report.expansions);
        println!("{name}.nodes_created={}", report.nodes_created);
        println!("{name}.solution={solution}");
    }
}
