//! Harness runner: solve a sliding-tile board and summarise the run.
//!
//! # Pipeline
//!
//! ```text
//! check sizes → check reachability → policy.digest()
//!   → search() → graph.digest() → RunReport
//! ```

use log::info;
use thiserror::Error;
use waypoint_search::canon::CanonError;
use waypoint_search::hash::ContentHash;
use waypoint_search::{search, SearchError, SearchPolicy, TerminationReason};

use crate::worlds::sliding_tile::{Board, Direction, SlidingTileWorld};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Root and goal boards have different dimensions.
    #[error("root board is {root}x{root} but goal is {goal}x{goal}")]
    SizeMismatch { root: usize, goal: usize },
    /// The goal cannot be reached from the root by any move sequence.
    #[error("goal is not reachable from the root board")]
    Unreachable,
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Summary of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub world_id: String,
    /// Moves from the root to the goal; `None` if no goal was reached.
    pub solution: Option<Vec<Direction>>,
    pub termination_reason: TerminationReason,
    pub expansions: u64,
    pub nodes_created: usize,
    pub policy_digest: ContentHash,
    /// Digest of the canonical search graph.
    pub graph_digest: ContentHash,
}

impl RunReport {
    /// Whether the run ended at the goal.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Search from `root` to the goal of `world` under `policy`.
///
/// Unreachable goals are rejected up front instead of letting the search
/// exhaust the reachable half of the state space.
///
/// # Errors
///
/// Returns [`RunError::SizeMismatch`] or [`RunError::Unreachable`] before
/// searching, [`RunError::Search`] for an invalid policy, and
/// [`RunError::Canon`] if a digest cannot be computed.
pub fn run_search(
    world: &SlidingTileWorld,
    root: Board,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    let goal = world.goal();
    if root.size() != goal.size() {
        return Err(RunError::SizeMismatch {
            root: root.size(),
            goal: goal.size(),
        });
    }
    if !root.can_reach(goal) {
        return Err(RunError::Unreachable);
    }

    let policy_digest = policy.digest()?;
    let result = search(root, world, policy)?;
    let graph_digest = result.graph.digest()?;
    let meta = &result.graph.metadata;

    info!(
        "{}: {:?} after {} expansions ({} nodes)",
        meta.world_id,
        meta.termination_reason,
        meta.total_expansions,
        result.nodes_created()
    );

    Ok(RunReport {
        world_id: meta.world_id.clone(),
        solution: result.solution(),
        termination_reason: meta.termination_reason,
        expansions: meta.total_expansions,
        nodes_created: result.nodes_created(),
        policy_digest,
        graph_digest,
    })
}
