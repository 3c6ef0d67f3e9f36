//! Search world contract trait.

use waypoint_kernel::Node;

/// What a search needs to know about a domain beyond its graph structure.
///
/// The graph itself comes from [`Node::neighbours`]; a world adds the goal
/// test and, for best-first search, a cost-to-go estimate.
///
/// # Contract
///
/// - `is_goal` and `heuristic` must be deterministic: same node → same answer.
/// - Panics are caught by the search loop and recorded as
///   [`crate::graph::TerminationReason::InternalPanic`].
pub trait SearchWorld {
    /// The node type this world searches over.
    type Node: Node;

    /// Stable identifier echoed into the audit graph metadata.
    fn world_id(&self) -> &str;

    /// Test whether `node` satisfies the world's goal.
    fn is_goal(&self, node: &Self::Node) -> bool;

    /// Estimated remaining cost from `node` to a goal. Lower is better.
    ///
    /// Only consulted by [`crate::policy::SearchStrategy::BestFirst`].
    /// Defaults to 0, which turns best-first into uniform-cost search.
    fn heuristic(&self, node: &Self::Node) -> i64 {
        let _ = node;
        0
    }
}
