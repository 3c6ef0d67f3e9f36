//! Search nodes and frontier ordering keys.

use waypoint_kernel::{Node, State};

/// A kernel [`State`] wrapped with the bookkeeping a frontier needs.
///
/// Ordering for best-first extraction uses `(f_cost, depth, creation_order)`
/// where `f_cost = g_cost + h_cost`. Lower is better; ties broken by
/// shallower depth, then older creation order.
#[derive(Debug, Clone)]
pub struct SearchNode<N: Node> {
    /// Monotonic identifier, also the index into the graph's node summaries.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The kernel state: current node plus the path that reached it.
    pub state: State<N>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost (+1 per edge).
    pub g_cost: i64,
    /// Heuristic estimate from the world (0 outside best-first).
    pub h_cost: i64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<N: Node> SearchNode<N> {
    /// Compute `f_cost = g_cost + h_cost` (the best-first ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The best-first ordering key: `(f_cost, depth, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<N: Node> From<&SearchNode<N>> for FrontierKey {
    fn from(node: &SearchNode<N>) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            creation_order: node.creation_order,
        }
    }
}
