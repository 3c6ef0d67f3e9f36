//! Search states and one-step successor generation.

use log::{trace, warn};

use crate::error::GraphError;
use crate::graph::edge::Edge;
use crate::graph::node::Node;
use crate::graph::path::Path;

/// A current node paired with the path taken to reach it.
///
/// Invariant: if `path` is non-empty, `path.last().node_b() == node`.
/// A state with an empty path is a search root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State<N: Node> {
    node: N,
    path: Path<N>,
}

impl<N: Node> State<N> {
    /// A root state: `node` with no moves taken.
    #[must_use]
    pub fn root(node: N) -> Self {
        Self {
            node,
            path: Path::new(),
        }
    }

    /// Pair `node` with an existing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DetachedState`] if `path` is non-empty and does
    /// not end at `node`.
    pub fn new(node: N, path: Path<N>) -> Result<Self, GraphError> {
        if let Some(dest) = path.destination() {
            if *dest != node {
                return Err(GraphError::DetachedState {
                    path_len: path.len(),
                });
            }
        }
        Ok(Self { node, path })
    }

    /// The current node.
    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The path taken to reach [`State::node`].
    #[must_use]
    pub fn path(&self) -> &Path<N> {
        &self.path
    }

    /// Number of moves taken from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether this state is a search root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Decompose into `(node, path)`.
    #[must_use]
    pub fn into_parts(self) -> (N, Path<N>) {
        (self.node, self.path)
    }

    /// The states reachable by taking exactly one edge from the current node.
    ///
    /// Candidates come from [`Node::neighbours`] in the order it returns them.
    /// At a root every edge is accepted. Otherwise the single edge that
    /// undoes the last move (its endpoints swapped) is skipped. Nothing else
    /// is filtered: longer cycles and repeated nodes pass through.
    ///
    /// Edges whose origin is not the current node break the [`Node`]
    /// contract; they are skipped and logged.
    ///
    /// An empty result is a normal terminal condition.
    #[must_use]
    pub fn successors(&self) -> Vec<Self> {
        let last = self.path.last().ok();
        let mut successors = Vec::new();
        let mut reversed = 0usize;

        for edge in self.node.neighbours() {
            if *edge.node_a() != self.node {
                warn!(
                    "neighbours() of {:?} returned an edge starting at {:?}; skipped",
                    self.node,
                    edge.node_a()
                );
                continue;
            }
            if last.is_some_and(|last| edge.is_reverse_of(last)) {
                reversed += 1;
                continue;
            }
            successors.push(self.step(edge));
        }

        trace!(
            "depth {}: {} successors, {} immediate reversals skipped",
            self.depth(),
            successors.len(),
            reversed
        );
        successors
    }

    /// Follow `edge`, which must start at `self.node`.
    fn step(&self, edge: Edge<N>) -> Self {
        let node = edge.node_b().clone();
        let path = self.path.extended(edge);
        Self { node, path }
    }
}
