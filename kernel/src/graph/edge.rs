//! A single labelled transition between two nodes.

use std::hash::{Hash, Hasher};

use crate::graph::node::Node;

/// An ordered transition from `node_a` (origin) to `node_b` (destination).
///
/// Edges are values. Equality and hashing use the two endpoints only; the
/// label is data carried along with the edge (which move produced it) and
/// does not participate in identity. An edge A→B is never equal to B→A.
#[derive(Debug, Clone)]
pub struct Edge<N: Node> {
    node_a: N,
    node_b: N,
    label: N::Label,
}

impl<N: Node> Edge<N> {
    /// Construct an edge from `node_a` to `node_b`, produced by `label`.
    #[must_use]
    pub fn new(node_a: N, node_b: N, label: N::Label) -> Self {
        Self {
            node_a,
            node_b,
            label,
        }
    }

    /// The origin node.
    #[must_use]
    pub fn node_a(&self) -> &N {
        &self.node_a
    }

    /// The destination node.
    #[must_use]
    pub fn node_b(&self) -> &N {
        &self.node_b
    }

    /// The move that produced this edge.
    #[must_use]
    pub fn label(&self) -> &N::Label {
        &self.label
    }

    /// Whether taking `self` right after `other` would undo `other`.
    ///
    /// True iff the endpoints are swapped: `self.node_a == other.node_b` and
    /// `self.node_b == other.node_a`. Labels are ignored.
    #[must_use]
    pub fn is_reverse_of(&self, other: &Self) -> bool {
        self.node_a == other.node_b && self.node_b == other.node_a
    }

    /// Decompose into `(node_a, node_b, label)`.
    #[must_use]
    pub fn into_parts(self) -> (N, N, N::Label) {
        (self.node_a, self.node_b, self.label)
    }
}

impl<N: Node> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node_a == other.node_a && self.node_b == other.node_b
    }
}

impl<N: Node> Eq for Edge<N> {}

impl<N: Node> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_a.hash(state);
        self.node_b.hash(state);
    }
}
