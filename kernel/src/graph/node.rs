//! The capability a domain type implements to become searchable.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::edge::Edge;

/// A position in a state space that can enumerate its outgoing transitions.
///
/// # Contract
///
/// - `neighbours` is pure: same node (or an equal node) → equal edge set in
///   the same order, no observable side effects.
/// - Every returned edge has `node_a() == self`. Edges that violate this are
///   dropped by [`crate::graph::state::State::successors`].
/// - `Eq` and `Hash` are derived from the full problem state, so two nodes
///   describing the same position are interchangeable however they were built.
///
/// Nodes are values: a transition builds a new node, it never mutates one.
pub trait Node: Clone + Eq + Hash + Debug {
    /// The domain's name for the move an edge represents (e.g. a direction).
    ///
    /// Domains without a meaningful move name use `()`.
    type Label: Clone + Debug;

    /// All transitions available from this node.
    fn neighbours(&self) -> Vec<Edge<Self>>;
}
