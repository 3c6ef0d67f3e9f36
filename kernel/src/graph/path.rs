//! The walk a search took to reach a state.

use std::ops::Index;

use crate::error::GraphError;
use crate::graph::edge::Edge;
use crate::graph::node::Node;

/// An ordered, continuous sequence of edges.
///
/// Invariant: `self[i].node_b() == self[i + 1].node_a()` for every adjacent
/// pair. Enforced by [`Path::append`] and [`Path::from_edges`]; there is no
/// way to mutate a path in place.
///
/// The empty path is valid and means "no moves taken".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N: Node> {
    edges: Vec<Edge<N>>,
}

impl<N: Node> Path<N> {
    /// The empty path.
    #[must_use]
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Build a path from a vector of edges, checking continuity.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DiscontinuousPath`] naming the first edge that
    /// does not start where its predecessor ends.
    pub fn from_edges(edges: Vec<Edge<N>>) -> Result<Self, GraphError> {
        if let Some(i) = edges
            .windows(2)
            .position(|pair| pair[0].node_b() != pair[1].node_a())
        {
            return Err(GraphError::DiscontinuousPath { position: i + 1 });
        }
        Ok(Self { edges })
    }

    /// A new path with `edge` added at the end. `self` is left unchanged.
    ///
    /// Any edge may start an empty path.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DiscontinuousPath`] if `edge.node_a()` is not
    /// the current destination.
    pub fn append(&self, edge: Edge<N>) -> Result<Self, GraphError> {
        if let Some(last) = self.edges.last() {
            if last.node_b() != edge.node_a() {
                return Err(GraphError::DiscontinuousPath {
                    position: self.edges.len(),
                });
            }
        }
        Ok(self.extended(edge))
    }

    /// Append without the continuity check. Callers must guarantee it.
    pub(crate) fn extended(&self, edge: Edge<N>) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self { edges }
    }

    /// The most recently taken edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyPath`] if no move has been taken.
    pub fn last(&self) -> Result<&Edge<N>, GraphError> {
        self.edges.last().ok_or(GraphError::EmptyPath)
    }

    /// The first edge taken.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyPath`] if no move has been taken.
    pub fn first(&self) -> Result<&Edge<N>, GraphError> {
        self.edges.first().ok_or(GraphError::EmptyPath)
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no move has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edge at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Edge<N>> {
        self.edges.get(index)
    }

    /// Iterate over the edges in the order they were taken.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<N>> {
        self.edges.iter()
    }

    /// Where the walk started (`None` for the empty path).
    #[must_use]
    pub fn origin(&self) -> Option<&N> {
        self.edges.first().map(Edge::node_a)
    }

    /// Where the walk currently ends (`None` for the empty path).
    #[must_use]
    pub fn destination(&self) -> Option<&N> {
        self.edges.last().map(Edge::node_b)
    }

    /// Every node visited, origin first. Empty for the empty path; otherwise
    /// `len() + 1` nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.origin()
            .into_iter()
            .chain(self.edges.iter().map(Edge::node_b))
    }

    /// The labels of the moves taken, in order.
    pub fn labels(&self) -> impl Iterator<Item = &N::Label> + '_ {
        self.edges.iter().map(Edge::label)
    }

    /// Borrow the edges as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Edge<N>] {
        &self.edges
    }
}

impl<N: Node> Default for Path<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Index<usize> for Path<N> {
    type Output = Edge<N>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.edges[index]
    }
}

impl<'a, N: Node> IntoIterator for &'a Path<N> {
    type Item = &'a Edge<N>;
    type IntoIter = std::slice::Iter<'a, Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
