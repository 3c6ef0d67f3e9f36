//! Small node types for unit tests.

use crate::graph::edge::Edge;
use crate::graph::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Forward,
    Back,
}

/// A position on a cycle of `len` positions. Every position has a forward
/// and a backward neighbour, so walking forwards `len` times returns home.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    pos: u8,
    len: u8,
}

impl Ring {
    pub fn new(pos: u8, len: u8) -> Self {
        assert!(len > 0, "ring needs at least one position");
        Self {
            pos: pos % len,
            len,
        }
    }
}

impl Node for Ring {
    type Label = Turn;

    fn neighbours(&self) -> Vec<Edge<Self>> {
        let next = if self.pos + 1 == self.len { 0 } else { self.pos + 1 };
        let prev = if self.pos == 0 { self.len - 1 } else { self.pos - 1 };
        let forward = Ring::new(next, self.len);
        let back = Ring::new(prev, self.len);
        vec![
            Edge::new(self.clone(), forward, Turn::Forward),
            Edge::new(self.clone(), back, Turn::Back),
        ]
    }
}

/// A position on a segment `0..len`. The two ends have a single neighbour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    pos: u8,
    len: u8,
}

impl Line {
    pub fn new(pos: u8, len: u8) -> Self {
        assert!(pos < len, "position {pos} outside line of length {len}");
        Self { pos, len }
    }
}

impl Node for Line {
    type Label = Turn;

    fn neighbours(&self) -> Vec<Edge<Self>> {
        let mut edges = Vec::with_capacity(2);
        if self.pos + 1 < self.len {
            edges.push(Edge::new(
                self.clone(),
                Line::new(self.pos + 1, self.len),
                Turn::Forward,
            ));
        }
        if self.pos > 0 {
            edges.push(Edge::new(
                self.clone(),
                Line::new(self.pos - 1, self.len),
                Turn::Back,
            ));
        }
        edges
    }
}

/// A node that breaks the contract: its edges claim to start elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Liar(pub u8);

impl Node for Liar {
    type Label = ();

    fn neighbours(&self) -> Vec<Edge<Self>> {
        vec![
            Edge::new(Liar(self.0 + 100), Liar(self.0 + 1), ()),
            Edge::new(self.clone(), Liar(self.0 + 2), ()),
        ]
    }
}
