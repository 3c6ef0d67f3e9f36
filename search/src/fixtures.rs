//! Test worlds for the search layer.

use waypoint_kernel::{Edge, Node};

use crate::contract::SearchWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Inc,
    Double,
    Dec,
}

/// An integer in `0..=max`. Moves: `+1`, `*2`, `-1`, when they stay in range.
///
/// `1 → 2` is reachable both by `Inc` and by `Double`, and `Inc`/`Dec`
/// undo each other, so the graph is full of duplicates and cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Counter {
    pub value: u32,
    pub max: u32,
}

impl Counter {
    pub fn new(value: u32, max: u32) -> Self {
        Self { value, max }
    }

    fn to(&self, value: u32) -> Self {
        Self::new(value, self.max)
    }
}

impl Node for Counter {
    type Label = Op;

    fn neighbours(&self) -> Vec<Edge<Self>> {
        let mut edges = Vec::new();
        if self.value < self.max {
            edges.push(Edge::new(self.clone(), self.to(self.value + 1), Op::Inc));
        }
        if self.value > 0 && self.value * 2 <= self.max {
            edges.push(Edge::new(
                self.clone(),
                self.to(self.value * 2),
                Op::Double,
            ));
        }
        if self.value > 0 {
            edges.push(Edge::new(self.clone(), self.to(self.value - 1), Op::Dec));
        }
        edges
    }
}

/// Reach `target`; heuristic is the absolute distance to it.
pub struct CounterWorld {
    pub target: u32,
}

impl SearchWorld for CounterWorld {
    type Node = Counter;

    fn world_id(&self) -> &str {
        "counter"
    }

    fn is_goal(&self, node: &Counter) -> bool {
        node.value == self.target
    }

    fn heuristic(&self, node: &Counter) -> i64 {
        (i64::from(node.value) - i64::from(self.target)).abs()
    }
}

/// A world whose goal test panics on a chosen value.
pub struct PanickyWorld {
    pub explode_at: u32,
}

impl SearchWorld for PanickyWorld {
    type Node = Counter;

    fn world_id(&self) -> &str {
        "panicky"
    }

    fn is_goal(&self, node: &Counter) -> bool {
        assert!(node.value != self.explode_at, "boom at {}", node.value);
        false
    }
}

/// A world whose heuristic panics on a chosen value. Never reaches a goal.
pub struct PanickyHeuristicWorld {
    pub explode_at: u32,
}

impl SearchWorld for PanickyHeuristicWorld {
    type Node = Counter;

    fn world_id(&self) -> &str {
        "panicky_heuristic"
    }

    fn is_goal(&self, _node: &Counter) -> bool {
        false
    }

    fn heuristic(&self, node: &Counter) -> i64 {
        assert!(node.value != self.explode_at, "boom at {}", node.value);
        0
    }
}

/// A chain `0 → 1 → 2 → …` whose `neighbours()` panics at `blow_at`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fuse {
    pub value: u32,
    pub blow_at: u32,
}

impl Node for Fuse {
    type Label = ();

    fn neighbours(&self) -> Vec<Edge<Self>> {
        assert!(self.value != self.blow_at, "fuse blew at {}", self.value);
        let next = Fuse {
            value: self.value + 1,
            blow_at: self.blow_at,
        };
        vec![Edge::new(self.clone(), next, ())]
    }
}

/// Walks a [`Fuse`] chain without a goal.
pub struct FuseWorld;

impl SearchWorld for FuseWorld {
    type Node = Fuse;

    fn world_id(&self) -> &str {
        "fuse"
    }

    fn is_goal(&self, _node: &Fuse) -> bool {
        false
    }
}
