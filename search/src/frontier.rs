//! Strategy-ordered frontier of discovered, unexpanded nodes.
//!
//! One type covers all three strategies so the search loop stays the same
//! regardless of ordering: a `VecDeque` for breadth-first, a `Vec` stack for
//! depth-first and a `BinaryHeap` for best-first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use waypoint_kernel::Node;

use crate::node::{FrontierKey, SearchNode};
use crate::policy::SearchStrategy;

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry<N: Node> {
    key: Reverse<FrontierKey>,
    node: SearchNode<N>,
}

impl<N: Node> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N: Node> Eq for FrontierEntry<N> {}

impl<N: Node> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store<N: Node> {
    Fifo(VecDeque<SearchNode<N>>),
    Lifo(Vec<SearchNode<N>>),
    Heap(BinaryHeap<FrontierEntry<N>>),
}

/// Frontier manager.
///
/// Holds nodes only; visited-set bookkeeping lives in the search loop so
/// that it can be switched off by [`crate::policy::DedupPolicy`].
#[derive(Debug)]
pub struct Frontier<N: Node> {
    store: Store<N>,
    high_water: u64,
}

impl<N: Node> Frontier<N> {
    /// Create an empty frontier ordered by `strategy`.
    #[must_use]
    pub fn new(strategy: SearchStrategy) -> Self {
        let store = match strategy {
            SearchStrategy::BreadthFirst => Store::Fifo(VecDeque::new()),
            SearchStrategy::DepthFirst => Store::Lifo(Vec::new()),
            SearchStrategy::BestFirst => Store::Heap(BinaryHeap::new()),
        };
        Self {
            store,
            high_water: 0,
        }
    }

    /// Add a node.
    pub fn push(&mut self, node: SearchNode<N>) {
        match &mut self.store {
            Store::Fifo(q) => q.push_back(node),
            Store::Lifo(s) => s.push(node),
            Store::Heap(h) => h.push(FrontierEntry {
                key: Reverse(FrontierKey::from(&node)),
                node,
            }),
        }
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next node to expand.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode<N>> {
        match &mut self.store {
            Store::Fifo(q) => q.pop_front(),
            Store::Lifo(s) => s.pop(),
            Store::Heap(h) => h.pop().map(|e| e.node),
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(q) => q.len(),
            Store::Lifo(s) => s.len(),
            Store::Heap(h) => h.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Prune the frontier to at most `max_size` entries.
    ///
    /// Keeps the entries that would be popped first. Returns the `node_id`s
    /// of the dropped nodes, in the order they would have been popped.
    pub fn prune_to(&mut self, max_size: usize) -> Vec<u64> {
        if self.len() <= max_size {
            return Vec::new();
        }

        let mut ordered = Vec::with_capacity(self.len());
        while let Some(node) = self.pop() {
            ordered.push(node);
        }
        let dropped = ordered.split_off(max_size);

        match &mut self.store {
            Store::Fifo(q) => q.extend(ordered),
            // Stack pops from the back: restore in reverse pop order.
            Store::Lifo(s) => s.extend(ordered.into_iter().rev()),
            Store::Heap(h) => h.extend(ordered.into_iter().map(|node| FrontierEntry {
                key: Reverse(FrontierKey::from(&node)),
                node,
            })),
        }

        dropped.iter().map(|n| n.node_id).collect()
    }
}
