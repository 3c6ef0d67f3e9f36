//! Waypoint Search: frontier-driven traversal over the kernel's state graph.
//!
//! The kernel only knows how to take one step without immediately undoing
//! the previous one. This crate adds everything a full search needs on top:
//! frontier ordering, a visited set, budgets and an auditable expansion log.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (node, path,        (frontier, policy,   (sliding-tile world,
//!  state)              audit graph)         runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchWorld`] — goal test and heuristic for a node type
//! - [`SearchPolicy`] — strategy, dedup mode and budgets
//! - [`Frontier`] — FIFO, LIFO or best-first container of [`SearchNode`]s
//! - [`SearchGraph`] — expansion-event audit log with canonical JSON form
//! - [`search()`] — the expansion loop

#![forbid(unsafe_code)]

pub mod canon;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod hash;
pub mod node;
pub mod policy;
pub mod search;

pub use contract::SearchWorld;
pub use error::SearchError;
pub use frontier::Frontier;
pub use graph::{SearchGraph, TerminationReason};
pub use node::SearchNode;
pub use policy::{DedupPolicy, SearchPolicy, SearchStrategy};
pub use search::{search, SearchResult};

#[cfg(test)]
pub(crate) mod fixtures;
