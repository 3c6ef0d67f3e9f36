//! Waypoint Kernel: the node/edge/path/state substrate for state-space search.
//!
//! The kernel knows nothing about any concrete problem. A domain plugs in by
//! implementing [`graph::node::Node`]; the kernel turns that capability into
//! walkable [`graph::path::Path`]s and successor [`graph::state::State`]s.
//!
//! # API Surface
//!
//! - [`graph::node::Node`] -- the capability a domain type implements
//! - [`graph::edge::Edge`] -- one labelled transition, compared by endpoints
//! - [`graph::path::Path`] -- a continuous walk, appended non-destructively
//! - [`graph::state::State::successors`] -- one-step expansion without immediate backtracking
//!
//! # Module Dependency Direction
//!
//! `node` ← `edge` ← `path` ← `state`
//!
//! The kernel performs no I/O and holds no global state. Visited sets,
//! frontier ordering and budgets belong to `waypoint_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::edge::Edge;
pub use graph::node::Node;
pub use graph::path::Path;
pub use graph::state::State;
