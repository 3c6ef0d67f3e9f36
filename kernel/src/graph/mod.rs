//! Value-typed search graph: nodes, edges, paths and search states.

pub mod edge;
pub mod node;
pub mod path;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;
