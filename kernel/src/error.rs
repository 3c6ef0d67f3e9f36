//! Typed kernel errors.
//!
//! Successor generation never fails; these cover the caller-detectable
//! misuse of [`crate::graph::path::Path`] and [`crate::graph::state::State`].

use thiserror::Error;

/// Failure building or reading a path or state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The last (or first) edge of an empty path was requested.
    #[error("path is empty: no move has been taken")]
    EmptyPath,
    /// An appended edge does not start where the path currently ends.
    #[error("edge does not continue the path at position {position}")]
    DiscontinuousPath {
        /// Index the offending edge would have occupied.
        position: usize,
    },
    /// A state was built from a path that does not end at its node.
    #[error("path of length {path_len} does not end at the state's node")]
    DetachedState { path_len: usize },
}
