//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal, exhaustion, budgets, caught panics) are expressed via
//! [`crate::graph::TerminationReason`] and always produce a `SearchGraph`
//! audit trail.

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded, so no `SearchGraph` exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy cannot drive a search (e.g. a zero budget).
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
