//! Search policy types.

use crate::canon::{canonical_json_bytes, CanonError};
use crate::error::SearchError;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY};

/// Strategy, dedup mode and budgets for one search.
///
/// A policy is echoed verbatim into the audit graph metadata, so the graph
/// digest commits to the configuration it ran under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier ordering.
    pub strategy: SearchStrategy,
    /// How repeated nodes are handled.
    pub dedup: DedupPolicy,
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Depth cutoff: nodes deeper than this are never created.
    pub max_depth: u32,
    /// Frontier prune threshold.
    pub max_frontier_size: u64,
}

impl SearchPolicy {
    /// A default policy using `strategy`.
    #[must_use]
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` or
    /// `max_frontier_size` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo of this policy for the audit graph.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "dedup": self.dedup.as_str(),
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "max_frontier_size": self.max_frontier_size,
            "strategy": self.strategy.as_str(),
        })
    }

    /// Content hash of the canonical JSON echo.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::BreadthFirst,
            dedup: DedupPolicy::Visited,
            max_expansions: 10_000,
            max_depth: 64,
            max_frontier_size: 100_000,
        }
    }
}

/// Order in which discovered nodes are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Oldest first (FIFO). Finds a shallowest goal.
    BreadthFirst,
    /// Newest first (LIFO).
    DepthFirst,
    /// Lowest `g + h` first, ties by depth then creation order.
    BestFirst,
}

impl SearchStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::BestFirst => "best_first",
        }
    }
}

/// Loop-detection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// First-seen-wins visited set over node equality. Default.
    Visited,
    /// No visited set; rely on the kernel's no-immediate-reversal rule only.
    /// Longer cycles are re-explored until a budget stops them.
    ReverseEdgeOnly,
}

impl DedupPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visited => "visited",
            Self::ReverseEdgeOnly => "reverse_edge_only",
        }
    }
}
