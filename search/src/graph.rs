//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries. Node summaries are a derived index for path reconstruction.

use crate::canon::{canonical_json_bytes, CanonError};
use crate::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Derived node index; `node_summaries[i].node_id == i`.
    pub node_summaries: Vec<NodeSummary>,
    /// Aggregate metadata with the policy echo.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + successor-expansion event.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// The frontier key at time of pop.
    pub frontier_pop_key: FrontierPopKey,
    /// One record per successor, in kernel order.
    pub candidates: Vec<CandidateRecord>,
    /// Dead-end reason if this expansion produced zero children.
    pub dead_end_reason: Option<DeadEndReason>,
    /// Expansion-level notes.
    pub notes: Vec<ExpansionNote>,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKey {
    pub f_cost: i64,
    pub depth: u32,
    pub creation_order: u64,
}

/// A successor with its outcome recorded in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Position in the successor list.
    pub index: u64,
    /// `Debug` rendering of the edge label that produced the successor.
    pub label: String,
    pub outcome: CandidateOutcome,
}

/// Outcome of processing a successor during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Created a new node.
    Applied { to_node: u64 },
    /// Node already seen (first-seen-wins dedup).
    DuplicateSuppressed { existing_node: u64 },
    /// Skipped because the child would exceed `max_depth`.
    SkippedByDepthLimit,
}

/// Why a node was marked as a dead end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadEndReason {
    /// Every successor was tried; none produced a new node.
    Exhaustive,
    /// At least one successor was cut by the depth limit.
    DepthLimited,
}

/// Expansion-level notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionNote {
    /// Frontier was pruned during this expansion.
    FrontierPruned { pruned_node_ids: Vec<u64> },
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    pub f_cost: i64,
    pub is_goal: bool,
    pub dead_end_reason: Option<DeadEndReason>,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    /// JSON echo of the [`crate::policy::SearchPolicy`] used.
    pub policy: serde_json::Value,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_dead_ends_exhaustive: u64,
    pub total_dead_ends_depth_limited: u64,
    pub termination_reason: TerminationReason,
    pub frontier_high_water: u64,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Search found a goal state.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// A panic was caught in a world or node callback.
    InternalPanic { stage: PanicStage },
    /// The frontier reported non-empty but yielded no node.
    FrontierInvariantViolation,
}

/// Stage at which a panic was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicStage {
    /// `SearchWorld::is_goal()` on the root node.
    IsGoalRoot,
    /// `SearchWorld::is_goal()` during expansion.
    IsGoalExpansion,
    /// `SearchWorld::heuristic()`.
    Heuristic,
    /// `Node::neighbours()` (via `State::successors()`).
    Neighbours,
}

impl SearchGraph {
    /// Node ids from the root to `node_id`, following parent links.
    ///
    /// Empty if `node_id` is unknown.
    #[must_use]
    pub fn node_path(&self, node_id: u64) -> Vec<u64> {
        let mut path = Vec::new();
        let mut current = Some(node_id);

        while let Some(id) = current {
            let Some(summary) = usize::try_from(id)
                .ok()
                .and_then(|i| self.node_summaries.get(i))
            else {
                return Vec::new();
            };
            path.push(id);
            current = summary.parent_id;
        }

        path.reverse();
        path
    }

    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "dead_end_reason": e.dead_end_reason.map(dead_end_reason_to_json),
        "expansion_order": e.expansion_order,
        "frontier_pop_key": {
            "creation_order": e.frontier_pop_key.creation_order,
            "depth": e.frontier_pop_key.depth,
            "f_cost": e.frontier_pop_key.f_cost,
        },
        "node_id": e.node_id,
        "notes": e.notes.iter().map(note_to_json).collect::<Vec<_>>(),
    })
}

fn candidate_record_to_json(r: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "label": r.label,
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Applied { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "applied"})
        }
        CandidateOutcome::DuplicateSuppressed { existing_node } => {
            serde_json::json!({"existing_node": existing_node, "type": "duplicate_suppressed"})
        }
        CandidateOutcome::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
    }
}

fn dead_end_reason_to_json(r: DeadEndReason) -> serde_json::Value {
    match r {
        DeadEndReason::Exhaustive => serde_json::json!("exhaustive"),
        DeadEndReason::DepthLimited => serde_json::json!("depth_limited"),
    }
}

fn note_to_json(n: &ExpansionNote) -> serde_json::Value {
    match n {
        ExpansionNote::FrontierPruned { pruned_node_ids } => {
            serde_json::json!({"pruned_node_ids": pruned_node_ids, "type": "frontier_pruned"})
        }
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "dead_end_reason": n.dead_end_reason.map(dead_end_reason_to_json),
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "f_cost": n.f_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "policy": m.policy,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_dead_ends_depth_limited": m.total_dead_ends_depth_limited,
        "total_dead_ends_exhaustive": m.total_dead_ends_exhaustive,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "world_id": m.world_id,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
        TerminationReason::InternalPanic { stage } => {
            serde_json::json!({"stage": panic_stage_str(stage), "type": "internal_panic"})
        }
        TerminationReason::FrontierInvariantViolation => {
            serde_json::json!({"type": "frontier_invariant_violation"})
        }
    }
}

fn panic_stage_str(s: PanicStage) -> &'static str {
    match s {
        PanicStage::IsGoalRoot => "is_goal_root",
        PanicStage::IsGoalExpansion => "is_goal_expansion",
        PanicStage::Heuristic => "heuristic",
        PanicStage::Neighbours => "neighbours",
    }
}
