//! Search entry point and expansion loop.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, trace, warn};
use waypoint_kernel::{Node, State};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{
    CandidateOutcome, CandidateRecord, DeadEndReason, ExpandEvent, ExpansionNote, FrontierPopKey,
    NodeSummary, PanicStage, SearchGraph, SearchGraphMetadata, TerminationReason,
};
use crate::node::SearchNode;
use crate::policy::{DedupPolicy, SearchPolicy, SearchStrategy};

/// Result of a search execution.
///
/// Always contains a complete `SearchGraph` audit trail regardless of how
/// the search terminated. Check [`SearchResult::is_goal_reached`] or inspect
/// `graph.metadata.termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult<N: Node> {
    /// The goal state, carrying the path that reached it.
    pub goal: Option<State<N>>,
    /// The complete search graph audit trail.
    pub graph: SearchGraph,
}

impl<N: Node> SearchResult<N> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// The labels of the moves from the root to the goal, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<N::Label>> {
        self.goal
            .as_ref()
            .map(|state| state.path().labels().cloned().collect())
    }

    /// Number of search nodes created, root included.
    #[must_use]
    pub fn nodes_created(&self) -> usize {
        self.graph.node_summaries.len()
    }
}

/// Running totals folded into the graph metadata.
#[derive(Debug, Default)]
struct Counters {
    candidates_generated: u64,
    duplicates_suppressed: u64,
    dead_ends_exhaustive: u64,
    dead_ends_depth_limited: u64,
}

/// Run `f`, converting a panic into `Err(stage)`.
fn guarded<T>(stage: PanicStage, f: impl FnOnce() -> T) -> Result<T, PanicStage> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|_| {
        warn!("caught panic in search callback at stage {stage:?}");
        stage
    })
}

/// Run a search from `root` over `world` under `policy`.
///
/// Successors come from [`State::successors`], so the kernel's
/// no-immediate-reversal rule always applies. With
/// [`DedupPolicy::Visited`] a first-seen-wins visited set additionally
/// suppresses every node seen before.
///
/// All runtime terminations (goal, exhaustion, budget, caught panics)
/// return `Ok(SearchResult)` with the audit trail preserved.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No `SearchGraph` is produced in that case.
#[allow(clippy::too_many_lines)]
pub fn search<W: SearchWorld>(
    root: W::Node,
    world: &W,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::Node>, SearchError> {
    policy.validate()?;
    debug!(
        "search {}: strategy={} dedup={} max_expansions={} max_depth={}",
        world.world_id(),
        policy.strategy.as_str(),
        policy.dedup.as_str(),
        policy.max_expansions,
        policy.max_depth
    );

    let best_first = policy.strategy == SearchStrategy::BestFirst;
    let heuristic = |node: &W::Node| -> Result<i64, PanicStage> {
        if best_first {
            guarded(PanicStage::Heuristic, || world.heuristic(node))
        } else {
            Ok(0)
        }
    };

    let max_frontier_size = usize::try_from(policy.max_frontier_size).unwrap_or(usize::MAX);
    let mut frontier: Frontier<W::Node> = Frontier::new(policy.strategy);
    let mut visited: HashMap<W::Node, u64> = HashMap::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut summaries: Vec<NodeSummary> = Vec::new();
    let mut counters = Counters::default();
    let mut next_creation_order: u64 = 0;
    let mut expansion_count: u64 = 0;
    let mut goal: Option<State<W::Node>> = None;

    let root_state = State::root(root);
    let root_h = heuristic(root_state.node());
    let root_is_goal = root_h.and_then(|_| {
        guarded(PanicStage::IsGoalRoot, || world.is_goal(root_state.node()))
    });
    let root_node = SearchNode {
        node_id: 0,
        parent_id: None,
        state: root_state,
        depth: 0,
        g_cost: 0,
        h_cost: root_h.unwrap_or(0),
        creation_order: next_creation_order,
    };
    next_creation_order += 1;
    summaries.push(NodeSummary {
        node_id: 0,
        parent_id: None,
        depth: 0,
        f_cost: root_node.f_cost(),
        is_goal: false,
        dead_end_reason: None,
        expansion_order: None,
    });

    let termination_reason = match root_is_goal {
        Ok(true) => {
            goal = Some(root_node.state.clone());
            TerminationReason::GoalReached { node_id: 0 }
        }
        Err(stage) => TerminationReason::InternalPanic { stage },
        Ok(false) => {
            if policy.dedup == DedupPolicy::Visited {
                visited.insert(root_node.state.node().clone(), 0);
            }
            frontier.push(root_node);

            loop {
                if frontier.is_empty() {
                    break TerminationReason::FrontierExhausted;
                }
                if expansion_count >= policy.max_expansions {
                    break TerminationReason::ExpansionBudgetExceeded;
                }
                let Some(current) = frontier.pop() else {
                    break TerminationReason::FrontierInvariantViolation;
                };
                let pop_key = FrontierPopKey {
                    f_cost: current.f_cost(),
                    depth: current.depth,
                    creation_order: current.creation_order,
                };
                let mut event = ExpandEvent {
                    expansion_order: expansion_count,
                    node_id: current.node_id,
                    frontier_pop_key: pop_key,
                    candidates: Vec::new(),
                    dead_end_reason: None,
                    notes: Vec::new(),
                };

                let successors =
                    match guarded(PanicStage::Neighbours, || current.state.successors()) {
                        Ok(successors) => successors,
                        Err(stage) => {
                            expansions.push(event);
                            break TerminationReason::InternalPanic { stage };
                        }
                    };
                counters.candidates_generated += successors.len() as u64;

                let mut children_created = 0u64;
                let mut depth_limited = false;
                let mut found_goal: Option<u64> = None;
                let mut panic_stage: Option<PanicStage> = None;

                for (index, successor) in successors.into_iter().enumerate() {
                    let label = successor
                        .path()
                        .last()
                        .map(|edge| format!("{:?}", edge.label()))
                        .unwrap_or_default();
                    let mut record = |outcome| {
                        event.candidates.push(CandidateRecord {
                            index: index as u64,
                            label: label.clone(),
                            outcome,
                        });
                    };

                    if current.depth >= policy.max_depth {
                        record(CandidateOutcome::SkippedByDepthLimit);
                        depth_limited = true;
                        continue;
                    }

                    if policy.dedup == DedupPolicy::Visited {
                        if let Some(&existing_node) = visited.get(successor.node()) {
                            counters.duplicates_suppressed += 1;
                            record(CandidateOutcome::DuplicateSuppressed { existing_node });
                            continue;
                        }
                    }

                    let h_cost = match heuristic(successor.node()) {
                        Ok(h) => h,
                        Err(stage) => {
                            panic_stage = Some(stage);
                            break;
                        }
                    };
                    let is_goal = match guarded(PanicStage::IsGoalExpansion, || {
                        world.is_goal(successor.node())
                    }) {
                        Ok(is_goal) => is_goal,
                        Err(stage) => {
                            panic_stage = Some(stage);
                            break;
                        }
                    };

                    let node_id = summaries.len() as u64;
                    let child = SearchNode {
                        node_id,
                        parent_id: Some(current.node_id),
                        state: successor,
                        depth: current.depth + 1,
                        g_cost: current.g_cost + 1,
                        h_cost,
                        creation_order: next_creation_order,
                    };
                    next_creation_order += 1;

                    summaries.push(NodeSummary {
                        node_id,
                        parent_id: child.parent_id,
                        depth: child.depth,
                        f_cost: child.f_cost(),
                        is_goal: false,
                        dead_end_reason: None,
                        expansion_order: None,
                    });
                    record(CandidateOutcome::Applied { to_node: node_id });

                    if policy.dedup == DedupPolicy::Visited {
                        visited.insert(child.state.node().clone(), node_id);
                    }
                    if is_goal && found_goal.is_none() {
                        found_goal = Some(node_id);
                        goal = Some(child.state.clone());
                    }
                    frontier.push(child);
                    children_created += 1;
                }

                if let Some(stage) = panic_stage {
                    expansions.push(event);
                    break TerminationReason::InternalPanic { stage };
                }

                if children_created == 0 {
                    let reason = if depth_limited {
                        counters.dead_ends_depth_limited += 1;
                        DeadEndReason::DepthLimited
                    } else {
                        counters.dead_ends_exhaustive += 1;
                        DeadEndReason::Exhaustive
                    };
                    event.dead_end_reason = Some(reason);
                }

                if frontier.len() > max_frontier_size {
                    let pruned_node_ids = frontier.prune_to(max_frontier_size);
                    if !pruned_node_ids.is_empty() {
                        trace!("pruned {} frontier nodes", pruned_node_ids.len());
                        event
                            .notes
                            .push(ExpansionNote::FrontierPruned { pruned_node_ids });
                    }
                }

                if let Some(summary) = usize::try_from(current.node_id)
                    .ok()
                    .and_then(|i| summaries.get_mut(i))
                {
                    summary.expansion_order = Some(expansion_count);
                    summary.dead_end_reason = event.dead_end_reason;
                }
                trace!(
                    "expansion {}: node {} depth {} -> {} children, frontier {}",
                    expansion_count,
                    current.node_id,
                    current.depth,
                    children_created,
                    frontier.len()
                );
                expansions.push(event);
                expansion_count += 1;

                if let Some(node_id) = found_goal {
                    break TerminationReason::GoalReached { node_id };
                }
            }
        }
    };

    if let TerminationReason::GoalReached { node_id } = termination_reason {
        if let Some(summary) = usize::try_from(node_id)
            .ok()
            .and_then(|i| summaries.get_mut(i))
        {
            summary.is_goal = true;
        }
    }

    debug!(
        "search {} terminated: {:?} after {} expansions, {} nodes",
        world.world_id(),
        termination_reason,
        expansions.len(),
        summaries.len()
    );

    let graph = SearchGraph {
        metadata: SearchGraphMetadata {
            world_id: world.world_id().to_string(),
            policy: policy.to_json_value(),
            total_expansions: expansions.len() as u64,
            total_candidates_generated: counters.candidates_generated,
            total_duplicates_suppressed: counters.duplicates_suppressed,
            total_dead_ends_exhaustive: counters.dead_ends_exhaustive,
            total_dead_ends_depth_limited: counters.dead_ends_depth_limited,
            termination_reason,
            frontier_high_water: frontier.high_water(),
        },
        expansions,
        node_summaries: summaries,
    };

    Ok(SearchResult { goal, graph })
}
