//! `SearchTrace`: per-expansion audit log.
//!
//! The decision surface is the ordered list of [`ExpandEvent`]s: which path
//! was popped under which key, and what happened to every child it generated.
//! Metadata echoes the policy and the counters at the time the trace was
//! taken. Two searches with identical inputs produce byte-identical
//! canonical JSON.

use wayfinder_kernel::digest::canon::{canonical_json_bytes, CanonError};
use wayfinder_kernel::digest::hash::{canonical_hash, ContentHash, HashDomain};

use crate::action::Cost;
use crate::explored::ExploredPolicy;
use crate::frontier::{FrontierKey, FrontierStrategy};
use crate::search::SearchStats;

/// The complete audit trail of one searcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Goal paths reported so far, in order.
    pub goals: Vec<GoalEvent>,
    pub metadata: TraceMetadata,
}

/// A single frontier-pop + expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// Arena index of the expanded path.
    pub path_id: u64,
    /// Rendered state.
    pub state: String,
    /// Cumulative cost of the expanded path.
    pub cost: Cost,
    /// Frontier key at pop time.
    pub pop_key: FrontierKey,
    /// Outcome of every generated child, in `expand` order.
    pub children: Vec<ChildRecord>,
}

/// A generated child and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    pub action: Option<String>,
    pub state: String,
    pub cost: Cost,
    pub outcome: ChildOutcome,
}

/// Outcome of one generated child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Queued as a new path.
    Pushed { path_id: u64 },
    /// Queued because it strictly improved the recorded cost.
    Relaxed { path_id: u64, previous_cost: Cost },
    /// State already closed, or not cheaper than the recorded cost.
    DuplicateSuppressed,
    /// State already on the child's own ancestor chain.
    CycleSuppressed,
}

/// A goal path reported by the searcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEvent {
    pub path_id: u64,
    pub state: String,
    pub cost: Cost,
    /// Expansions completed before the goal was popped.
    pub after_expansions: u64,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceMetadata {
    pub problem_id: String,
    pub strategy: FrontierStrategy,
    pub explored_policy: ExploredPolicy,
    pub root_state: String,
    pub termination: Option<TerminationReason>,
    pub stats: SearchStats,
}

/// Why the searcher last stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal path was popped.
    GoalReached { path_id: u64 },
    /// The frontier emptied.
    FrontierExhausted,
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchTrace {
    /// Serialize to canonical JSON bytes.
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
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "goals": self.goals.iter().map(goal_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children.iter().map(child_to_json).collect::<Vec<_>>(),
        "cost": e.cost,
        "expansion_order": e.expansion_order,
        "path_id": e.path_id,
        "pop_key": {
            "insertion_order": e.pop_key.insertion_order,
            "priority": e.pop_key.priority,
        },
        "state": e.state,
    })
}

fn child_to_json(c: &ChildRecord) -> serde_json::Value {
    serde_json::json!({
        "action": c.action,
        "cost": c.cost,
        "outcome": outcome_to_json(c.outcome),
        "state": c.state,
    })
}

fn outcome_to_json(o: ChildOutcome) -> serde_json::Value {
    match o {
        ChildOutcome::Pushed { path_id } => {
            serde_json::json!({"path_id": path_id, "type": "pushed"})
        }
        ChildOutcome::Relaxed {
            path_id,
            previous_cost,
        } => {
            serde_json::json!({
                "path_id": path_id,
                "previous_cost": previous_cost,
                "type": "relaxed",
            })
        }
        ChildOutcome::DuplicateSuppressed => serde_json::json!({"type": "duplicate_suppressed"}),
        ChildOutcome::CycleSuppressed => serde_json::json!({"type": "cycle_suppressed"}),
    }
}

fn goal_to_json(g: &GoalEvent) -> serde_json::Value {
    serde_json::json!({
        "after_expansions": g.after_expansions,
        "cost": g.cost,
        "path_id": g.path_id,
        "state": g.state,
    })
}

fn termination_to_json(t: Option<TerminationReason>) -> serde_json::Value {
    match t {
        None => serde_json::Value::Null,
        Some(TerminationReason::GoalReached { path_id }) => {
            serde_json::json!({"path_id": path_id, "type": "goal_reached"})
        }
        Some(TerminationReason::FrontierExhausted) => {
            serde_json::json!({"type": "frontier_exhausted"})
        }
    }
}

fn metadata_to_json(m: &TraceMetadata) -> serde_json::Value {
    serde_json::json!({
        "explored_policy": m.explored_policy.name(),
        "problem_id": m.problem_id,
        "root_state": m.root_state,
        "stats": m.stats.to_json_value(),
        "strategy": m.strategy.name(),
        "termination": termination_to_json(m.termination),
    })
}
