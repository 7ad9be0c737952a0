//! Explored set: which states may be expanded, and which children may be
//! queued.
//!
//! One map from state to cost serves both graph-search policies. Under
//! [`ExploredPolicy::FirstVisit`] it holds closed states (the cost they were
//! closed at is informational). Under [`ExploredPolicy::Relaxing`] it holds
//! the best cost at which each state has been reached so far, and a child is
//! admitted only when it strictly improves on that cost.

use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::Cost;

/// Duplicate/cycle handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploredPolicy {
    /// A state is closed when first expanded and never expanded again.
    FirstVisit,
    /// A state may be re-queued when reached at a strictly lower cost.
    Relaxing,
    /// Tree search: a child is suppressed only when its state already lies
    /// on its own ancestor chain. Enumerates every acyclic path.
    AncestorCheck,
}

impl ExploredPolicy {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstVisit => "first_visit",
            Self::Relaxing => "relaxing",
            Self::AncestorCheck => "ancestor_check",
        }
    }
}

impl std::fmt::Display for ExploredPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized explored-policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExploredPolicy {
    pub name: String,
}

impl std::fmt::Display for UnknownExploredPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown explored policy {:?} (expected first_visit, relaxing, ancestor_check)",
            self.name
        )
    }
}

impl std::error::Error for UnknownExploredPolicy {}

impl FromStr for ExploredPolicy {
    type Err = UnknownExploredPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "first_visit" | "graph" => Ok(Self::FirstVisit),
            "relaxing" => Ok(Self::Relaxing),
            "ancestor_check" | "tree" => Ok(Self::AncestorCheck),
            _ => Err(UnknownExploredPolicy {
                name: s.to_string(),
            }),
        }
    }
}

/// What the driver should do with a path it just popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopDecision {
    /// Goal-test and expand it.
    Open,
    /// Its state was already closed (`FirstVisit`).
    AlreadyClosed,
    /// A cheaper path to its state was recorded after this one was queued
    /// (`Relaxing`).
    Stale,
}

/// Whether a generated child may be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildDecision {
    /// First time this state is reached.
    Admit,
    /// Reached before, but this path is strictly cheaper.
    Relax { previous: Cost },
    /// Already closed, or not an improvement.
    Suppress,
}

/// Per-search explored set.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    policy: ExploredPolicy,
    costs: HashMap<S, Cost>,
}

impl<S: Clone + Eq + Hash> ExploredSet<S> {
    #[must_use]
    pub fn new(policy: ExploredPolicy) -> Self {
        Self {
            policy,
            costs: HashMap::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> ExploredPolicy {
        self.policy
    }

    /// Record the root state. Under `Relaxing` this seeds the best cost.
    pub fn seed(&mut self, state: &S, cost: Cost) {
        if self.policy == ExploredPolicy::Relaxing {
            self.costs.insert(state.clone(), cost);
        }
    }

    /// Decide whether a popped path at `cost` should be processed.
    #[must_use]
    pub fn on_pop(&self, state: &S, cost: Cost) -> PopDecision {
        match self.policy {
            ExploredPolicy::FirstVisit if self.costs.contains_key(state) => {
                PopDecision::AlreadyClosed
            }
            ExploredPolicy::Relaxing => match self.cost_of(state) {
                Some(best) if best < cost => PopDecision::Stale,
                _ => PopDecision::Open,
            },
            _ => PopDecision::Open,
        }
    }

    /// Mark `state` explored at `cost`.
    pub fn close(&mut self, state: &S, cost: Cost) {
        match self.policy {
            ExploredPolicy::FirstVisit => {
                self.costs.entry(state.clone()).or_insert(cost);
            }
            ExploredPolicy::Relaxing => {
                self.costs
                    .entry(state.clone())
                    .and_modify(|best| *best = (*best).min(cost))
                    .or_insert(cost);
            }
            ExploredPolicy::AncestorCheck => {}
        }
    }

    /// Decide whether a child reaching `state` at `cost` may be queued.
    ///
    /// Under `Relaxing`, an admitted or relaxed child updates the recorded
    /// best cost immediately, so later equal-cost duplicates are suppressed.
    pub fn admit(&mut self, state: &S, cost: Cost) -> ChildDecision {
        match self.policy {
            ExploredPolicy::FirstVisit => {
                if self.costs.contains_key(state) {
                    ChildDecision::Suppress
                } else {
                    ChildDecision::Admit
                }
            }
            ExploredPolicy::Relaxing => match self.cost_of(state) {
                None => {
                    self.costs.insert(state.clone(), cost);
                    ChildDecision::Admit
                }
                Some(previous) if cost < previous => {
                    self.costs.insert(state.clone(), cost);
                    ChildDecision::Relax { previous }
                }
                Some(_) => ChildDecision::Suppress,
            },
            ExploredPolicy::AncestorCheck => ChildDecision::Admit,
        }
    }

    /// Recorded cost for `state`, if any.
    #[must_use]
    pub fn cost_of(&self, state: &S) -> Option<Cost> {
        self.costs.get(state).copied()
    }
}
