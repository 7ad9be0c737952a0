//! Search problem contract trait.

use std::fmt;
use std::hash::Hash;

use crate::action::{Cost, Transition};

/// Trait for problems the driver can search.
///
/// A problem is a static definition: it is never mutated by a search, and one
/// problem value may be searched any number of times with different
/// strategies.
///
/// # Contract
///
/// - `expand` must be deterministic: same state → same transitions in the
///   same order. DFS/BFS tie-breaking depends on this order.
/// - A state with no legal moves yields an empty vector, not an error.
/// - `heuristic` must be non-negative. It is *not* required to be
///   admissible; an overestimating heuristic silently costs A* its
///   optimality guarantee but never breaks termination.
pub trait Problem {
    /// One configuration of the problem domain.
    ///
    /// `Display` is used for logging and the audit trace.
    type State: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Stable identifier echoed in traces and reports.
    fn problem_id(&self) -> &str;

    /// The fixed initial configuration.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All legal transitions out of `state`, in deterministic order.
    fn expand(&self, state: &Self::State) -> Vec<Transition<Self::State>>;

    /// Estimated remaining cost from `state` to a goal. Zero when the problem
    /// has no estimate, which reduces A* to uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0
    }
}
