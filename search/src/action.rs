//! Actions and transitions.
//!
//! An [`Action`] is the typed label and cost of one move. A [`Transition`]
//! pairs an action with the state it leads to; problems return transitions
//! from [`crate::contract::Problem::expand`].

use crate::error::SearchError;

/// Path and step cost. Integer so that frontier ordering is total.
pub type Cost = i64;

/// A labelled, non-negative-cost move between two states.
///
/// Construct via [`Action::new`] or [`Action::unlabeled`]; both reject
/// negative costs, so every `Action` in existence has `cost >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    label: Option<String>,
    cost: Cost,
}

impl Action {
    /// Construct a labelled action.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeCost`] if `cost < 0`.
    pub fn new(label: impl Into<String>, cost: Cost) -> Result<Self, SearchError> {
        Self::build(Some(label.into()), cost)
    }

    /// Construct an action without a label.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeCost`] if `cost < 0`.
    pub fn unlabeled(cost: Cost) -> Result<Self, SearchError> {
        Self::build(None, cost)
    }

    fn build(label: Option<String>, cost: Cost) -> Result<Self, SearchError> {
        if cost < 0 {
            return Err(SearchError::NegativeCost { label, cost });
        }
        Ok(Self { label, cost })
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label} (cost={})", self.cost),
            None => write!(f, "(cost={})", self.cost),
        }
    }
}

/// One outgoing move: the action taken and the state it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub action: Action,
    pub to: S,
}

impl<S> Transition<S> {
    #[must_use]
    pub fn new(action: Action, to: S) -> Self {
        Self { action, to }
    }
}
