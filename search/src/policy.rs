//! Search policy: strategy, explored-set policy, and trace recording.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::explored::ExploredPolicy;
use crate::frontier::FrontierStrategy;

/// Search configuration.
///
/// Deserializable so it can sit in a TOML table:
///
/// ```toml
/// strategy = "astar"
/// explored = "relaxing"   # optional; defaults per strategy
/// record_trace = true     # optional; defaults to false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchPolicy {
    /// Frontier ordering.
    #[serde(default = "default_strategy")]
    pub strategy: FrontierStrategy,
    /// Explored-set override. `None` selects
    /// [`FrontierStrategy::default_explored_policy`].
    #[serde(default)]
    pub explored: Option<ExploredPolicy>,
    /// Record a per-expansion audit trace.
    #[serde(default)]
    pub record_trace: bool,
}

fn default_strategy() -> FrontierStrategy {
    FrontierStrategy::CostPlusHeuristicPriority
}

impl SearchPolicy {
    /// Policy for `strategy` with its default explored policy and no trace.
    #[must_use]
    pub fn new(strategy: FrontierStrategy) -> Self {
        Self {
            strategy,
            explored: None,
            record_trace: false,
        }
    }

    #[must_use]
    pub fn with_explored(mut self, explored: ExploredPolicy) -> Self {
        self.explored = Some(explored);
        self
    }

    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }

    /// The explored policy in effect after applying the strategy default.
    #[must_use]
    pub fn explored_policy(&self) -> ExploredPolicy {
        self.explored
            .unwrap_or_else(|| self.strategy.default_explored_policy())
    }

    /// Reject combinations the driver does not support.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] when `Relaxing` is paired
    /// with stack or queue ordering: relaxation re-queues a state because it
    /// got cheaper, which is meaningless when cost does not drive pop order.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.explored_policy() == ExploredPolicy::Relaxing && !self.strategy.is_prioritized() {
            return Err(SearchError::UnsupportedPolicy {
                detail: format!(
                    "explored policy `relaxing` requires a prioritized frontier, got `{}`",
                    self.strategy
                ),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(default_strategy())
    }
}
