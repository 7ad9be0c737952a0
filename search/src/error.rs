//! Typed search errors.
//!
//! `SearchError` covers construction and pre-flight failures only. Running
//! out of frontier is a normal terminal outcome expressed via
//! [`crate::search::SearchStatus::Exhausted`], never an error.

use crate::action::Cost;

/// Typed failure for action construction and policy validation.
///
/// These errors are returned before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An action or edge was constructed with a negative cost.
    NegativeCost { label: Option<String>, cost: Cost },
    /// A policy combination that the driver does not support.
    UnsupportedPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCost {
                label: Some(label),
                cost,
            } => write!(f, "cost cannot be negative: {label} (cost={cost})"),
            Self::NegativeCost { label: None, cost } => {
                write!(f, "cost cannot be negative (cost={cost})")
            }
            Self::UnsupportedPolicy { detail } => write!(f, "unsupported search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
