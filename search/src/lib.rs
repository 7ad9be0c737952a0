//! Wayfinder Search: generic state-space search with strategy-selectable
//! frontiers.
//!
//! One driver loop serves depth-first, breadth-first, uniform-cost, greedy
//! best-first and A* search. A problem supplies its start state, goal test,
//! successor function and (optionally) a heuristic through the
//! [`Problem`](contract::Problem) trait; the driver never looks inside a
//! state beyond `Eq + Hash`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_kernel  ←  wayfinder_search  ←  wayfinder_harness
//! (canon, hashing)     (frontier, driver)    (worlds, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Problem`](contract::Problem): problem contract
//! - [`Frontier`](frontier::Frontier): stack, queue or min-heap, keyed by
//!   `(priority, insertion_order)`
//! - [`ExploredSet`](explored::ExploredSet): first-visit, relaxing or
//!   ancestor-check duplicate handling
//! - [`PathArena`](path::PathArena): shared-prefix path storage
//! - [`Searcher`](search::Searcher): resumable driver, yields successive
//!   solutions
//! - [`SearchTrace`](trace::SearchTrace): expansion-event audit log

#![forbid(unsafe_code)]

pub mod action;
pub mod contract;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod path;
pub mod policy;
pub mod search;
pub mod trace;

pub use action::{Action, Cost, Transition};
pub use contract::Problem;
pub use error::SearchError;
pub use explored::ExploredPolicy;
pub use frontier::FrontierStrategy;
pub use path::{Solution, Step};
pub use policy::SearchPolicy;
pub use search::{search, search_with_policy, SearchOutcome, SearchStats, SearchStatus, Searcher};
