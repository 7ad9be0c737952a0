//! Strategy-selectable frontier.
//!
//! One [`Frontier`] type serves all five algorithms. The strategy chooses the
//! backing store (LIFO stack, FIFO queue, or min-heap) and how the priority
//! key is derived from a path's cost and heuristic estimate. Every entry
//! carries a monotonically increasing insertion order, so equal priorities
//! always pop first-inserted first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::action::Cost;
use crate::explored::ExploredPolicy;
use crate::path::PathId;

/// Frontier ordering policy. Each variant realizes one named algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrontierStrategy {
    /// LIFO: depth-first search.
    #[serde(rename = "dfs")]
    Stack,
    /// FIFO: breadth-first search.
    #[serde(rename = "bfs")]
    Queue,
    /// Min `g`: uniform-cost search / Dijkstra.
    #[serde(rename = "ucs")]
    CostPriority,
    /// Min `h`: greedy best-first search.
    #[serde(rename = "greedy")]
    HeuristicPriority,
    /// Min `g + h`: A* search.
    #[serde(rename = "astar")]
    CostPlusHeuristicPriority,
}

impl FrontierStrategy {
    /// All strategies in declaration order.
    pub const ALL: [FrontierStrategy; 5] = [
        Self::Stack,
        Self::Queue,
        Self::CostPriority,
        Self::HeuristicPriority,
        Self::CostPlusHeuristicPriority,
    ];

    /// Short name used in config files, the CLI, and traces.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Stack => "dfs",
            Self::Queue => "bfs",
            Self::CostPriority => "ucs",
            Self::HeuristicPriority => "greedy",
            Self::CostPlusHeuristicPriority => "astar",
        }
    }

    /// Human-readable algorithm name.
    #[must_use]
    pub fn algorithm(self) -> &'static str {
        match self {
            Self::Stack => "Depth-first search",
            Self::Queue => "Breadth-first search",
            Self::CostPriority => "Uniform-cost search",
            Self::HeuristicPriority => "Greedy best-first search",
            Self::CostPlusHeuristicPriority => "A* search",
        }
    }

    /// Whether the priority key reads the problem heuristic.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(
            self,
            Self::HeuristicPriority | Self::CostPlusHeuristicPriority
        )
    }

    /// Whether the frontier is ordered by a priority key at all.
    #[must_use]
    pub fn is_prioritized(self) -> bool {
        !matches!(self, Self::Stack | Self::Queue)
    }

    /// Explored-set policy used when the search policy does not override it.
    #[must_use]
    pub fn default_explored_policy(self) -> ExploredPolicy {
        match self {
            Self::CostPlusHeuristicPriority => ExploredPolicy::Relaxing,
            _ => ExploredPolicy::FirstVisit,
        }
    }

    /// Priority key for a path with cumulative cost `cost`.
    ///
    /// `heuristic` is only called for strategies that read it. Stack and
    /// queue ignore the key entirely; it is reported as the path cost.
    pub fn priority(self, cost: Cost, heuristic: impl FnOnce() -> Cost) -> Cost {
        if !self.uses_heuristic() {
            return cost;
        }
        let estimate = heuristic();
        match self {
            Self::HeuristicPriority => estimate,
            _ => cost.saturating_add(estimate),
        }
    }
}

impl std::fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy {
    pub name: String,
}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected dfs, bfs, ucs, dijkstra, greedy, astar)",
            self.name
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for FrontierStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "stack" => Ok(Self::Stack),
            "bfs" | "queue" => Ok(Self::Queue),
            "ucs" | "dijkstra" => Ok(Self::CostPriority),
            "greedy" | "gbfs" => Ok(Self::HeuristicPriority),
            "astar" | "a*" => Ok(Self::CostPlusHeuristicPriority),
            _ => Err(UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// The frontier ordering key: `(priority, insertion_order)`.
///
/// Lower priority first, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: Cost,
    pub insertion_order: u64,
}

/// A path handle with the key it was pushed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub key: FrontierKey,
    pub path: PathId,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.path.cmp(&other.path))
    }
}

#[derive(Debug)]
enum Store {
    Lifo(Vec<FrontierEntry>),
    Fifo(VecDeque<FrontierEntry>),
    // BinaryHeap is a max-heap; Reverse gives lowest key first.
    MinHeap(BinaryHeap<Reverse<FrontierEntry>>),
}

/// Frontier of paths awaiting expansion.
#[derive(Debug)]
pub struct Frontier {
    strategy: FrontierStrategy,
    store: Store,
    next_insertion: u64,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier for `strategy`.
    #[must_use]
    pub fn new(strategy: FrontierStrategy) -> Self {
        let store = match strategy {
            FrontierStrategy::Stack => Store::Lifo(Vec::new()),
            FrontierStrategy::Queue => Store::Fifo(VecDeque::new()),
            FrontierStrategy::CostPriority
            | FrontierStrategy::HeuristicPriority
            | FrontierStrategy::CostPlusHeuristicPriority => Store::MinHeap(BinaryHeap::new()),
        };
        Self {
            strategy,
            store,
            next_insertion: 0,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> FrontierStrategy {
        self.strategy
    }

    /// Push a path under `priority` (ignored by stack and queue ordering).
    pub fn push(&mut self, path: PathId, priority: Cost) {
        let entry = FrontierEntry {
            key: FrontierKey {
                priority,
                insertion_order: self.next_insertion,
            },
            path,
        };
        self.next_insertion += 1;
        match &mut self.store {
            Store::Lifo(v) => v.push(entry),
            Store::Fifo(q) => q.push_back(entry),
            Store::MinHeap(h) => h.push(Reverse(entry)),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Pop the best entry under the active ordering.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match &mut self.store {
            Store::Lifo(v) => v.pop(),
            Store::Fifo(q) => q.pop_front(),
            Store::MinHeap(h) => h.pop().map(|Reverse(e)| e),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Lifo(v) => v.len(),
            Store::Fifo(q) => q.len(),
            Store::MinHeap(h) => h.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total number of pushes so far.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_insertion
    }
}
