//! Path arena and solution reconstruction.
//!
//! Every path the driver creates is a record in a [`PathArena`], linked to its
//! predecessor by [`PathId`]. Many children may share one predecessor; records
//! are never mutated after insertion, so shared ancestry is read-only.

use wayfinder_kernel::digest::canon::{canonical_json_bytes, CanonError};
use wayfinder_kernel::digest::hash::{canonical_hash, ContentHash, HashDomain};

use crate::action::{Action, Cost};

/// Handle to a path record in a [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(usize);

impl PathId {
    /// Position of the record in its arena (also its creation order).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the implicit search tree.
#[derive(Debug, Clone)]
pub struct PathNode<S> {
    /// State reached by this path.
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<Action>,
    /// Predecessor handle (`None` for root).
    pub parent: Option<PathId>,
    /// Cumulative path cost: 0 at the root, `parent.cost + action.cost` below.
    pub cost: Cost,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// Append-only store of path records.
#[derive(Debug, Clone)]
pub struct PathArena<S> {
    nodes: Vec<PathNode<S>>,
}

impl<S> PathArena<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a root record (cost 0, depth 0, no action).
    pub fn root(&mut self, state: S) -> PathId {
        self.insert(PathNode {
            state,
            action: None,
            parent: None,
            cost: 0,
            depth: 0,
        })
    }

    /// Insert a child of `parent` reached via `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn extend(&mut self, parent: PathId, action: Action, state: S) -> PathId {
        let (cost, depth) = {
            let p = &self.nodes[parent.0];
            (p.cost.saturating_add(action.cost()), p.depth + 1)
        };
        self.insert(PathNode {
            state,
            action: Some(action),
            parent: Some(parent),
            cost,
            depth,
        })
    }

    fn insert(&mut self, node: PathNode<S>) -> PathId {
        let id = PathId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a record.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: PathId) -> &PathNode<S> {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the chain from `id` back to the root (inclusive on both ends).
    pub fn ancestors(&self, id: PathId) -> Ancestors<'_, S> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

impl<S: PartialEq> PathArena<S> {
    /// Whether `state` appears anywhere on the chain from `id` to the root.
    #[must_use]
    pub fn chain_contains(&self, id: PathId, state: &S) -> bool {
        self.ancestors(id).any(|node| node.state == *state)
    }
}

impl<S: Clone> PathArena<S> {
    /// Walk predecessor links from `id` and return the ordered solution.
    ///
    /// Iterative: depth of the walk never touches the call stack.
    #[must_use]
    pub fn reconstruct(&self, id: PathId) -> Solution<S> {
        let total_cost = self.get(id).cost;
        let mut steps: Vec<Step<S>> = self
            .ancestors(id)
            .map(|node| Step {
                state: node.state.clone(),
                action: node.action.clone(),
            })
            .collect();
        steps.reverse();
        Solution { steps, total_cost }
    }
}

impl<S> Default for PathArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a path's records from leaf to root.
pub struct Ancestors<'a, S> {
    arena: &'a PathArena<S>,
    next: Option<PathId>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a PathNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id);
        self.next = node.parent;
        Some(node)
    }
}

/// One step of a reconstructed solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    pub state: S,
    /// The action that led to `state` (`None` for the start step).
    pub action: Option<Action>,
}

/// An ordered start-to-goal solution with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    /// Steps from the start state (first) to the goal state (last).
    pub steps: Vec<Step<S>>,
    pub total_cost: Cost,
}

impl<S> Solution<S> {
    /// Number of actions taken (0 when the start state is the goal).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// States visited, start first.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|s| &s.state)
    }

    /// Actions taken, in order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.steps.iter().filter_map(|s| s.action.as_ref())
    }

    /// Labels of the actions taken; unlabeled actions render as `""`.
    #[must_use]
    pub fn action_labels(&self) -> Vec<&str> {
        self.actions().map(|a| a.label().unwrap_or("")).collect()
    }

    #[must_use]
    pub fn start(&self) -> Option<&S> {
        self.steps.first().map(|s| &s.state)
    }

    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        self.steps.last().map(|s| &s.state)
    }
}

impl<S: std::fmt::Display> Solution<S> {
    /// JSON form used for canonical bytes and reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "move_count": self.move_count(),
            "steps": self.steps.iter().map(|s| serde_json::json!({
                "action": s.action.as_ref().and_then(Action::label),
                "action_cost": s.action.as_ref().map(Action::cost),
                "state": s.state.to_string(),
            })).collect::<Vec<_>>(),
            "total_cost": self.total_cost,
        })
    }

    /// Canonical JSON bytes of this solution.
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
        Ok(canonical_hash(HashDomain::Solution, &bytes))
    }
}

impl<S: std::fmt::Display> std::fmt::Display for Solution<S> {
    /// `A -> C -> B -> D (Total cost: 3)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", step.state)?;
        }
        write!(f, " (Total cost: {})", self.total_cost)
    }
}
