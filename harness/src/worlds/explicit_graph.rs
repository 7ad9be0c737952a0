//! `ExplicitGraph`: a problem defined by a fixed node and edge list.
//!
//! Successors of a node are its outgoing edges in the order they were added.
//! The node set is informational: edges may name nodes that were never
//! declared, and those nodes are added implicitly.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use wayfinder_search::action::{Action, Cost, Transition};
use wayfinder_search::contract::Problem;
use wayfinder_search::error::SearchError;

/// A directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    action: Action,
}

impl Edge {
    /// Edge labelled `from->to`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeCost`] if `cost < 0`.
    pub fn new(from: &str, to: &str, cost: Cost) -> Result<Self, SearchError> {
        Self::labelled(from, to, cost, &format!("{from}->{to}"))
    }

    /// Edge with an explicit action label.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NegativeCost`] if `cost < 0`.
    pub fn labelled(from: &str, to: &str, cost: Cost, label: &str) -> Result<Self, SearchError> {
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            action: Action::new(label, cost)?,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.to
    }

    #[must_use]
    pub fn cost(&self) -> Cost {
        self.action.cost()
    }

    #[must_use]
    pub fn action(&self) -> &Action {
        &self.action
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (cost={})", self.from, self.to, self.cost())
    }
}

/// Failure building an [`ExplicitGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge carried a negative cost.
    Edge(SearchError),
    /// A heuristic table entry was negative.
    NegativeHeuristic { node: String, value: Cost },
    /// The goal set was empty.
    NoGoals,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edge(e) => write!(f, "invalid edge: {e}"),
            Self::NegativeHeuristic { node, value } => {
                write!(f, "heuristic for {node} cannot be negative: {value}")
            }
            Self::NoGoals => write!(f, "graph has no goal nodes"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<SearchError> for GraphError {
    fn from(e: SearchError) -> Self {
        Self::Edge(e)
    }
}

/// Search problem over an explicit edge list.
#[derive(Debug, Clone)]
pub struct ExplicitGraph {
    title: String,
    nodes: BTreeSet<String>,
    edges: Vec<Edge>,
    outgoing: HashMap<String, Vec<usize>>,
    start: String,
    goals: BTreeSet<String>,
    heuristic: BTreeMap<String, Cost>,
}

impl ExplicitGraph {
    /// Build a graph from its edges, start node and goal set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoGoals`] if `goals` is empty.
    pub fn new(
        title: &str,
        edges: Vec<Edge>,
        start: &str,
        goals: &[&str],
    ) -> Result<Self, GraphError> {
        if goals.is_empty() {
            return Err(GraphError::NoGoals);
        }
        let mut nodes: BTreeSet<String> = BTreeSet::new();
        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, edge) in edges.iter().enumerate() {
            nodes.insert(edge.from.clone());
            nodes.insert(edge.to.clone());
            outgoing.entry(edge.from.clone()).or_default().push(i);
        }
        nodes.insert(start.to_string());
        let goals: BTreeSet<String> = goals.iter().map(|g| (*g).to_string()).collect();
        nodes.extend(goals.iter().cloned());
        Ok(Self {
            title: title.to_string(),
            nodes,
            edges,
            outgoing,
            start: start.to_string(),
            goals,
            heuristic: BTreeMap::new(),
        })
    }

    /// Declare nodes with no edges (isolated nodes are otherwise invisible).
    #[must_use]
    pub fn with_nodes(mut self, nodes: &[&str]) -> Self {
        self.nodes.extend(nodes.iter().map(|n| (*n).to_string()));
        self
    }

    /// Attach a heuristic table. Nodes missing from the table estimate 0.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NegativeHeuristic`] for any negative entry.
    pub fn with_heuristic<I, K>(mut self, table: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (K, Cost)>,
        K: Into<String>,
    {
        for (node, value) in table {
            let node = node.into();
            if value < 0 {
                return Err(GraphError::NegativeHeuristic { node, value });
            }
            self.heuristic.insert(node, value);
        }
        Ok(self)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn goals(&self) -> &BTreeSet<String> {
        &self.goals
    }

    /// JSON description used as a report input.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "edges": self.edges.iter().map(|e| serde_json::json!({
                "cost": e.cost(),
                "from": e.from,
                "label": e.action.label(),
                "to": e.to,
            })).collect::<Vec<_>>(),
            "goals": self.goals.iter().collect::<Vec<_>>(),
            "heuristic": self.heuristic,
            "nodes": self.nodes.iter().collect::<Vec<_>>(),
            "start": self.start,
            "title": self.title,
        })
    }
}

impl Problem for ExplicitGraph {
    type State = String;

    fn problem_id(&self) -> &str {
        &self.title
    }

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &String) -> Vec<Transition<String>> {
        self.outgoing
            .get(state)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| {
                        let edge = &self.edges[i];
                        Transition::new(edge.action.clone(), edge.to.clone())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn heuristic(&self, state: &String) -> Cost {
        self.heuristic.get(state).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Built-in graphs
// ---------------------------------------------------------------------------

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: [&str; 6] = [
    "paths-1",
    "paths-2",
    "paths-3",
    "weighted-1",
    "weighted-2",
    "weighted-3",
];

const SMALL_EDGES: &[(&str, &str, Cost)] = &[
    ("A", "B", 1),
    ("A", "C", 1),
    ("B", "C", 1),
    ("C", "D", 1),
    ("C", "E", 1),
];

const BRANCH_EDGES: &[(&str, &str, Cost)] = &[
    ("A", "B", 1),
    ("B", "C", 3),
    ("B", "D", 1),
    ("D", "E", 3),
    ("D", "G", 1),
    ("A", "H", 3),
    ("H", "J", 1),
];

const DIAMOND_EDGES: &[(&str, &str, Cost)] = &[
    ("A", "B", 3),
    ("A", "C", 1),
    ("B", "D", 1),
    ("B", "G", 3),
    ("C", "B", 1),
    ("C", "D", 3),
    ("D", "G", 1),
];

const WIDE_EDGES: &[(&str, &str, Cost)] = &[
    ("A", "B", 2),
    ("A", "C", 3),
    ("A", "D", 4),
    ("B", "E", 2),
    ("B", "F", 3),
    ("C", "J", 7),
    ("D", "H", 4),
    ("F", "D", 2),
    ("H", "G", 3),
    ("J", "G", 4),
];

fn from_table(
    title: &str,
    table: &[(&str, &str, Cost)],
    start: &str,
    goals: &[&str],
) -> Result<ExplicitGraph, GraphError> {
    let edges = table
        .iter()
        .map(|&(from, to, cost)| Edge::new(from, to, cost))
        .collect::<Result<Vec<_>, _>>()?;
    ExplicitGraph::new(title, edges, start, goals)
}

/// Look up a built-in graph by name.
///
/// The `paths-*` graphs are small enough to enumerate every acyclic path;
/// the `weighted-*` graphs separate cheapest-cost from fewest-edge answers.
#[must_use]
pub fn builtin(name: &str) -> Option<ExplicitGraph> {
    let graph = match name {
        "paths-1" => from_table(name, SMALL_EDGES, "B", &["E"]),
        "paths-2" => from_table(name, BRANCH_EDGES, "A", &["J"]),
        "paths-3" => from_table(name, WIDE_EDGES, "A", &["G"]),
        "weighted-1" => from_table(name, DIAMOND_EDGES, "A", &["D"]),
        "weighted-2" => from_table(name, BRANCH_EDGES, "A", &["H"]),
        "weighted-3" => from_table(name, WIDE_EDGES, "A", &["J"]),
        _ => return None,
    };
    graph.ok()
}
