//! TOML configuration for graph problems.
//!
//! A graph file declares its edges, start node, goal set and optional
//! heuristic table, plus a `[search]` table holding the [`SearchPolicy`]:
//!
//! ```toml
//! title = "weighted"
//! start = "A"
//! goals = ["D"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! cost = 3
//!
//! [heuristic]
//! A = 2
//!
//! [search]
//! strategy = "ucs"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use wayfinder_search::action::Cost;
use wayfinder_search::error::SearchError;
use wayfinder_search::policy::SearchPolicy;

use crate::worlds::explicit_graph::{Edge, ExplicitGraph, GraphError};

/// Failure loading or building a graph config.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// The TOML did not match the schema.
    Parse { detail: String },
    /// The graph described is invalid.
    Graph(GraphError),
    /// The `[search]` table names an unsupported policy.
    Policy(SearchError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Parse { detail } => write!(f, "invalid graph config: {detail}"),
            Self::Graph(e) => write!(f, "{e}"),
            Self::Policy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<GraphError> for ConfigError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// One `[[edges]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    #[serde(default = "default_cost")]
    pub cost: Cost,
    /// Action label. Defaults to `from->to`.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_cost() -> Cost {
    1
}

fn default_title() -> String {
    "graph".to_string()
}

/// A graph problem plus the policy to search it with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Extra nodes with no edges.
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
    pub start: String,
    pub goals: Vec<String>,
    #[serde(default)]
    pub heuristic: BTreeMap<String, Cost>,
    #[serde(default)]
    pub search: SearchPolicy,
}

impl GraphConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid for the schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            title = %config.title,
            edges = config.edges.len(),
            "loaded graph config"
        );
        Ok(config)
    }

    /// Build the graph and validate the search policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Graph`] for negative costs or heuristics or an
    /// empty goal set, and [`ConfigError::Policy`] for an unsupported policy.
    pub fn build(&self) -> Result<(ExplicitGraph, SearchPolicy), ConfigError> {
        self.search.validate().map_err(ConfigError::Policy)?;
        let edges = self
            .edges
            .iter()
            .map(|e| match &e.label {
                Some(label) => Edge::labelled(&e.from, &e.to, e.cost, label),
                None => Edge::new(&e.from, &e.to, e.cost),
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(GraphError::from)?;
        let goals: Vec<&str> = self.goals.iter().map(String::as_str).collect();
        let nodes: Vec<&str> = self.nodes.iter().map(String::as_str).collect();
        let graph = ExplicitGraph::new(&self.title, edges, &self.start, &goals)?
            .with_nodes(&nodes)
            .with_heuristic(self.heuristic.iter().map(|(k, v)| (k.clone(), *v)))?;
        Ok((graph, self.search))
    }
}
