//! Strategy comparison runs and report persistence.
//!
//! A [`ComparisonReport`] records one row per search run over the same
//! problem: status, move count, cost, counters and the solution digest. The
//! report serializes to canonical JSON, so identical runs produce identical
//! bytes and digests.
//!
//! # Report directory layout
//!
//! ```text
//! <dir>/
//!   report.json         canonical JSON report
//!   report_digest.txt   ASCII digest string (e.g. "sha256:...")
//! ```

use std::path::{Path, PathBuf};

use wayfinder_kernel::digest::canon::{canonical_json_bytes, CanonError};
use wayfinder_kernel::digest::hash::{canonical_hash, ContentHash, HashDomain};
use wayfinder_search::action::Cost;
use wayfinder_search::contract::Problem;
use wayfinder_search::error::SearchError;
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::path::Solution;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{search_with_policy, SearchStats, SearchStatus};

use crate::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};

/// Report filename inside a report directory.
pub const REPORT_FILENAME: &str = "report.json";
/// Digest filename inside a report directory.
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Failure producing or writing a report.
#[derive(Debug)]
pub enum ReportError {
    /// A run's policy was rejected.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    Canon(CanonError),
    /// I/O error writing the report directory.
    Io { detail: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<SearchError> for ReportError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for ReportError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// One search run in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Run label, e.g. `astar+manhattan`.
    pub label: String,
    pub policy: SearchPolicy,
    pub status: SearchStatus,
    /// Actions in the solution, if one was found.
    pub moves: Option<usize>,
    pub total_cost: Option<Cost>,
    pub stats: SearchStats,
    /// Digest of the solution's canonical JSON.
    pub solution_digest: Option<ContentHash>,
}

impl RunRecord {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.policy.strategy.algorithm(),
            "explored_policy": self.policy.explored_policy().name(),
            "label": self.label,
            "moves": self.moves,
            "solution_digest": self.solution_digest.as_ref().map(ContentHash::as_str),
            "stats": self.stats.to_json_value(),
            "status": self.status.name(),
            "strategy": self.policy.strategy.name(),
            "total_cost": self.total_cost,
        })
    }
}

/// Side-by-side results of several searches over one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub title: String,
    /// Digest of the problem definition, when one was supplied.
    pub problem_digest: Option<ContentHash>,
    pub runs: Vec<RunRecord>,
}

impl ComparisonReport {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            problem_digest: None,
            runs: Vec::new(),
        }
    }

    /// Bind the report to a problem definition.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Canon`] if `definition` cannot be canonicalized.
    pub fn with_problem_definition(
        mut self,
        definition: &serde_json::Value,
    ) -> Result<Self, ReportError> {
        let bytes = canonical_json_bytes(definition)?;
        self.problem_digest = Some(canonical_hash(HashDomain::ProblemDefinition, &bytes));
        Ok(self)
    }

    /// Search `problem` under `policy` and append the result.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Search`] if the policy is rejected, or
    /// [`ReportError::Canon`] if the solution cannot be digested.
    pub fn record<P: Problem>(
        &mut self,
        label: &str,
        problem: &P,
        policy: &SearchPolicy,
    ) -> Result<&RunRecord, ReportError> {
        let outcome = search_with_policy(problem, policy)?;
        let solution_digest = outcome
            .solution
            .as_ref()
            .map(Solution::digest)
            .transpose()?;
        tracing::info!(
            report = %self.title,
            run = label,
            status = %outcome.status,
            expansions = outcome.stats.expansions,
            "comparison run complete"
        );
        self.runs.push(RunRecord {
            label: label.to_string(),
            policy: *policy,
            status: outcome.status,
            moves: outcome.solution.as_ref().map(Solution::move_count),
            total_cost: outcome.solution.as_ref().map(|s| s.total_cost),
            stats: outcome.stats,
            solution_digest,
        });
        // Non-empty: pushed above.
        Ok(&self.runs[self.runs.len() - 1])
    }

    /// Look up a run by label.
    #[must_use]
    pub fn run(&self, label: &str) -> Option<&RunRecord> {
        self.runs.iter().find(|r| r.label == label)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "problem_digest": self.problem_digest.as_ref().map(ContentHash::as_str),
            "runs": self.runs.iter().map(RunRecord::to_json_value).collect::<Vec<_>>(),
            "title": self.title,
        })
    }

    /// Canonical JSON bytes of this report.
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
        Ok(canonical_hash(HashDomain::ComparisonReport, &bytes))
    }
}

/// Run `problem` under each strategy with its default explored policy.
///
/// Runs are labelled by strategy name.
///
/// # Errors
///
/// Returns [`ReportError`] if a run fails to produce a digestible result.
pub fn compare<P: Problem>(
    problem: &P,
    strategies: &[FrontierStrategy],
) -> Result<ComparisonReport, ReportError> {
    let mut report = ComparisonReport::new(problem.problem_id());
    for &strategy in strategies {
        report.record(strategy.name(), problem, &SearchPolicy::new(strategy))?;
    }
    Ok(report)
}

/// The standard puzzle comparison: BFS, then greedy and A* under each of
/// Manhattan distance and the out-of-sequence score.
///
/// # Errors
///
/// Returns [`ReportError`] if a run fails to produce a digestible result.
pub fn compare_puzzle(start: Board, goal: Board) -> Result<ComparisonReport, ReportError> {
    let mut report = ComparisonReport::new(&format!("sliding-puzzle:{start}->{goal}"))
        .with_problem_definition(&serde_json::json!({
            "goal": goal.to_string(),
            "start": start.to_string(),
        }))?;

    let uninformed = SlidingPuzzle::new(start, goal, PuzzleHeuristic::Zero);
    report.record("bfs", &uninformed, &SearchPolicy::new(FrontierStrategy::Queue))?;

    for heuristic in [PuzzleHeuristic::Manhattan, PuzzleHeuristic::OutOfSequence] {
        let problem = SlidingPuzzle::new(start, goal, heuristic);
        for strategy in [
            FrontierStrategy::HeuristicPriority,
            FrontierStrategy::CostPlusHeuristicPriority,
        ] {
            let label = format!("{strategy}+{heuristic}");
            report.record(&label, &problem, &SearchPolicy::new(strategy))?;
        }
    }
    Ok(report)
}

/// Write `report` to `dir` as `report.json` plus `report_digest.txt`.
///
/// Creates the directory if needed and returns the path of `report.json`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on I/O failure or [`ReportError::Canon`] if
/// serialization fails.
pub fn write_report_dir(report: &ComparisonReport, dir: &Path) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::Io {
        detail: format!("create_dir_all {}: {e}", dir.display()),
    })?;
    let bytes = report.to_canonical_json_bytes()?;
    let digest = canonical_hash(HashDomain::ComparisonReport, &bytes);

    let report_path = dir.join(REPORT_FILENAME);
    write_atomic(&report_path, &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;
    tracing::info!(path = %report_path.display(), digest = %digest, "wrote comparison report");
    Ok(report_path)
}

/// Read a report directory back and check the stored digest.
///
/// Returns the parsed report JSON.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if either file is missing or unparseable, if
/// the stored digest is malformed, or if it does not match the report bytes.
pub fn read_report_dir(dir: &Path) -> Result<serde_json::Value, ReportError> {
    let bytes = read_file(&dir.join(REPORT_FILENAME))?;
    let stored = read_file(&dir.join(DIGEST_FILENAME))?;
    let stored = std::str::from_utf8(&stored)
        .ok()
        .and_then(ContentHash::parse)
        .ok_or_else(|| ReportError::Io {
            detail: format!(
                "malformed {DIGEST_FILENAME}: {:?}",
                String::from_utf8_lossy(&stored)
            ),
        })?;
    let recomputed = canonical_hash(HashDomain::ComparisonReport, &bytes);
    if stored != recomputed {
        return Err(ReportError::Io {
            detail: format!("digest mismatch: stored={stored}, recomputed={recomputed}"),
        });
    }
    serde_json::from_slice(&bytes).map_err(|e| ReportError::Io {
        detail: format!("parse {REPORT_FILENAME}: {e}"),
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReportError> {
    std::fs::read(path).map_err(|e| ReportError::Io {
        detail: format!("read {}: {e}", path.display()),
    })
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportError> {
    let dir = path.parent().ok_or_else(|| ReportError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_path = dir.join(format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));
    std::fs::write(&temp_path, content).map_err(|e| ReportError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })
}
