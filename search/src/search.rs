//! Search driver: the pop/goal-test/expand loop.
//!
//! A [`Searcher`] owns a fresh frontier, explored set and path arena for one
//! problem. Each call to [`Searcher::next_solution`] resumes the loop until
//! the next goal path is popped or the frontier empties, so a searcher can be
//! drained as an iterator of successive solutions.

use tracing::{debug, info};

use crate::action::{Action, Cost, Transition};
use crate::contract::Problem;
use crate::error::SearchError;
use crate::explored::{ChildDecision, ExploredPolicy, ExploredSet, PopDecision};
use crate::frontier::{Frontier, FrontierEntry, FrontierStrategy};
use crate::path::{PathArena, PathId, Solution};
use crate::policy::SearchPolicy;
use crate::trace::{
    ChildOutcome, ChildRecord, ExpandEvent, GoalEvent, SearchTrace, TerminationReason,
    TraceMetadata,
};

/// Lifecycle of a searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Not yet stopped, or resumed after a solution.
    Running,
    /// The most recent call returned a goal path.
    Succeeded,
    /// The frontier is empty. Terminal.
    Exhausted,
}

impl SearchStatus {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Counters accumulated over the life of a searcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    /// Paths popped and expanded (goal pops are not expansions).
    pub expansions: u64,
    /// Transitions returned by `expand`.
    pub generated: u64,
    /// Paths pushed onto the frontier, root included.
    pub pushed: u64,
    /// Children or pops dropped because their state was already handled.
    pub duplicates_suppressed: u64,
    /// Children dropped because their state was on their own ancestor chain.
    pub cycles_suppressed: u64,
    /// Pops dropped because a cheaper path to their state was recorded.
    pub stale_discarded: u64,
    /// Children admitted because they strictly improved a recorded cost.
    pub relaxations: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cycles_suppressed": self.cycles_suppressed,
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "generated": self.generated,
            "pushed": self.pushed,
            "relaxations": self.relaxations,
            "stale_discarded": self.stale_discarded,
        })
    }
}

#[derive(Debug, Default)]
struct TraceRecorder {
    expansions: Vec<ExpandEvent>,
    goals: Vec<GoalEvent>,
    termination: Option<TerminationReason>,
}

/// Resumable search over one problem.
pub struct Searcher<'p, P: Problem> {
    problem: &'p P,
    frontier: Frontier,
    explored: ExploredSet<P::State>,
    arena: PathArena<P::State>,
    stats: SearchStats,
    status: SearchStatus,
    root_state: String,
    trace: Option<TraceRecorder>,
}

impl<'p, P: Problem> Searcher<'p, P> {
    /// Create a searcher after validating `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] if the policy combination
    /// is rejected by [`SearchPolicy::validate`].
    pub fn new(problem: &'p P, policy: &SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self::from_parts(
            problem,
            policy.strategy,
            policy.explored_policy(),
            policy.record_trace,
        ))
    }

    /// Create a searcher with the strategy's default explored policy.
    #[must_use]
    pub fn with_strategy(problem: &'p P, strategy: FrontierStrategy) -> Self {
        Self::from_parts(problem, strategy, strategy.default_explored_policy(), false)
    }

    fn from_parts(
        problem: &'p P,
        strategy: FrontierStrategy,
        explored: ExploredPolicy,
        record_trace: bool,
    ) -> Self {
        let start = problem.start_state();
        let root_state = start.to_string();
        info!(
            problem = problem.problem_id(),
            strategy = %strategy,
            algorithm = strategy.algorithm(),
            explored = %explored,
            start = %root_state,
            "search started"
        );

        let mut explored = ExploredSet::new(explored);
        explored.seed(&start, 0);
        let priority = strategy.priority(0, || problem.heuristic(&start));
        let mut arena = PathArena::new();
        let root = arena.root(start);
        let mut frontier = Frontier::new(strategy);
        frontier.push(root, priority);

        Self {
            problem,
            frontier,
            explored,
            arena,
            stats: SearchStats::default(),
            status: SearchStatus::Running,
            root_state,
            trace: record_trace.then(TraceRecorder::default),
        }
    }

    /// Resume the loop until the next goal path is popped.
    ///
    /// Returns `None` once the frontier is exhausted; every later call also
    /// returns `None`.
    pub fn next_solution(&mut self) -> Option<Solution<P::State>> {
        if self.status == SearchStatus::Exhausted {
            return None;
        }
        self.status = SearchStatus::Running;

        while let Some(entry) = self.frontier.pop() {
            let (state, cost) = {
                let node = self.arena.get(entry.path);
                (node.state.clone(), node.cost)
            };

            match self.explored.on_pop(&state, cost) {
                PopDecision::Open => {}
                PopDecision::AlreadyClosed => {
                    self.stats.duplicates_suppressed += 1;
                    continue;
                }
                PopDecision::Stale => {
                    self.stats.stale_discarded += 1;
                    continue;
                }
            }

            // Goal states are closed on report so a resumed search moves on.
            self.explored.close(&state, cost);

            if self.problem.is_goal(&state) {
                return Some(self.report_goal(entry.path, &state, cost));
            }

            self.expand(entry, &state, cost);
        }

        self.status = SearchStatus::Exhausted;
        if let Some(trace) = self.trace.as_mut() {
            trace.termination = Some(TerminationReason::FrontierExhausted);
        }
        info!(
            problem = self.problem.problem_id(),
            strategy = %self.strategy(),
            status = %self.status,
            expansions = self.stats.expansions,
            "search finished"
        );
        None
    }

    fn report_goal(&mut self, path: PathId, state: &P::State, cost: Cost) -> Solution<P::State> {
        self.status = SearchStatus::Succeeded;
        let path_id = path.index() as u64;
        if let Some(trace) = self.trace.as_mut() {
            trace.goals.push(GoalEvent {
                path_id,
                state: state.to_string(),
                cost,
                after_expansions: self.stats.expansions,
            });
            trace.termination = Some(TerminationReason::GoalReached { path_id });
        }
        let solution = self.arena.reconstruct(path);
        info!(
            problem = self.problem.problem_id(),
            strategy = %self.strategy(),
            status = %self.status,
            expansions = self.stats.expansions,
            cost,
            moves = solution.move_count(),
            "search finished"
        );
        solution
    }

    fn expand(&mut self, entry: FrontierEntry, state: &P::State, cost: Cost) {
        let transitions = self.problem.expand(state);
        let expansion_order = self.stats.expansions;
        self.stats.expansions += 1;
        self.stats.generated += transitions.len() as u64;
        debug!(
            expansion = expansion_order,
            state = %state,
            cost,
            children = transitions.len(),
            "expand"
        );

        let mut records = self.trace.as_ref().map(|_| Vec::with_capacity(transitions.len()));
        for Transition { action, to } in transitions {
            let child_cost = cost.saturating_add(action.cost());
            let rendered = records
                .as_ref()
                .map(|_| (action.label().map(str::to_owned), to.to_string()));
            let outcome = self.offer_child(entry.path, action, to, child_cost);
            if let (Some(records), Some((label, state))) = (records.as_mut(), rendered) {
                records.push(ChildRecord {
                    action: label,
                    state,
                    cost: child_cost,
                    outcome,
                });
            }
        }

        if let (Some(trace), Some(children)) = (self.trace.as_mut(), records) {
            trace.expansions.push(ExpandEvent {
                expansion_order,
                path_id: entry.path.index() as u64,
                state: state.to_string(),
                cost,
                pop_key: entry.key,
                children,
            });
        }
    }

    fn offer_child(
        &mut self,
        parent: PathId,
        action: Action,
        to: P::State,
        cost: Cost,
    ) -> ChildOutcome {
        if self.explored.policy() == ExploredPolicy::AncestorCheck
            && self.arena.chain_contains(parent, &to)
        {
            self.stats.cycles_suppressed += 1;
            return ChildOutcome::CycleSuppressed;
        }

        let decision = self.explored.admit(&to, cost);
        if decision == ChildDecision::Suppress {
            self.stats.duplicates_suppressed += 1;
            return ChildOutcome::DuplicateSuppressed;
        }
        if let ChildDecision::Relax { previous } = decision {
            debug!(state = %to, previous, cost, "relaxed");
        }

        let problem = self.problem;
        let priority = self
            .frontier
            .strategy()
            .priority(cost, || problem.heuristic(&to));
        let path = self.arena.extend(parent, action, to);
        self.frontier.push(path, priority);

        let path_id = path.index() as u64;
        match decision {
            ChildDecision::Relax { previous } => {
                self.stats.relaxations += 1;
                ChildOutcome::Relaxed {
                    path_id,
                    previous_cost: previous,
                }
            }
            _ => ChildOutcome::Pushed { path_id },
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn strategy(&self) -> FrontierStrategy {
        self.frontier.strategy()
    }

    #[must_use]
    pub fn explored_policy(&self) -> ExploredPolicy {
        self.explored.policy()
    }

    /// Counters so far, with the frontier's push count and high-water mark.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            pushed: self.frontier.pushes(),
            frontier_high_water: self.frontier.high_water() as u64,
            ..self.stats
        }
    }

    /// Snapshot of the audit trace, if recording was requested.
    #[must_use]
    pub fn trace(&self) -> Option<SearchTrace> {
        let recorder = self.trace.as_ref()?;
        Some(SearchTrace {
            expansions: recorder.expansions.clone(),
            goals: recorder.goals.clone(),
            metadata: TraceMetadata {
                problem_id: self.problem.problem_id().to_string(),
                strategy: self.strategy(),
                explored_policy: self.explored.policy(),
                root_state: self.root_state.clone(),
                termination: recorder.termination,
                stats: self.stats(),
            },
        })
    }
}

impl<P: Problem> Iterator for Searcher<'_, P> {
    type Item = Solution<P::State>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}

/// Result of [`search_with_policy`].
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    pub status: SearchStatus,
    pub solution: Option<Solution<S>>,
    pub stats: SearchStats,
    pub trace: Option<SearchTrace>,
}

impl<S> SearchOutcome<S> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Succeeded
    }
}

/// Run `strategy` on `problem` with its default explored policy and return
/// the first goal path found.
///
/// `None` means the reachable state space holds no goal.
#[must_use]
pub fn search<P: Problem>(problem: &P, strategy: FrontierStrategy) -> Option<Solution<P::State>> {
    Searcher::with_strategy(problem, strategy).next_solution()
}

/// Run `problem` under `policy` and return the first solution with its
/// status, counters and (if requested) audit trace.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedPolicy`] for policy combinations the
/// driver rejects. No search step is taken in that case.
pub fn search_with_policy<P: Problem>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State>, SearchError> {
    let mut searcher = Searcher::new(problem, policy)?;
    let solution = searcher.next_solution();
    Ok(SearchOutcome {
        status: searcher.status(),
        solution,
        stats: searcher.stats(),
        trace: searcher.trace(),
    })
}
