//! Plain-text rendering for the CLI.

use std::fmt::Write as _;

use wayfinder_search::action::Action;
use wayfinder_search::path::Solution;

use crate::runner::ComparisonReport;
use crate::worlds::sliding_puzzle::Board;

/// Three rows, one per line: `[1, 2, 3]`.
#[must_use]
pub fn board_rows(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        let _ = writeln!(out, "[{}]", cells.join(", "));
    }
    out
}

/// Every board on the solution path, blank-line separated, then the move
/// count.
#[must_use]
pub fn puzzle_solution(solution: &Solution<Board>) -> String {
    let mut out = String::new();
    for step in &solution.steps {
        if let Some(action) = step.action.as_ref().and_then(Action::label) {
            let _ = writeln!(out, "{action}");
        }
        out.push_str(&board_rows(&step.state));
        out.push('\n');
    }
    let _ = writeln!(out, "Number of moves: {}", solution.move_count());
    out
}

/// One `State: ..., Action: ...` line per step.
#[must_use]
pub fn step_listing<S: std::fmt::Display>(solution: &Solution<S>) -> String {
    let mut out = String::new();
    for step in &solution.steps {
        let action = step
            .action
            .as_ref()
            .and_then(Action::label)
            .unwrap_or("None");
        let _ = writeln!(out, "State: {}, Action: {action}", step.state);
    }
    out
}

/// Summary table: one `label: N moves (cost C, E expansions)` line per run.
#[must_use]
pub fn report_summary(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary for {}:", report.title);
    for run in &report.runs {
        match (run.moves, run.total_cost) {
            (Some(moves), Some(cost)) => {
                let _ = writeln!(
                    out,
                    "  {}: {moves} moves (cost {cost}, {} expansions)",
                    run.label, run.stats.expansions
                );
            }
            _ => {
                let _ = writeln!(
                    out,
                    "  {}: no solution ({} expansions)",
                    run.label, run.stats.expansions
                );
            }
        }
    }
    out
}
