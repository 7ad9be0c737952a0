//! Binary that runs the fixed search scenarios and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines, one group per scenario.

use wayfinder_harness::runner::compare_puzzle;
use wayfinder_harness::worlds::explicit_graph::builtin;
use wayfinder_harness::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};
use wayfinder_harness::worlds::water_jug::WaterJugs;
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::search_with_policy;

fn main() {
    // Weighted graph, every strategy, with traces.
    let graph = builtin("weighted-1").expect("weighted-1 is built in");
    for strategy in FrontierStrategy::ALL {
        let policy = SearchPolicy::new(strategy).with_trace();
        let outcome = search_with_policy(&graph, &policy).expect("valid policy");
        let solution = outcome.solution.expect("weighted-1 is solvable");
        let trace = outcome.trace.expect("trace was requested");
        println!("graph.{strategy}.path={solution}");
        println!(
            "graph.{strategy}.solution_digest={}",
            solution.digest().expect("solution digest").as_str()
        );
        println!(
            "graph.{strategy}.trace_digest={}",
            trace.digest().expect("trace digest").as_str()
        );
        println!("graph.{strategy}.expansions={}", outcome.stats.expansions);
    }

    // Sliding puzzle, A* with Manhattan distance.
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().expect("valid board");
    let puzzle = SlidingPuzzle::new(start, Board::solved(), PuzzleHeuristic::Manhattan);
    let outcome = search_with_policy(
        &puzzle,
        &SearchPolicy::new(FrontierStrategy::CostPlusHeuristicPriority).with_trace(),
    )
    .expect("valid policy");
    let solution = outcome.solution.expect("puzzle is solvable");
    println!("puzzle.moves={}", solution.move_count());
    println!("puzzle.actions={}", solution.action_labels().join(","));
    println!(
        "puzzle.solution_digest={}",
        solution.digest().expect("solution digest").as_str()
    );
    println!(
        "puzzle.trace_digest={}",
        outcome
            .trace
            .expect("trace was requested")
            .digest()
            .expect("trace digest")
            .as_str()
    );

    // Water jugs, BFS.
    let jugs = WaterJugs::new("4,4,0".parse().expect("valid jugs"));
    let bfs = SearchPolicy::new(FrontierStrategy::Queue);
    let outcome = search_with_policy(&jugs, &bfs).expect("valid policy");
    let solution = outcome.solution.expect("jugs are solvable");
    println!("jugs.pours={}", solution.move_count());
    println!(
        "jugs.solution_digest={}",
        solution.digest().expect("solution digest").as_str()
    );

    // Puzzle comparison report.
    let goal: Board = "1,2,3,4,5,8,6,7,0".parse().expect("valid board");
    let report = compare_puzzle(start, goal).expect("comparison runs");
    println!("report.runs={}", report.runs.len());
    println!(
        "report.digest={}",
        report.digest().expect("report digest").as_str()
    );
}
