//! In-process determinism: repeated and interleaved searches over one
//! problem produce identical solutions, traces and digests.

use wayfinder_harness::runner::compare_puzzle;
use wayfinder_harness::worlds::explicit_graph::{builtin, BUILTIN_NAMES};
use wayfinder_harness::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};
use wayfinder_search::explored::ExploredPolicy;
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{search, search_with_policy, Searcher};

#[test]
fn repeated_search_is_identical() {
    for name in BUILTIN_NAMES {
        let graph = builtin(name).unwrap();
        for strategy in FrontierStrategy::ALL {
            assert_eq!(search(&graph, strategy), search(&graph, strategy), "{name} {strategy}");
        }
    }
}

#[test]
fn interleaved_searches_do_not_interfere() {
    let graph = builtin("paths-3").unwrap();
    let policy =
        SearchPolicy::new(FrontierStrategy::Stack).with_explored(ExploredPolicy::AncestorCheck);
    let mut first = Searcher::new(&graph, &policy).unwrap();
    let mut second = Searcher::new(&graph, &policy).unwrap();

    let a1 = first.next_solution();
    let ucs = search(&graph, FrontierStrategy::CostPriority);
    let b1 = second.next_solution();
    let a2 = first.next_solution();
    let b2 = second.next_solution();

    assert_eq!(a1, b1);
    assert_eq!(a2, b2);
    assert_ne!(a1, a2);
    assert_eq!(ucs.unwrap().total_cost, 11);
}

#[test]
fn trace_digest_is_stable() {
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    let puzzle = SlidingPuzzle::new(start, Board::solved(), PuzzleHeuristic::OutOfSequence);
    let policy = SearchPolicy::new(FrontierStrategy::CostPlusHeuristicPriority).with_trace();
    let first = search_with_policy(&puzzle, &policy).unwrap();
    let second = search_with_policy(&puzzle, &policy).unwrap();
    let first_trace = first.trace.unwrap();
    let second_trace = second.trace.unwrap();
    assert_eq!(
        first_trace.to_canonical_json_bytes().unwrap(),
        second_trace.to_canonical_json_bytes().unwrap()
    );
    assert_eq!(first_trace.digest().unwrap(), second_trace.digest().unwrap());
    assert_eq!(
        u64::try_from(first_trace.expansions.len()).unwrap(),
        first.stats.expansions
    );
}

#[test]
fn comparison_report_digest_is_stable() {
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    let goal: Board = "1,2,3,4,5,8,6,7,0".parse().unwrap();
    let a = compare_puzzle(start, goal).unwrap();
    let b = compare_puzzle(start, goal).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    assert!(a.digest().unwrap().as_str().starts_with("sha256:"));
}
