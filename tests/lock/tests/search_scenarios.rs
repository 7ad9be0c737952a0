//! Fixed acceptance scenarios: the weighted diamond graph, the sliding
//! puzzle, start-is-goal and the water jugs.

use wayfinder_harness::worlds::explicit_graph::{builtin, Edge, ExplicitGraph};
use wayfinder_harness::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};
use wayfinder_harness::worlds::water_jug::{Jugs, WaterJugs};
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{search, search_with_policy, SearchStatus};

fn diamond() -> ExplicitGraph {
    let edges = [
        ("A", "B", 3),
        ("A", "C", 1),
        ("B", "D", 1),
        ("B", "G", 3),
        ("C", "B", 1),
        ("C", "D", 3),
        ("D", "G", 1),
    ]
    .into_iter()
    .map(|(from, to, cost)| Edge::new(from, to, cost).unwrap())
    .collect();
    ExplicitGraph::new("diamond", edges, "A", &["D"]).unwrap()
}

fn states<S: Clone>(solution: &wayfinder_search::path::Solution<S>) -> Vec<S> {
    solution.states().cloned().collect()
}

#[test]
fn diamond_ucs_takes_cheapest_path() {
    let solution = search(&diamond(), FrontierStrategy::CostPriority).unwrap();
    assert_eq!(states(&solution), vec!["A", "C", "B", "D"]);
    assert_eq!(solution.total_cost, 3);
    assert_eq!(solution.to_string(), "A -> C -> B -> D (Total cost: 3)");
}

#[test]
fn diamond_bfs_takes_fewest_edges() {
    let solution = search(&diamond(), FrontierStrategy::Queue).unwrap();
    assert_eq!(states(&solution), vec!["A", "B", "D"]);
    assert_eq!(solution.total_cost, 4);
}

#[test]
fn diamond_matches_builtin_weighted_1() {
    let builtin = builtin("weighted-1").unwrap();
    for strategy in FrontierStrategy::ALL {
        let a = search(&diamond(), strategy).unwrap();
        let b = search(&builtin, strategy).unwrap();
        assert_eq!(a, b, "{strategy}");
    }
}

#[test]
fn puzzle_to_solved_takes_fourteen_moves() {
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    let bfs = search(
        &SlidingPuzzle::new(start, Board::solved(), PuzzleHeuristic::Zero),
        FrontierStrategy::Queue,
    )
    .unwrap();
    let astar = search(
        &SlidingPuzzle::new(start, Board::solved(), PuzzleHeuristic::Manhattan),
        FrontierStrategy::CostPlusHeuristicPriority,
    )
    .unwrap();
    assert_eq!(bfs.move_count(), 14);
    assert_eq!(astar.move_count(), 14);
    assert_eq!(bfs.total_cost, astar.total_cost);
}

#[test]
fn puzzle_two_move_goal_is_right_then_down() {
    let start: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    let goal: Board = "1,2,3,4,5,8,6,7,0".parse().unwrap();
    let bfs = search(
        &SlidingPuzzle::new(start, goal, PuzzleHeuristic::Zero),
        FrontierStrategy::Queue,
    )
    .unwrap();
    let astar = search(
        &SlidingPuzzle::new(start, goal, PuzzleHeuristic::Manhattan),
        FrontierStrategy::CostPlusHeuristicPriority,
    )
    .unwrap();
    assert_eq!(bfs.action_labels(), vec!["Right", "Down"]);
    assert_eq!(astar, bfs);
}

#[test]
fn start_is_goal_needs_no_expansion() {
    let board = Board::solved();
    let puzzle = SlidingPuzzle::new(board, board, PuzzleHeuristic::Manhattan);
    let graph = ExplicitGraph::new("single", Vec::new(), "A", &["A"]).unwrap();
    let jugs = WaterJugs::new(Jugs::initial());
    for strategy in FrontierStrategy::ALL {
        let policy = SearchPolicy::new(strategy);

        let outcome = search_with_policy(&puzzle, &policy).unwrap();
        let solution = outcome.solution.unwrap();
        assert_eq!(solution.move_count(), 0);
        assert_eq!(solution.total_cost, 0);
        assert_eq!(outcome.stats.expansions, 0);

        let outcome = search_with_policy(&graph, &policy).unwrap();
        assert_eq!(outcome.solution.unwrap().steps.len(), 1);
        assert_eq!(outcome.stats.expansions, 0);

        let outcome = search_with_policy(&jugs, &policy).unwrap();
        assert_eq!(outcome.solution.unwrap().move_count(), 0);
    }
}

#[test]
fn unreachable_puzzle_goal_exhausts() {
    let start = Board::solved();
    let goal: Board = "1,2,3,4,5,6,8,7,0".parse().unwrap();
    assert!(!start.can_reach(&goal));
    let puzzle = SlidingPuzzle::new(start, goal, PuzzleHeuristic::Manhattan);
    let outcome =
        search_with_policy(&puzzle, &SearchPolicy::new(FrontierStrategy::CostPlusHeuristicPriority))
            .unwrap();
    assert_eq!(outcome.status, SearchStatus::Exhausted);
    assert!(outcome.solution.is_none());
    // Half of 9! is reachable from any board.
    assert_eq!(outcome.stats.expansions, 181_440);
}

#[test]
fn jugs_bfs_splits_in_seven_pours() {
    let solution = search(
        &WaterJugs::new("4,4,0".parse().unwrap()),
        FrontierStrategy::Queue,
    )
    .unwrap();
    assert_eq!(solution.move_count(), 7);
    assert_eq!(solution.goal().unwrap().litres(), [4, 4, 0]);
}

#[test]
fn malformed_goals_rejected_before_search() {
    assert!("1,2,3,4,5,6,7,8".parse::<Board>().is_err());
    assert!("1,2,3,4,5,6,7,8,8".parse::<Board>().is_err());
    assert!("1,2,3,4,5,6,7,8,9".parse::<Board>().is_err());
    assert!("4,4,1".parse::<Jugs>().is_err());
    assert!("9,0,0".parse::<Jugs>().is_err());
}
