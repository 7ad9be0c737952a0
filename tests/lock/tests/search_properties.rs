//! Optimality and termination properties checked against brute-force
//! enumeration of simple paths.
//!
//! The graphs are the built-in catalogue plus a batch of small generated
//! graphs (fixed seed, so every run checks the same instances).

use std::collections::BTreeSet;

use wayfinder_harness::worlds::explicit_graph::{builtin, Edge, ExplicitGraph, BUILTIN_NAMES};
use wayfinder_harness::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};
use wayfinder_search::action::Cost;
use wayfinder_search::explored::ExploredPolicy;
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{search, Searcher};

/// Every simple path from the start that ends at its first goal.
fn simple_goal_paths(graph: &ExplicitGraph) -> Vec<(Vec<String>, Cost)> {
    fn walk(
        graph: &ExplicitGraph,
        path: &mut Vec<String>,
        cost: Cost,
        out: &mut Vec<(Vec<String>, Cost)>,
    ) {
        let here = path.last().unwrap().clone();
        if graph.goals().contains(&here) {
            out.push((path.clone(), cost));
            return;
        }
        for edge in graph.edges().iter().filter(|e| e.source() == here) {
            if path.iter().any(|n| n == edge.target()) {
                continue;
            }
            path.push(edge.target().to_string());
            walk(graph, path, cost + edge.cost(), out);
            path.pop();
        }
    }
    let mut out = Vec::new();
    walk(graph, &mut vec![graph.start().to_string()], 0, &mut out);
    out
}

/// Small xorshift generator; fixed seed keeps the instances stable.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn generated_graphs() -> Vec<ExplicitGraph> {
    let names = ["N0", "N1", "N2", "N3", "N4", "N5", "N6"];
    let mut rng = Rng(0x5eed_1234_abcd_0001);
    (0..40)
        .map(|i| {
            let mut edges = Vec::new();
            for from in &names {
                for to in &names {
                    if from != to && rng.below(100) < 35 {
                        let cost = i64::try_from(rng.below(9)).unwrap() + 1;
                        edges.push(Edge::new(from, to, cost).unwrap());
                    }
                }
            }
            ExplicitGraph::new(&format!("generated-{i}"), edges, "N0", &["N6"])
                .unwrap()
                .with_nodes(&names)
        })
        .collect()
}

fn all_graphs() -> Vec<ExplicitGraph> {
    let mut graphs: Vec<ExplicitGraph> = BUILTIN_NAMES
        .iter()
        .map(|name| builtin(name).unwrap())
        .collect();
    graphs.extend(generated_graphs());
    graphs
}

#[test]
fn ucs_cost_matches_brute_force_minimum() {
    for graph in all_graphs() {
        let best = simple_goal_paths(&graph).into_iter().map(|(_, c)| c).min();
        let found = search(&graph, FrontierStrategy::CostPriority).map(|s| s.total_cost);
        assert_eq!(found, best, "{}", graph.title());
    }
}

#[test]
fn bfs_finds_fewest_edges() {
    for graph in all_graphs() {
        let fewest = simple_goal_paths(&graph)
            .into_iter()
            .map(|(p, _)| p.len() - 1)
            .min();
        let found = search(&graph, FrontierStrategy::Queue).map(|s| s.move_count());
        assert_eq!(found, fewest, "{}", graph.title());
    }
}

#[test]
fn astar_with_admissible_table_matches_ucs() {
    for graph in generated_graphs() {
        // Half the true remaining cost is admissible.
        let table: Vec<(String, Cost)> = graph
            .nodes()
            .iter()
            .map(|node| {
                let rooted = ExplicitGraph::new(
                    "rooted",
                    graph.edges().to_vec(),
                    node,
                    &["N6"],
                )
                .unwrap();
                let remaining = search(&rooted, FrontierStrategy::CostPriority)
                    .map_or(0, |s| s.total_cost);
                (node.clone(), remaining / 2)
            })
            .collect();
        let informed = graph.clone().with_heuristic(table).unwrap();
        let ucs = search(&graph, FrontierStrategy::CostPriority).map(|s| s.total_cost);
        let astar =
            search(&informed, FrontierStrategy::CostPlusHeuristicPriority).map(|s| s.total_cost);
        assert_eq!(astar, ucs, "{}", graph.title());
    }
}

#[test]
fn dfs_terminates_without_revisiting_ancestors() {
    for graph in all_graphs() {
        let solvable = !simple_goal_paths(&graph).is_empty();
        let found = search(&graph, FrontierStrategy::Stack);
        assert_eq!(found.is_some(), solvable, "{}", graph.title());
        if let Some(solution) = found {
            let distinct: BTreeSet<&String> = solution.states().collect();
            assert_eq!(distinct.len(), solution.steps.len(), "{}", graph.title());
        }
    }
}

#[test]
fn ancestor_check_enumerates_every_simple_path() {
    let policy =
        SearchPolicy::new(FrontierStrategy::Stack).with_explored(ExploredPolicy::AncestorCheck);
    for graph in all_graphs() {
        let expected: BTreeSet<Vec<String>> =
            simple_goal_paths(&graph).into_iter().map(|(p, _)| p).collect();
        let found: Vec<Vec<String>> = Searcher::new(&graph, &policy)
            .unwrap()
            .map(|s| s.states().cloned().collect())
            .collect();
        let unique: BTreeSet<Vec<String>> = found.iter().cloned().collect();
        assert_eq!(unique.len(), found.len(), "duplicate path in {}", graph.title());
        assert_eq!(unique, expected, "{}", graph.title());
    }
}

#[test]
fn puzzle_astar_manhattan_matches_ucs() {
    let goal = Board::solved();
    for start in ["1,2,3,4,0,5,6,7,8", "4,1,3,7,2,6,0,5,8", "1,2,3,0,4,6,7,5,8"] {
        let start: Board = start.parse().unwrap();
        let uninformed = SlidingPuzzle::new(start, goal, PuzzleHeuristic::Zero);
        let informed = SlidingPuzzle::new(start, goal, PuzzleHeuristic::Manhattan);
        let ucs = search(&uninformed, FrontierStrategy::CostPriority).unwrap();
        let astar = search(&informed, FrontierStrategy::CostPlusHeuristicPriority).unwrap();
        let bfs = search(&uninformed, FrontierStrategy::Queue).unwrap();
        assert_eq!(astar.total_cost, ucs.total_cost, "{start}");
        assert_eq!(bfs.move_count(), ucs.move_count(), "{start}");
        assert_eq!(astar.goal(), Some(&goal));
    }
}
