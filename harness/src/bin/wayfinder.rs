use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wayfinder_harness::config::GraphConfig;
use wayfinder_harness::render;
use wayfinder_harness::runner::{compare_puzzle, write_report_dir};
use wayfinder_harness::worlds::explicit_graph::{builtin, ExplicitGraph, BUILTIN_NAMES};
use wayfinder_harness::worlds::sliding_puzzle::{Board, PuzzleHeuristic, SlidingPuzzle};
use wayfinder_harness::worlds::water_jug::{Jugs, WaterJugs};
use wayfinder_search::explored::ExploredPolicy;
use wayfinder_search::frontier::FrontierStrategy;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{search_with_policy, SearchOutcome, Searcher};

/// wayfinder: uninformed and heuristic state-space search.
#[derive(Parser)]
#[command(name = "wayfinder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands, one per problem family plus the puzzle comparison.
#[derive(Subcommand)]
enum Command {
    /// Search an explicit weighted graph.
    Graph {
        /// Path to a graph config TOML file.
        #[arg(long, conflicts_with = "builtin")]
        config: Option<PathBuf>,
        /// Name of a built-in graph (paths-1..3, weighted-1..3).
        #[arg(long)]
        builtin: Option<String>,
        /// Override the configured strategy (dfs, bfs, ucs, greedy, astar).
        #[arg(long)]
        strategy: Option<FrontierStrategy>,
        /// Override the explored policy (first_visit, relaxing, ancestor_check).
        #[arg(long)]
        explored: Option<ExploredPolicy>,
        /// List every acyclic path to a goal (depth-first, ancestor check).
        #[arg(long, conflicts_with_all = ["strategy", "explored"])]
        all_paths: bool,
        /// Print the per-expansion trace as JSON after the result.
        #[arg(long)]
        trace: bool,
    },
    /// Solve a 3x3 sliding puzzle.
    Puzzle {
        /// Start board, nine comma-separated cells with 0 as the blank.
        #[arg(long)]
        start: Board,
        /// Goal board.
        #[arg(long, default_value = "1,2,3,4,5,6,7,8,0")]
        goal: Board,
        #[arg(long, default_value = "astar")]
        strategy: FrontierStrategy,
        /// Heuristic (none, manhattan, out_of_sequence).
        #[arg(long, default_value = "manhattan")]
        heuristic: PuzzleHeuristic,
    },
    /// Decant 8 litres between jugs of 8, 5 and 3 litres.
    Jugs {
        /// Target litres per jug, e.g. "4,4,0".
        #[arg(long)]
        goal: Jugs,
        #[arg(long, default_value = "bfs")]
        strategy: FrontierStrategy,
    },
    /// Compare BFS, greedy and A* on one puzzle instance.
    Compare {
        #[arg(long)]
        start: Board,
        #[arg(long, default_value = "1,2,3,4,5,6,7,8,0")]
        goal: Board,
        /// Write report.json and report_digest.txt into this directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Graph {
            config,
            builtin,
            strategy,
            explored,
            all_paths,
            trace,
        } => run_graph(config, builtin, strategy, explored, all_paths, trace),
        Command::Puzzle {
            start,
            goal,
            strategy,
            heuristic,
        } => run_puzzle(start, goal, strategy, heuristic),
        Command::Jugs { goal, strategy } => run_jugs(goal, strategy),
        Command::Compare { start, goal, out } => run_compare(start, goal, out),
    }
}

fn load_graph(
    config: Option<PathBuf>,
    name: Option<String>,
) -> anyhow::Result<(ExplicitGraph, SearchPolicy)> {
    match (config, name) {
        (Some(path), _) => {
            let config = GraphConfig::load(&path)
                .with_context(|| format!("failed to load graph config {}", path.display()))?;
            config
                .build()
                .with_context(|| format!("invalid graph config {}", path.display()))
        }
        (None, Some(name)) => match builtin(&name) {
            Some(graph) => Ok((graph, SearchPolicy::new(FrontierStrategy::CostPriority))),
            None => bail!(
                "unknown built-in graph {name:?} (available: {})",
                BUILTIN_NAMES.join(", ")
            ),
        },
        (None, None) => bail!("one of --config or --builtin is required"),
    }
}

fn run_graph(
    config: Option<PathBuf>,
    name: Option<String>,
    strategy: Option<FrontierStrategy>,
    explored: Option<ExploredPolicy>,
    all_paths: bool,
    trace: bool,
) -> anyhow::Result<()> {
    let (graph, mut policy) = load_graph(config, name)?;

    if all_paths {
        policy =
            SearchPolicy::new(FrontierStrategy::Stack).with_explored(ExploredPolicy::AncestorCheck);
        let searcher = Searcher::new(&graph, &policy).context("invalid search policy")?;
        let mut count = 0usize;
        for solution in searcher {
            count += 1;
            println!("{solution}");
        }
        println!("{count} path(s) from {} to a goal", graph.start());
        return Ok(());
    }

    if let Some(strategy) = strategy {
        policy.strategy = strategy;
    }
    if explored.is_some() {
        policy.explored = explored;
    }
    if trace {
        policy = policy.with_trace();
    }

    let outcome = search_with_policy(&graph, &policy).context("invalid search policy")?;
    match &outcome.solution {
        Some(solution) => println!("{solution}"),
        None => println!("No path from {} to a goal", graph.start()),
    }
    print_stats(policy.strategy, &outcome);
    if let Some(trace) = &outcome.trace {
        println!("{}", serde_json::to_string_pretty(&trace.to_json_value())?);
    }
    Ok(())
}

fn run_puzzle(
    start: Board,
    goal: Board,
    strategy: FrontierStrategy,
    heuristic: PuzzleHeuristic,
) -> anyhow::Result<()> {
    if !start.can_reach(&goal) {
        tracing::warn!(%start, %goal, "boards have opposite parity; the search will exhaust");
    }
    let problem = SlidingPuzzle::new(start, goal, heuristic);
    let outcome = search_with_policy(&problem, &SearchPolicy::new(strategy))
        .context("invalid search policy")?;
    match &outcome.solution {
        Some(solution) => print!("{}", render::puzzle_solution(solution)),
        None => println!("No solution from {start} to {goal}"),
    }
    print_stats(strategy, &outcome);
    Ok(())
}

fn run_jugs(goal: Jugs, strategy: FrontierStrategy) -> anyhow::Result<()> {
    let problem = WaterJugs::new(goal);
    let outcome = search_with_policy(&problem, &SearchPolicy::new(strategy))
        .context("invalid search policy")?;
    match &outcome.solution {
        Some(solution) => {
            print!("{}", render::step_listing(solution));
            println!("Number of pours: {}", solution.move_count());
        }
        None => println!("No sequence of pours reaches {goal}"),
    }
    print_stats(strategy, &outcome);
    Ok(())
}

fn run_compare(start: Board, goal: Board, out: Option<PathBuf>) -> anyhow::Result<()> {
    let report = compare_puzzle(start, goal).context("comparison failed")?;
    print!("{}", render::report_summary(&report));
    if let Some(dir) = out {
        let path = write_report_dir(&report, &dir)
            .with_context(|| format!("failed to write report to {}", dir.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn print_stats<S>(strategy: FrontierStrategy, outcome: &SearchOutcome<S>) {
    let stats = &outcome.stats;
    println!(
        "{} {}: {} expansions, {} generated, {} suppressed, frontier peak {}",
        strategy.algorithm(),
        outcome.status,
        stats.expansions,
        stats.generated,
        stats.duplicates_suppressed + stats.cycles_suppressed,
        stats.frontier_high_water
    );
}
