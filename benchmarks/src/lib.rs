//! Shared helpers for wayfinder benchmark suites.

use wayfinder_harness::worlds::sliding_puzzle::{Board, Move};
use wayfinder_search::action::Action;
use wayfinder_search::path::{PathArena, PathId};

/// A named puzzle instance.
pub struct PuzzleRegime {
    pub name: &'static str,
    pub start: Board,
    pub goal: Board,
}

/// Scramble the solved board with a fixed, non-backtracking walk of
/// `steps` moves. Deterministic so every run benches the same boards.
#[must_use]
pub fn scrambled(steps: usize) -> Board {
    let mut board = Board::solved();
    let mut last: Option<Move> = None;
    let mut cursor = 0usize;
    for _ in 0..steps {
        for offset in 0..Move::ALL.len() {
            let mv = Move::ALL[(cursor + offset) % Move::ALL.len()];
            if last.is_some_and(|l| is_reverse(l, mv)) {
                continue;
            }
            if let Some(next) = board.apply(mv) {
                board = next;
                last = Some(mv);
                break;
            }
        }
        cursor += 3;
    }
    board
}

fn is_reverse(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Up, Move::Down)
            | (Move::Down, Move::Up)
            | (Move::Left, Move::Right)
            | (Move::Right, Move::Left)
    )
}

/// Puzzle instances of increasing depth, all solvable to the solved board.
///
/// # Panics
///
/// Panics if the fixed start board fails to parse. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn puzzle_regimes() -> Vec<PuzzleRegime> {
    vec![
        PuzzleRegime {
            name: "shallow",
            start: scrambled(6),
            goal: Board::solved(),
        },
        PuzzleRegime {
            name: "centre_blank",
            start: "1,2,3,4,0,5,6,7,8".parse().expect("valid board"),
            goal: Board::solved(),
        },
        PuzzleRegime {
            name: "deep",
            start: scrambled(40),
            goal: Board::solved(),
        },
    ]
}

/// An arena holding a chain of `n` unit-cost paths, plus their ids.
///
/// # Panics
///
/// Panics if a unit-cost action is rejected (it never is).
#[must_use]
pub fn path_chain(n: usize) -> (PathArena<usize>, Vec<PathId>) {
    let mut arena = PathArena::new();
    let mut ids = Vec::with_capacity(n);
    let mut parent = arena.root(0);
    ids.push(parent);
    for i in 1..n {
        parent = arena.extend(parent, Action::unlabeled(1).expect("unit cost"), i);
        ids.push(parent);
    }
    (arena, ids)
}
