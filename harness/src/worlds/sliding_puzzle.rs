//! `SlidingPuzzle`: the 3×3 eight-tile puzzle.
//!
//! A [`Board`] is nine cells in row-major order; `0` is the blank. A move is
//! named after the direction the blank travels, and swaps the blank with the
//! tile in that direction. Moves are generated in the fixed order Down, Up,
//! Right, Left; BFS and DFS tie-breaking depends on it.

use std::str::FromStr;

use wayfinder_search::action::{Action, Cost, Transition};
use wayfinder_search::contract::Problem;

/// Board side length.
pub const SIDE: usize = 3;
/// Number of cells.
pub const CELLS: usize = SIDE * SIDE;

/// Rejected board input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Wrong number of cells.
    WrongLength { found: usize },
    /// A cell could not be parsed as a number.
    NotANumber { cell: String },
    /// A tile value outside `0..=8`.
    OutOfRange { value: u8 },
    /// A tile value appears more than once.
    Duplicate { value: u8 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { found } => {
                write!(f, "board must have {CELLS} cells, found {found}")
            }
            Self::NotANumber { cell } => write!(f, "board cell is not a number: {cell:?}"),
            Self::OutOfRange { value } => write!(f, "tile {value} is outside 0..=8"),
            Self::Duplicate { value } => write!(f, "tile {value} appears more than once"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A valid board: a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board([u8; CELLS]);

impl Board {
    /// Validate and wrap a cell array.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] unless `cells` is a permutation of `0..=8`.
    pub fn new(cells: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(BoardError::OutOfRange { value })?;
            if *slot {
                return Err(BoardError::Duplicate { value });
            }
            *slot = true;
        }
        Ok(Self(cells))
    }

    /// The solved board `1 2 3 / 4 5 6 / 7 8 _`.
    #[must_use]
    pub fn solved() -> Self {
        Self([1, 2, 3, 4, 5, 6, 7, 8, 0])
    }

    #[must_use]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Index of the blank cell.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.position_of(0)
    }

    fn position_of(&self, tile: u8) -> usize {
        // Valid boards hold every tile exactly once.
        self.0.iter().position(|&t| t == tile).unwrap_or(0)
    }

    /// Cells grouped into rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks(SIDE)
    }

    /// Apply `mv` if the blank stays on the board.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let (dr, dc) = mv.delta();
        let row = row.checked_add_signed(dr).filter(|&r| r < SIDE)?;
        let col = col.checked_add_signed(dc).filter(|&c| c < SIDE)?;
        let mut cells = self.0;
        cells.swap(blank, row * SIDE + col);
        Some(Self(cells))
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// On an odd-width board, reachability is decided by the parity of the
    /// tile inversion count.
    #[must_use]
    pub fn can_reach(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > *b).count())
            .sum()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse nine comma- or whitespace-separated numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != CELLS {
            return Err(BoardError::WrongLength { found: parts.len() });
        }
        let mut cells = [0u8; CELLS];
        for (cell, part) in cells.iter_mut().zip(&parts) {
            *cell = part.parse().map_err(|_| BoardError::NotANumber {
                cell: (*part).to_string(),
            })?;
        }
        Self::new(cells)
    }
}

impl std::fmt::Display for Board {
    /// `[1,2,3,4,0,5,6,7,8]`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, tile) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tile}")?;
        }
        f.write_str("]")
    }
}

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Down,
    Up,
    Right,
    Left,
}

impl Move {
    /// Generation order.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Down => "Down",
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Left => "Left",
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Heuristic choice for puzzle search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleHeuristic {
    /// Always 0.
    #[default]
    Zero,
    /// Sum over tiles 1..=8 of row and column distance to the goal cell.
    /// Admissible.
    Manhattan,
    /// Out-of-sequence score: 1 if the centre cell is wrong, plus 2 for each
    /// misplaced tile in cells 0..=7 other than the centre. Not admissible.
    OutOfSequence,
}

impl PuzzleHeuristic {
    pub const ALL: [PuzzleHeuristic; 3] = [Self::Zero, Self::Manhattan, Self::OutOfSequence];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::OutOfSequence => "out_of_sequence",
        }
    }

    /// Estimate for `board` against `goal`.
    #[must_use]
    pub fn estimate(self, board: &Board, goal: &Board) -> Cost {
        match self {
            Self::Zero => 0,
            Self::Manhattan => manhattan(board, goal),
            Self::OutOfSequence => out_of_sequence(board, goal),
        }
    }
}

impl std::fmt::Display for PuzzleHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic {
    pub name: String,
}

impl std::fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected zero, manhattan, out_of_sequence)",
            self.name
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for PuzzleHeuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "zero" | "none" => Ok(Self::Zero),
            "manhattan" => Ok(Self::Manhattan),
            "out_of_sequence" | "oos" => Ok(Self::OutOfSequence),
            _ => Err(UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}

fn manhattan(board: &Board, goal: &Board) -> Cost {
    (1..=8u8)
        .map(|tile| {
            let (here, there) = (board.position_of(tile), goal.position_of(tile));
            let rows = (here / SIDE).abs_diff(there / SIDE);
            let cols = (here % SIDE).abs_diff(there % SIDE);
            Cost::try_from(rows + cols).unwrap_or(Cost::MAX)
        })
        .sum()
}

const CENTRE: usize = 4;

fn out_of_sequence(board: &Board, goal: &Board) -> Cost {
    // The last cell is never scored.
    (0..CELLS - 1)
        .map(|i| {
            let (tile, want) = (board.0[i], goal.0[i]);
            if i == CENTRE {
                Cost::from(tile != want)
            } else if tile != 0 && tile != want {
                2
            } else {
                0
            }
        })
        .sum()
}

/// Search problem: reach `goal` from `start`.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    id: String,
    start: Board,
    goal: Board,
    heuristic: PuzzleHeuristic,
}

impl SlidingPuzzle {
    #[must_use]
    pub fn new(start: Board, goal: Board, heuristic: PuzzleHeuristic) -> Self {
        Self {
            id: format!("sliding-puzzle:{start}->{goal}:{heuristic}"),
            start,
            goal,
            heuristic,
        }
    }

    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Board {
        self.start
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn expand(&self, state: &Board) -> Vec<Transition<Board>> {
        Move::ALL
            .iter()
            .filter_map(|&mv| {
                let next = state.apply(mv)?;
                let action = Action::new(mv.name(), 1).ok()?;
                Some(Transition::new(action, next))
            })
            .collect()
    }

    fn heuristic(&self, state: &Board) -> Cost {
        self.heuristic.estimate(state, &self.goal)
    }
}
