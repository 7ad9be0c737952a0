//! `WaterJugs`: the 8/5/3-litre decantation puzzle.
//!
//! Three jugs start at (8, 0, 0). A pour empties the source jug or fills the
//! destination, whichever comes first. Pours that would move nothing are not
//! generated. Every pour costs 1.

use std::str::FromStr;

use wayfinder_search::action::{Action, Transition};
use wayfinder_search::contract::Problem;

/// Jug capacities in litres.
pub const CAPACITIES: [u8; 3] = [8, 5, 3];
/// Total water in the system.
pub const TOTAL: u8 = 8;

/// Rejected jug input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JugError {
    /// Not exactly three values.
    WrongLength { found: usize },
    /// A value could not be parsed.
    NotANumber { value: String },
    /// A jug holds more than it can.
    OverCapacity { jug: usize, litres: u8, capacity: u8 },
    /// The litres do not add up to the water in the system.
    WrongTotal { total: u32 },
}

impl std::fmt::Display for JugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { found } => write!(f, "expected 3 jug values, found {found}"),
            Self::NotANumber { value } => write!(f, "jug value is not a number: {value:?}"),
            Self::OverCapacity {
                jug,
                litres,
                capacity,
            } => write!(f, "jug {jug} holds {litres}L but its capacity is {capacity}L"),
            Self::WrongTotal { total } => {
                write!(f, "jugs must hold {TOTAL}L in total, found {total}L")
            }
        }
    }
}

impl std::error::Error for JugError {}

/// Litres in each jug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jugs([u8; 3]);

impl Jugs {
    /// Validate a jug triple.
    ///
    /// # Errors
    ///
    /// Returns [`JugError`] if any jug exceeds its capacity or the total is
    /// not [`TOTAL`].
    pub fn new(litres: [u8; 3]) -> Result<Self, JugError> {
        for (i, (&l, &cap)) in litres.iter().zip(&CAPACITIES).enumerate() {
            if l > cap {
                return Err(JugError::OverCapacity {
                    jug: i + 1,
                    litres: l,
                    capacity: cap,
                });
            }
        }
        let total: u32 = litres.iter().map(|&l| u32::from(l)).sum();
        if total != u32::from(TOTAL) {
            return Err(JugError::WrongTotal { total });
        }
        Ok(Self(litres))
    }

    /// The fixed start state (8, 0, 0).
    #[must_use]
    pub fn initial() -> Self {
        Self([TOTAL, 0, 0])
    }

    #[must_use]
    pub fn litres(&self) -> [u8; 3] {
        self.0
    }

    /// Pour from jug `from` into jug `to` (0-based). Returns the litres moved
    /// and the new state, or `None` if nothing would move.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in `0..3`.
    #[must_use]
    pub fn pour(&self, from: usize, to: usize) -> Option<(u8, Self)> {
        let amount = self.0[from].min(CAPACITIES[to] - self.0[to]);
        if from == to || amount == 0 {
            return None;
        }
        let mut next = self.0;
        next[from] -= amount;
        next[to] += amount;
        Some((amount, Self(next)))
    }
}

impl FromStr for Jugs {
    type Err = JugError;

    /// Parse three comma- or whitespace-separated litre values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            return Err(JugError::WrongLength { found: parts.len() });
        }
        let mut litres = [0u8; 3];
        for (slot, part) in litres.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| JugError::NotANumber {
                value: (*part).to_string(),
            })?;
        }
        Self::new(litres)
    }
}

impl std::fmt::Display for Jugs {
    /// `(8, 0, 0)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Search problem: reach `goal` from (8, 0, 0).
#[derive(Debug, Clone)]
pub struct WaterJugs {
    id: String,
    goal: Jugs,
}

impl WaterJugs {
    #[must_use]
    pub fn new(goal: Jugs) -> Self {
        Self {
            id: format!("water-jugs:{goal}"),
            goal,
        }
    }

    #[must_use]
    pub fn goal(&self) -> &Jugs {
        &self.goal
    }
}

impl Problem for WaterJugs {
    type State = Jugs;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Jugs {
        Jugs::initial()
    }

    fn is_goal(&self, state: &Jugs) -> bool {
        *state == self.goal
    }

    fn expand(&self, state: &Jugs) -> Vec<Transition<Jugs>> {
        let mut out = Vec::new();
        for from in 0..3 {
            for to in (0..3).filter(|&to| to != from) {
                let Some((amount, next)) = state.pour(from, to) else {
                    continue;
                };
                let label = format!("Pour {amount}L from jug {} to jug {}", from + 1, to + 1);
                if let Ok(action) = Action::new(label, 1) {
                    out.push(Transition::new(action, next));
                }
            }
        }
        out
    }
}
