use crate::config::SymbolAlphabet;
use crate::error::{InvalidMapReason, Result};
use crate::grid::{Position, RawGrid};
use clap::ValueEnum;

/// Distance estimate used to rank cells. Both are admissible on a 4-connected
/// unit-cost grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn cost(self, from: Position, goal: Position) -> f64 {
        Evaluation::between(from, goal).metric(self)
    }
}

/// Every positional metric between a cell and the goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub row_abs: usize,
    pub col_abs: usize,
    pub manhattan: usize,
    /// `goal.row - from.row`
    pub row_delta: isize,
    /// `goal.col - from.col`
    pub col_delta: isize,
    pub euclidean: f64,
}

impl Evaluation {
    pub fn between(from: Position, goal: Position) -> Self {
        let row_delta = goal.row as isize - from.row as isize;
        let col_delta = goal.col as isize - from.col as isize;
        let row_abs = row_delta.unsigned_abs();
        let col_abs = col_delta.unsigned_abs();
        Evaluation {
            row_abs,
            col_abs,
            manhattan: row_abs + col_abs,
            row_delta,
            col_delta,
            euclidean: (row_abs as f64).hypot(col_abs as f64),
        }
    }

    pub fn metric(&self, heuristic: Heuristic) -> f64 {
        match heuristic {
            Heuristic::Manhattan => self.manhattan as f64,
            Heuristic::Euclidean => self.euclidean,
        }
    }
}

/// Heuristic value of every walkable cell (start, goal and marked cells
/// included); walls map to `None`.
pub fn heuristic_map(
    raw: &RawGrid,
    alphabet: &SymbolAlphabet,
    heuristic: Heuristic,
) -> Result<Vec<Vec<Option<f64>>>> {
    let goal = raw
        .locate(alphabet.goal)
        .ok_or(InvalidMapReason::MissingEndpoints)?;
    Ok(raw
        .rows()
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, &symbol)| {
                    alphabet
                        .is_walkable(symbol)
                        .then(|| heuristic.cost(Position::new(row, col), goal))
                })
                .collect()
        })
        .collect())
}
