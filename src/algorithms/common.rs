use crate::direction::Direction;
use crate::error::Result;
use crate::grid::{ClassifiedGrid, Position};
use crate::heuristic::Heuristic;
use crate::node::Path;

pub trait SearchStrategy {
    /// Searches `grid` from its start to its goal.
    ///
    /// `grid` must be freshly classified: its visited flags become this
    /// search's traversal state and are left set afterwards.
    fn find_path(&self, grid: &mut ClassifiedGrid, heuristic: Heuristic) -> Result<Path>;

    fn name(&self) -> &'static str;
}

/// Lazily yields the eligible neighbours of a cell in a given order,
/// marking each one visited as it is produced.
///
/// Stopping early leaves the remaining neighbours untouched.
pub struct Expansion<'g> {
    grid: &'g mut ClassifiedGrid,
    from: Position,
    order: [Direction; 4],
    next: usize,
}

pub fn expand(grid: &mut ClassifiedGrid, from: Position, order: [Direction; 4]) -> Expansion<'_> {
    Expansion {
        grid,
        from,
        order,
        next: 0,
    }
}

impl Iterator for Expansion<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(&direction) = self.order.get(self.next) {
            self.next += 1;
            let Some(candidate) = self.grid.neighbor(self.from, direction) else {
                continue;
            };
            if self.grid.is_eligible(candidate) {
                self.grid.visit(candidate);
                return Some(candidate);
            }
        }
        None
    }
}
