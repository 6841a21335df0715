use crate::algorithms::Algorithm;
use crate::error::SearchError;
use crate::grid::{ClassifiedGrid, Position};
use crate::node::Path;
use pathfinding::prelude::bfs;
use std::fmt;
use std::time::Duration;

/// Everything known about one successful search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub start: Position,
    pub path: Path,
    pub height: usize,
    pub width: usize,
    pub elapsed: Duration,
    /// Cells marked visited by the search.
    pub explored: usize,
    pub optimal_path_length: usize,
    pub route_efficiency: f64,
}

impl SearchReport {
    /// `grid` is the grid the search ran on, after the search.
    pub fn new(
        algorithm: Algorithm,
        grid: &ClassifiedGrid,
        path: Path,
        elapsed: Duration,
        optimal_path_length: usize,
    ) -> Self {
        let mut report = SearchReport {
            algorithm,
            start: grid.start(),
            path,
            height: grid.height(),
            width: grid.width(),
            elapsed,
            explored: grid.visited_count(),
            optimal_path_length,
            route_efficiency: 0.0,
        };
        report.calculate_efficiency();
        report
    }

    /// Moves taken over the fewest possible; 1.0 is optimal.
    pub fn calculate_efficiency(&mut self) {
        if !self.path.is_empty() && self.optimal_path_length > 0 {
            self.route_efficiency = self.path.len() as f64 / self.optimal_path_length as f64;
        } else {
            self.route_efficiency = 0.0;
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.path.len() == self.optimal_path_length
    }

    /// Cells in the listed route, start included.
    pub fn listed_length(&self) -> usize {
        self.path.len() + 1
    }

    /// The text handed to a notification sink.
    pub fn summary(&self) -> String {
        format!(
            "Method: {}\nTime ms: {}\nMap Size: {}x{}\nResults: {}\nLength: {}",
            self.algorithm,
            self.elapsed.as_millis(),
            self.height,
            self.width,
            self.path.listing(self.start),
            self.listed_length()
        )
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.algorithm)?;
        writeln!(f, "Total Moves: {}", self.path.len())?;
        writeln!(f, "Optimal Path Length: {}", self.optimal_path_length)?;
        writeln!(f, "Cells Explored: {}", self.explored)?;
        writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;

        if self.route_efficiency > 1.0 {
            let extra = self.path.len().saturating_sub(self.optimal_path_length);
            writeln!(f, "Note: {} moves longer than the shortest route", extra)?;
        }

        Ok(())
    }
}

/// Summary for a search that did not produce a path.
pub fn failure_summary(
    algorithm: Algorithm,
    height: usize,
    width: usize,
    error: &SearchError,
) -> String {
    format!(
        "Method: {}\nTime ms: \nMap Size: {}x{}\nResults: {}\nLength: ",
        algorithm, height, width, error
    )
}

/// Fewest moves from start to goal, ignoring visitation state.
pub fn optimal_path_length(grid: &ClassifiedGrid) -> Option<usize> {
    let goal = grid.goal();
    bfs(
        &grid.start(),
        |&pos| grid.passable_neighbors(pos).collect::<Vec<_>>(),
        |&pos| pos == goal,
    )
    .map(|route| route.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SymbolAlphabet;
    use crate::grid::RawGrid;

    fn classified(rows: &[&str]) -> ClassifiedGrid {
        let raw = RawGrid::from_rows(rows).unwrap();
        ClassifiedGrid::classify(&raw, &SymbolAlphabet::default()).unwrap()
    }

    #[test]
    fn optimal_length_uses_passable_cells() {
        let grid = classified(&["#****", "----*", "*****", "*----", "****$"]);
        assert_eq!(optimal_path_length(&grid), Some(16));
        let sealed = classified(&["#****", "-----", "*****", "*****", "****$"]);
        assert_eq!(optimal_path_length(&sealed), None);
    }

    #[test]
    fn summary_lists_start_and_counts_it() {
        let grid = classified(&["#$***", "*****", "*****", "*****", "*****"]);
        let path = Path::new(vec![Position::new(0, 1)]);
        let report = SearchReport::new(
            Algorithm::BreadthFirst,
            &grid,
            path,
            Duration::from_millis(3),
            1,
        );
        assert_eq!(
            report.summary(),
            "Method: Breadth-First Search\nTime ms: 3\nMap Size: 5x5\nResults: [(0,0),(0,1)]\nLength: 2"
        );
        assert!(report.is_optimal());
        assert_eq!(report.route_efficiency, 1.0);
    }

    #[test]
    fn efficiency_compares_to_optimal() {
        let grid = classified(&["#****", "*****", "*****", "*****", "****$"]);
        let steps = (0..12).map(|c| Position::new(0, c % 5)).collect();
        let report = SearchReport::new(
            Algorithm::DepthFirst,
            &grid,
            Path::new(steps),
            Duration::ZERO,
            8,
        );
        assert!((report.route_efficiency - 1.5).abs() < 1e-12);
        assert!(report.to_string().contains("4 moves longer"));
    }

    #[test]
    fn failure_summary_carries_message() {
        let error = SearchError::NoPathFound { explored: 3 };
        let text = failure_summary(Algorithm::AStar, 6, 7, &error);
        assert!(text.starts_with("Method: A* Search\n"));
        assert!(text.contains("Map Size: 6x7"));
        assert!(text.contains("no path between start and goal"));
    }
}
