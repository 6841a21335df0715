use crate::algorithms::Algorithm;
use crate::collaborators::{NotificationSink, Renderer};
use crate::config::SymbolAlphabet;
use crate::error::{Result, SearchError};
use crate::grid::{ClassifiedGrid, RawGrid};
use crate::heuristic::Heuristic;
use crate::statistics::{failure_summary, optimal_path_length, SearchReport};
use log::{info, warn};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub outcome: Result<SearchReport>,
}

impl AlgorithmResult {
    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Public entry points. Every run classifies its own grid from the raw one,
/// so no visitation state leaks between searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    alphabet: SymbolAlphabet,
    heuristic: Heuristic,
}

impl Runner {
    pub fn new(alphabet: SymbolAlphabet, heuristic: Heuristic) -> Self {
        Runner {
            alphabet,
            heuristic,
        }
    }

    pub fn alphabet(&self) -> &SymbolAlphabet {
        &self.alphabet
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn classify(&self, raw: &RawGrid) -> Result<ClassifiedGrid> {
        ClassifiedGrid::classify(raw, &self.alphabet)
    }

    /// Runs one strategy on a freshly classified copy of `raw`.
    pub fn run(&self, algorithm: Algorithm, raw: &RawGrid) -> Result<SearchReport> {
        let mut grid = self.classify(raw)?;
        let optimal = optimal_path_length(&grid).unwrap_or(0);
        let strategy = algorithm.strategy();

        let clock = Instant::now();
        let path = strategy.find_path(&mut grid, self.heuristic);
        let elapsed = clock.elapsed();

        match path {
            Ok(path) => {
                info!(
                    "{}: {} moves (optimal {}) in {:.2?}",
                    algorithm,
                    path.len(),
                    optimal,
                    elapsed
                );
                Ok(SearchReport::new(algorithm, &grid, path, elapsed, optimal))
            }
            Err(err) => {
                info!("{}: failed in {:.2?}: {}", algorithm, elapsed, err);
                Err(err)
            }
        }
    }

    /// Runs every strategy on the same raw grid. An invalid map fails before
    /// any search starts.
    pub fn run_all(&self, raw: &RawGrid) -> Result<Vec<AlgorithmResult>> {
        self.classify(raw)?;
        Ok(Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                let clock = Instant::now();
                let outcome = self.run(algorithm, raw);
                let elapsed = match &outcome {
                    Ok(report) => report.elapsed,
                    Err(_) => clock.elapsed(),
                };
                AlgorithmResult {
                    algorithm,
                    elapsed,
                    outcome,
                }
            })
            .collect())
    }

    /// Runs one strategy and hands the outcome to the collaborators: the
    /// path-marked grid to `renderer`, the summary to `sink`.
    ///
    /// On failure the grid is still rendered (with the partial route, for a
    /// stalled hill climb), except when the map itself is invalid.
    pub fn execute(
        &self,
        algorithm: Algorithm,
        raw: &RawGrid,
        renderer: &mut dyn Renderer,
        sink: &mut dyn NotificationSink,
    ) -> Result<SearchReport> {
        match self.run(algorithm, raw) {
            Ok(report) => {
                renderer.render(&raw.with_path(&report.path, &self.alphabet))?;
                sink.notify(&report.summary());
                Ok(report)
            }
            Err(err) => {
                match &err {
                    SearchError::LocalOptimum { trail, .. } => {
                        renderer.render(&raw.with_path(trail, &self.alphabet))?
                    }
                    SearchError::NoPathFound { .. } => {
                        renderer.render(&raw.clear_marks(&self.alphabet))?
                    }
                    SearchError::InvalidMap(_) | SearchError::Io(_) => {
                        warn!("{}: map rejected: {}", algorithm, err)
                    }
                }
                sink.notify(&failure_summary(algorithm, raw.height(), raw.width(), &err));
                Err(err)
            }
        }
    }

    pub fn print_comparison_results(results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();

        println!(
            "{:<22} {:<8} {:<8} {:<8} {:<12} {:<10} {:<12}",
            "Algorithm", "Success", "Moves", "Optimal", "Efficiency", "Explored", "Time"
        );
        println!("{}", "-".repeat(84));

        for result in results {
            let success_str = if result.success() { "✓" } else { "✗" };
            let (moves, optimal, efficiency, explored) = match &result.outcome {
                Ok(report) => (
                    report.path.len().to_string(),
                    report.optimal_path_length.to_string(),
                    format!("{:.3}", report.route_efficiency),
                    report.explored.to_string(),
                ),
                Err(SearchError::NoPathFound { explored }) => {
                    ("-".into(), "-".into(), "-".into(), explored.to_string())
                }
                Err(_) => ("-".into(), "-".into(), "-".into(), "-".into()),
            };
            println!(
                "{:<22} {:<8} {:<8} {:<8} {:<12} {:<10} {:<12}",
                result.algorithm.name(),
                success_str,
                moves,
                optimal,
                efficiency,
                explored,
                format!("{:.2?}", result.elapsed)
            );
        }
        println!();

        for result in results {
            if let Err(err) = &result.outcome {
                println!("{}: {}", result.algorithm, err);
            }
        }

        let successful: Vec<&SearchReport> = results
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .collect();

        let (Some(shortest), Some(fastest)) = (
            successful.iter().min_by_key(|r| r.path.len()),
            successful.iter().min_by_key(|r| r.elapsed),
        ) else {
            println!("No algorithm reached the goal.");
            return;
        };

        println!("=== PERFORMANCE ANALYSIS ===");
        println!("Shortest route: {} ({} moves)", shortest.algorithm, shortest.path.len());
        println!("Fastest search: {} ({:.2?})", fastest.algorithm, fastest.elapsed);
        if let Some(longest) = successful.iter().max_by_key(|r| r.path.len()) {
            let difference = longest.path.len() - shortest.path.len();
            if difference > 0 {
                println!(
                    "Move count difference: {} moves ({:.1}% variation)",
                    difference,
                    (difference as f64 / shortest.path.len() as f64) * 100.0
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MemoryRenderer, MemorySink};
    use crate::error::InvalidMapReason;

    fn raw(rows: &[&str]) -> RawGrid {
        RawGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn runs_are_independent() {
        let runner = Runner::default();
        let grid = raw(&["#****", "*-*-*", "*****", "*-*-*", "****$"]);
        let first = runner.run(Algorithm::BreadthFirst, &grid).unwrap();
        let second = runner.run(Algorithm::BreadthFirst, &grid).unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.explored, second.explored);
    }

    #[test]
    fn run_all_rejects_invalid_map_up_front() {
        let runner = Runner::default();
        let grid = raw(&["#****", "*****", "*****", "*****", "*****"]);
        assert!(matches!(
            runner.run_all(&grid),
            Err(SearchError::InvalidMap(InvalidMapReason::MissingEndpoints))
        ));
    }

    #[test]
    fn execute_renders_marked_path() {
        let runner = Runner::default();
        let grid = raw(&["#****", "----*", "*****", "*----", "****$"]);
        let mut renderer = MemoryRenderer::default();
        let mut sink = MemorySink::default();
        let report = runner
            .execute(Algorithm::AStar, &grid, &mut renderer, &mut sink)
            .unwrap();
        assert_eq!(report.path.len(), 16);
        let frame = &renderer.frames[0];
        assert_eq!(frame.symbol(crate::grid::Position::new(0, 0)), '#');
        assert_eq!(frame.symbol(crate::grid::Position::new(4, 4)), '$');
        assert_eq!(frame.rows().flatten().filter(|&&s| s == '@').count(), 15);
        assert!(sink.messages[0].ends_with("Length: 17"));
    }

    #[test]
    fn execute_reports_failures() {
        let runner = Runner::default();
        let grid = raw(&["*****", "*-#-*", "*---*", "*****", "**$**"]);
        let mut renderer = MemoryRenderer::default();
        let mut sink = MemorySink::default();
        let err = runner
            .execute(Algorithm::HillClimbing, &grid, &mut renderer, &mut sink)
            .unwrap_err();
        assert!(matches!(err, SearchError::LocalOptimum { .. }));
        assert_eq!(renderer.frames.len(), 1);
        assert!(sink.messages[0].contains("local optimum"));

        let invalid = raw(&["*****", "*****", "*****", "*****", "**$**"]);
        runner
            .execute(Algorithm::AStar, &invalid, &mut renderer, &mut sink)
            .unwrap_err();
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(sink.messages.len(), 2);
    }
}
