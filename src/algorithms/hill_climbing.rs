use crate::algorithms::common::{expand, SearchStrategy};
use crate::direction::prioritize;
use crate::error::{Result, SearchError};
use crate::grid::ClassifiedGrid;
use crate::heuristic::Heuristic;
use crate::node::{Path, SearchNode};
use log::{debug, trace};

/// Steepest-ascent hill climbing.
///
/// Keeps only the current node and always moves to the neighbour with the
/// lowest heuristic, as long as that neighbour is no worse than where it
/// stands. Incomplete: it gives up at a local optimum even if a path exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct HillClimbing;

impl SearchStrategy for HillClimbing {
    fn find_path(&self, grid: &mut ClassifiedGrid, heuristic: Heuristic) -> Result<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        debug!("hill climbing from {} to {} ({:?})", start, goal, heuristic);

        grid.visit(start);
        let mut current = SearchNode::root(start, heuristic.cost(start, goal));
        let mut steps = Vec::new();

        while current.position != goal {
            let order = prioritize(current.position, goal);
            // min_by keeps the first of equal candidates, so ties follow `order`.
            let best = expand(grid, current.position, order)
                .map(|position| current.successor(position, heuristic.cost(position, goal)))
                .min_by(|a, b| a.heuristic_cost.total_cmp(&b.heuristic_cost));

            match best {
                None => {
                    let explored = grid.visited_count();
                    debug!("hill climbing hit a dead end at {}", current.position);
                    return Err(SearchError::NoPathFound { explored });
                }
                Some(next) if next.heuristic_cost <= current.heuristic_cost => {
                    trace!("climb to {} (h = {})", next.position, next.heuristic_cost);
                    steps.push(next.position);
                    current = next;
                }
                Some(next) => {
                    debug!(
                        "hill climbing stalled at {} (h = {}, best neighbour h = {})",
                        current.position, current.heuristic_cost, next.heuristic_cost
                    );
                    return Err(SearchError::LocalOptimum {
                        at: current.position,
                        trail: Path::new(steps),
                    });
                }
            }
        }

        debug!("hill climbing reached the goal, {} moves", steps.len());
        Ok(Path::new(steps))
    }

    fn name(&self) -> &'static str {
        "Hill Climbing Search"
    }
}
