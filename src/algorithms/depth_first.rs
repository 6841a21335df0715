use crate::algorithms::common::{expand, SearchStrategy};
use crate::direction::STATIC_ORDER;
use crate::error::{Result, SearchError};
use crate::grid::ClassifiedGrid;
use crate::heuristic::Heuristic;
use crate::node::Path;
use log::{debug, trace};

/// Depth-first search over an explicit stack of positions.
///
/// Complete on a finite grid, but the path it returns follows the fixed
/// scan order and is usually not the shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn find_path(&self, grid: &mut ClassifiedGrid, _heuristic: Heuristic) -> Result<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        debug!("depth-first search from {} to {}", start, goal);

        grid.visit(start);
        let mut stack = vec![start];

        while let Some(&top) = stack.last() {
            match expand(grid, top, STATIC_ORDER).next() {
                Some(next) if next == goal => {
                    let mut steps = stack[1..].to_vec();
                    steps.push(goal);
                    debug!("depth-first reached the goal, {} moves", steps.len());
                    return Ok(Path::new(steps));
                }
                Some(next) => {
                    trace!("push {}", next);
                    stack.push(next);
                }
                None => {
                    trace!("backtrack from {}", top);
                    stack.pop();
                }
            }
        }

        let explored = grid.visited_count();
        debug!("depth-first exhausted the stack after {} cells", explored);
        Err(SearchError::NoPathFound { explored })
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }
}
