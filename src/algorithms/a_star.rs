use crate::algorithms::common::{expand, SearchStrategy};
use crate::direction::prioritize;
use crate::error::{Result, SearchError};
use crate::grid::ClassifiedGrid;
use crate::heuristic::Heuristic;
use crate::node::{Path, SearchNode, Trail};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Open-list entry. `Ord` is reversed so the `BinaryHeap` pops the lowest
/// total cost first, then the lowest path cost, then the oldest entry.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    node: SearchNode,
    seq: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .total_cost()
            .total_cmp(&self.node.total_cost())
            .then_with(|| other.node.path_cost.cmp(&self.node.path_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A* search with a binary-heap open list and a closed trail used for
/// path reconstruction.
///
/// Cells are marked visited when generated and never reopened. Preferring
/// the shallower node on equal total cost keeps the result optimal for the
/// consistent heuristics offered here.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn find_path(&self, grid: &mut ClassifiedGrid, heuristic: Heuristic) -> Result<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        debug!("A* search from {} to {} ({:?})", start, goal, heuristic);

        let mut open = BinaryHeap::new();
        let mut closed = Trail::new();
        let mut seq = 0;

        grid.visit(start);
        open.push(OpenEntry {
            node: SearchNode::root(start, heuristic.cost(start, goal)),
            seq,
        });

        while let Some(OpenEntry { node: current, .. }) = open.pop() {
            closed.push(current);
            if current.position == goal {
                debug!(
                    "A* reached the goal at cost {} after closing {} nodes",
                    current.path_cost,
                    closed.len()
                );
                return closed.reconstruct(goal).ok_or(SearchError::NoPathFound {
                    explored: grid.visited_count(),
                });
            }

            trace!(
                "close {} (g = {}, h = {})",
                current.position,
                current.path_cost,
                current.heuristic_cost
            );
            let order = prioritize(current.position, goal);
            for position in expand(grid, current.position, order) {
                seq += 1;
                open.push(OpenEntry {
                    node: current.successor(position, heuristic.cost(position, goal)),
                    seq,
                });
            }
        }

        let explored = grid.visited_count();
        debug!("A* exhausted the open list after {} cells", explored);
        Err(SearchError::NoPathFound { explored })
    }

    fn name(&self) -> &'static str {
        "A* Search"
    }
}
