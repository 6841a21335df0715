use crate::algorithms::common::{expand, SearchStrategy};
use crate::direction::STATIC_ORDER;
use crate::error::{Result, SearchError};
use crate::grid::{ClassifiedGrid, Position};
use crate::heuristic::Heuristic;
use crate::node::{Path, SearchNode, Trail};
use log::{debug, trace};
use std::collections::VecDeque;

/// Breadth-first search. Expands in non-decreasing depth, so the first time
/// the goal is generated it is reached by a shortest path.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

/// Outcome of expanding one queued node.
enum Step {
    Continue,
    Found(SearchNode),
}

impl BreadthFirst {
    fn expand_node(
        grid: &mut ClassifiedGrid,
        trail: &mut Trail,
        queue: &mut VecDeque<usize>,
        parent: SearchNode,
        goal: Position,
    ) -> Step {
        for position in expand(grid, parent.position, STATIC_ORDER) {
            let node = parent.successor(position, 0.0);
            let index = trail.push(node);
            if position == goal {
                return Step::Found(node);
            }
            queue.push_back(index);
        }
        Step::Continue
    }
}

impl SearchStrategy for BreadthFirst {
    fn find_path(&self, grid: &mut ClassifiedGrid, _heuristic: Heuristic) -> Result<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        debug!("breadth-first search from {} to {}", start, goal);

        let mut trail = Trail::new();
        grid.visit(start);
        let mut queue = VecDeque::from([trail.push(SearchNode::root(start, 0.0))]);

        while let Some(index) = queue.pop_front() {
            let parent = trail[index];
            trace!("expand {} at depth {}", parent.position, parent.path_cost);
            if let Step::Found(node) = Self::expand_node(grid, &mut trail, &mut queue, parent, goal) {
                debug!(
                    "breadth-first reached the goal at depth {} after {} nodes",
                    node.path_cost,
                    trail.len()
                );
                return trail
                    .reconstruct(node.position)
                    .ok_or(SearchError::NoPathFound {
                        explored: grid.visited_count(),
                    });
            }
        }

        let explored = grid.visited_count();
        debug!("breadth-first exhausted the queue after {} cells", explored);
        Err(SearchError::NoPathFound { explored })
    }

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SymbolAlphabet;
    use crate::grid::RawGrid;

    fn search(rows: &[&str]) -> Result<Path> {
        let raw = RawGrid::from_rows(rows).unwrap();
        let mut grid = ClassifiedGrid::classify(&raw, &SymbolAlphabet::default()).unwrap();
        BreadthFirst.find_path(&mut grid, Heuristic::Manhattan)
    }

    #[test]
    fn finds_shortest_route_around_walls() {
        // Either side of the walls is a monotone route of 8 moves.
        let path = search(&["#***-", "*-*-*", "*-***", "*---*", "****$"]).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.last(), Some(Position::new(4, 4)));
        assert!(path.is_contiguous_from(Position::new(0, 0)));
    }

    #[test]
    fn stops_when_goal_is_generated() {
        let raw = RawGrid::from_rows(&["#$***", "*****", "*****", "*****", "*****"]).unwrap();
        let mut grid = ClassifiedGrid::classify(&raw, &SymbolAlphabet::default()).unwrap();
        let path = BreadthFirst.find_path(&mut grid, Heuristic::Manhattan).unwrap();
        assert_eq!(path.steps(), &[Position::new(0, 1)]);
        // Start, the cell below it, and the goal.
        assert_eq!(grid.visited_count(), 3);
    }

    #[test]
    fn reports_enclosed_goal() {
        let err = search(&["#****", "*****", "***--", "***-$", "***--"]).unwrap_err();
        assert!(matches!(err, SearchError::NoPathFound { explored } if explored == 19));
    }
}
