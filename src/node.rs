use crate::grid::Position;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// Cost of one move between cardinal neighbours.
pub const EDGE_WEIGHT: u32 = 1;

/// One generated search state. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub position: Position,
    /// `None` only for the start node.
    pub predecessor: Option<Position>,
    pub path_cost: u32,
    pub heuristic_cost: f64,
}

impl SearchNode {
    pub fn root(position: Position, heuristic_cost: f64) -> Self {
        SearchNode {
            position,
            predecessor: None,
            path_cost: 0,
            heuristic_cost,
        }
    }

    pub fn successor(&self, position: Position, heuristic_cost: f64) -> Self {
        SearchNode {
            position,
            predecessor: Some(self.position),
            path_cost: self.path_cost + EDGE_WEIGHT,
            heuristic_cost,
        }
    }

    pub fn total_cost(&self) -> f64 {
        f64::from(self.path_cost) + self.heuristic_cost
    }
}

/// Append-only node store, indexed by insertion order and by position.
#[derive(Debug, Default)]
pub struct Trail {
    nodes: Vec<SearchNode>,
    by_position: FxHashMap<Position, usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node's index. A position is recorded once; later pushes
    /// of the same position keep the first index.
    pub fn push(&mut self, node: SearchNode) -> usize {
        let index = self.nodes.len();
        let recorded = *self.by_position.entry(node.position).or_insert(index);
        if recorded == index {
            self.nodes.push(node);
        }
        recorded
    }

    pub fn get(&self, index: usize) -> Option<&SearchNode> {
        self.nodes.get(index)
    }

    pub fn node_at(&self, position: Position) -> Option<&SearchNode> {
        self.by_position.get(&position).map(|&index| &self.nodes[index])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follows predecessor links back from `goal` to the start node.
    /// The returned path excludes the start and ends at `goal`.
    pub fn reconstruct(&self, goal: Position) -> Option<Path> {
        let mut steps = Vec::new();
        let mut node = self.node_at(goal)?;
        while let Some(previous) = node.predecessor {
            steps.push(node.position);
            node = self.node_at(previous)?;
        }
        steps.reverse();
        Some(Path::new(steps))
    }
}

impl Index<usize> for Trail {
    type Output = SearchNode;

    fn index(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }
}

/// Route from the cell after the start up to and including the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Position>,
}

impl Path {
    pub fn new(steps: Vec<Position>) -> Self {
        Path { steps }
    }

    pub fn steps(&self) -> &[Position] {
        &self.steps
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<Position> {
        self.steps.last().copied()
    }

    /// True when every step is a single cardinal move from the one before,
    /// starting at `start`.
    pub fn is_contiguous_from(&self, start: Position) -> bool {
        let mut previous = start;
        self.steps.iter().all(|&pos| {
            let adjacent = previous.row.abs_diff(pos.row) + previous.col.abs_diff(pos.col) == 1;
            previous = pos;
            adjacent
        })
    }

    /// `[(r,c),...]` with `start` listed first.
    pub fn listing(&self, start: Position) -> String {
        let cells: Vec<String> = std::iter::once(start)
            .chain(self.steps.iter().copied())
            .map(|pos| pos.to_string())
            .collect();
        format!("[{}]", cells.join(","))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.steps.iter().map(Position::to_string).collect();
        write!(f, "[{}]", cells.join(","))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
