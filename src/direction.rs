use crate::grid::Position;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

use Direction::{Down, Left, Right, Up};

/// Fixed scan order of the uninformed searches.
pub const STATIC_ORDER: [Direction; 4] = [Down, Right, Up, Left];

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// (row, column) offset of one step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        };
        f.write_str(name)
    }
}

/// Toward the goal on both axes first, then away from it in reverse.
const fn ranked(primary: Direction, secondary: Direction) -> [Direction; 4] {
    [primary, secondary, secondary.opposite(), primary.opposite()]
}

// [primary axis][goal above][goal to the left]; axis 0 is rows.
const ORDER_TABLE: [[[[Direction; 4]; 2]; 2]; 2] = [
    [
        [ranked(Down, Right), ranked(Down, Left)],
        [ranked(Up, Right), ranked(Up, Left)],
    ],
    [
        [ranked(Right, Down), ranked(Left, Down)],
        [ranked(Right, Up), ranked(Left, Up)],
    ],
];

/// Goal-relative move order used by the informed searches.
///
/// The axis with the larger distance to the goal leads, rows winning ties.
/// A zero delta counts as "toward" the down/right side.
pub fn prioritize(current: Position, goal: Position) -> [Direction; 4] {
    let row_delta = goal.row as isize - current.row as isize;
    let col_delta = goal.col as isize - current.col as isize;
    let axis = usize::from(row_delta.abs() < col_delta.abs());
    let above = usize::from(row_delta < 0);
    let left = usize::from(col_delta < 0);
    ORDER_TABLE[axis][above][left]
}
