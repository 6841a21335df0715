//! Error types for the search engine.

use crate::grid::Position;
use crate::node::Path;
use std::fmt;
use thiserror::Error;

/// Why a raw grid was rejected before any search could start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMapReason {
    Empty,
    BadHeader,
    TooSmall,
    NotRectangular,
    MissingEndpoints,
    NoRoomForEndpoints,
}

impl fmt::Display for InvalidMapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMapReason::Empty => "the map is empty",
            InvalidMapReason::BadHeader => "the map header must be \"<height> <width>\"",
            InvalidMapReason::TooSmall => "map height and width must be greater than 4",
            InvalidMapReason::NotRectangular => "every row must have the declared width",
            InvalidMapReason::MissingEndpoints => "there must be a start cell and a goal cell",
            InvalidMapReason::NoRoomForEndpoints => {
                "no passable cell with a passable neighbour is left for the start or goal"
            }
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid map: {0}")]
    InvalidMap(InvalidMapReason),

    /// The frontier ran dry. `explored` counts the cells marked visited.
    #[error("Every reachable cell was checked and no path between start and goal was found")]
    NoPathFound { explored: usize },

    /// Greedy climbing stalled; `trail` is the partial route it walked.
    #[error("Could not reach the goal: stuck at a local optimum at {at}")]
    LocalOptimum { at: Position, trail: Path },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InvalidMapReason> for SearchError {
    fn from(reason: InvalidMapReason) -> Self {
        SearchError::InvalidMap(reason)
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
