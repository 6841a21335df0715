//! Grid pathfinding engine: depth-first, breadth-first, steepest-ascent hill
//! climbing and A* over a 2-D grid of passable and impassable cells.
//!
//! A [`RawGrid`] of symbols is classified into a [`ClassifiedGrid`] for each
//! search; a [`SearchStrategy`] then produces a [`Path`] from the start to the
//! goal or a [`SearchError`]. [`Runner`] ties these together and drives the
//! grid source, renderer and notification sink collaborators.

pub mod algorithms;
pub mod collaborators;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod runner;
pub mod statistics;

pub use algorithms::{Algorithm, SearchStrategy};
pub use config::SymbolAlphabet;
pub use error::{InvalidMapReason, Result, SearchError};
pub use grid::{Cell, ClassifiedGrid, Position, RawGrid};
pub use heuristic::Heuristic;
pub use node::{Path, SearchNode};
pub use runner::Runner;
pub use statistics::SearchReport;
