use crate::algorithms::Algorithm;
use crate::heuristic::Heuristic;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Role a single map symbol plays once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Goal,
    Passable,
    Impassable,
    MarkedPath,
}

/// The fixed single-character alphabet maps are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolAlphabet {
    pub start: char,
    pub goal: char,
    pub passable: char,
    pub impassable: char,
    pub marked_path: char,
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        SymbolAlphabet {
            start: '#',
            goal: '$',
            passable: '*',
            impassable: '-',
            marked_path: '@',
        }
    }
}

impl SymbolAlphabet {
    /// Anything outside the alphabet is a wall.
    pub fn role(&self, symbol: char) -> Role {
        match symbol {
            s if s == self.start => Role::Start,
            s if s == self.goal => Role::Goal,
            s if s == self.passable => Role::Passable,
            s if s == self.marked_path => Role::MarkedPath,
            _ => Role::Impassable,
        }
    }

    /// True for every symbol a search may step on.
    pub fn is_walkable(&self, symbol: char) -> bool {
        !matches!(self.role(symbol), Role::Impassable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    HillClimbing,
    AStar,
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dfs => vec![Algorithm::DepthFirst],
            AlgorithmChoice::Bfs => vec![Algorithm::BreadthFirst],
            AlgorithmChoice::HillClimbing => vec![Algorithm::HillClimbing],
            AlgorithmChoice::AStar => vec![Algorithm::AStar],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Map file: a "<height> <width>" header followed by the rows
    #[arg(long, conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random map instead of reading one
    #[arg(long, default_value_t = false)]
    pub random: bool,

    /// Seed for --random, for reproducible maps
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::AStar)]
    pub algorithm: AlgorithmChoice,

    #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
    pub heuristic: Heuristic,

    /// Print the heuristic value of every walkable cell
    #[arg(long, default_value_t = false)]
    pub evaluate: bool,

    /// Write the path-marked map to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbols_are_walls() {
        let alphabet = SymbolAlphabet::default();
        assert_eq!(alphabet.role('#'), Role::Start);
        assert_eq!(alphabet.role('$'), Role::Goal);
        assert_eq!(alphabet.role('*'), Role::Passable);
        assert_eq!(alphabet.role('@'), Role::MarkedPath);
        assert_eq!(alphabet.role('-'), Role::Impassable);
        assert_eq!(alphabet.role('x'), Role::Impassable);
        assert!(alphabet.is_walkable('@'));
        assert!(!alphabet.is_walkable('?'));
    }

    #[test]
    fn cli_defaults() {
        let config = Config::parse_from(["grid_pathfinding", "--random"]);
        assert_eq!(config.algorithm, AlgorithmChoice::AStar);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert!(config.map.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn all_expands_to_every_strategy() {
        assert_eq!(AlgorithmChoice::All.algorithms().len(), 4);
        assert_eq!(AlgorithmChoice::Bfs.algorithms(), vec![Algorithm::BreadthFirst]);
    }
}
