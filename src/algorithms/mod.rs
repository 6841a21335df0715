//! The four interchangeable search strategies.

pub mod a_star;
pub mod breadth_first;
pub mod common;
pub mod depth_first;
pub mod hill_climbing;

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use common::{expand, Expansion, SearchStrategy};
pub use depth_first::DepthFirst;
pub use hill_climbing::HillClimbing;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    HillClimbing,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::HillClimbing,
        Algorithm::AStar,
    ];

    pub fn strategy(self) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::DepthFirst => Box::new(DepthFirst),
            Algorithm::BreadthFirst => Box::new(BreadthFirst),
            Algorithm::HillClimbing => Box::new(HillClimbing),
            Algorithm::AStar => Box::new(AStar),
        }
    }

    pub fn name(self) -> &'static str {
        self.strategy().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
