#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod census;
pub mod error;
pub mod graph;
pub mod triad;
pub mod utils;

pub use census::Census;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use triad::{GraphKind, TriadClass};

// Denotes edge direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    OUT,
    IN,
    BOTH,
}
