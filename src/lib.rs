//! Dijkstra Stepper - observable single-source shortest paths
//!
//! This library computes shortest paths over small weighted undirected graphs and
//! exposes every significant step of Dijkstra's algorithm (a node finalized, a
//! distance relaxed, the run completed) as an immutable snapshot that a caller
//! pulls one at a time, typically to drive a step-by-step visualization.
//!
//! Rendering and input handling live outside this crate. A caller builds an
//! [`UndirectedGraph`], picks a start node, and advances a [`DijkstraStepper`]
//! on its own cadence.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod routing;

pub use algorithm::{
    dijkstra::{Dijkstra, TieBreak},
    snapshot::{Distance, StateSnapshot, StepKind},
    stepper::DijkstraStepper,
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use routing::{RoutingRow, RoutingTable};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Negative weight not supported: edge {from}-{to} has weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Snapshot sequence exhausted")]
    Exhausted,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
