pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::{checked_sum, validate_non_negative, Adjacency, EdgeWeight, Graph, MutableGraph, NodeId};
pub use undirected::UndirectedGraph;
