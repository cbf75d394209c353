pub mod traits;
pub mod snapshot;
pub mod stepper;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
