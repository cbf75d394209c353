use crate::algorithm::stepper::DijkstraStepper;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::Result;

/// Order in which frontier entries with equal distance are popped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Smallest node identifier first
    #[default]
    NodeId,
    /// Entry pushed first comes out first
    InsertionOrder,
}

/// Classic Dijkstra's algorithm, run either to completion or one step at a time
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    tie_break: TieBreak,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            tie_break: TieBreak::default(),
        }
    }

    /// Sets how equal-distance frontier entries are ordered
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Starts an observable run from `start` over the graph's adjacency view.
    ///
    /// The graph stays borrowed until the returned stepper is dropped.
    pub fn stepper<'g, N, W, G>(&self, graph: &'g G, start: N) -> Result<DijkstraStepper<'g, N, W>>
    where
        N: NodeId,
        W: EdgeWeight,
        G: Graph<N, W>,
    {
        DijkstraStepper::with_tie_break(graph.adjacency_view(), start, self.tie_break)
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: EdgeWeight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>> {
        self.stepper(graph, source)?.run_to_completion()
    }
}
