use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::snapshot::{Distance, StateSnapshot};
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::Result;

/// Completed shortest path tree from a source node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Distances from source to each node
    pub distances: BTreeMap<N, Distance<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: BTreeMap<N, Option<N>>,

    /// Source node ID
    pub source: N,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Builds the tree from the terminal snapshot of a run, rooted at the run's
    /// start node. Returns `None` for any snapshot without a predecessor table.
    pub fn from_snapshot(snapshot: &StateSnapshot<N, W>) -> Option<Self> {
        let predecessors = snapshot.predecessors()?.clone();
        Some(ShortestPathTree {
            distances: snapshot.distances().clone(),
            predecessors,
            source: snapshot.start().clone(),
        })
    }

    pub fn distance(&self, node: &N) -> Distance<W> {
        self.distances.get(node).copied().unwrap_or(Distance::Infinite)
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_finite()
    }

    /// Sequence of nodes from the source to `target`, or `None` if unreachable
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        let mut seen = BTreeSet::new();

        while *current != self.source {
            if !seen.insert(current) {
                log::warn!("cycle in predecessor chain at {:?}", current);
                return None;
            }
            current = self.predecessor(current)?;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }

    /// First node after the source on the way to `destination`.
    ///
    /// Walks the predecessor chain back from the destination until it reaches a
    /// node whose predecessor is the source, or a node with no predecessor.
    pub fn next_hop(&self, destination: &N) -> Option<N> {
        if *destination == self.source {
            return None;
        }

        let mut hop = self.predecessor(destination)?;
        if *hop == self.source {
            return Some(destination.clone());
        }

        let mut seen = BTreeSet::new();
        while let Some(pred) = self.predecessor(hop) {
            if *pred == self.source {
                break;
            }
            if !seen.insert(hop) {
                log::warn!("cycle in predecessor chain at {:?}", hop);
                return None;
            }
            hop = pred;
        }

        Some(hop.clone())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: EdgeWeight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathTree<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}
