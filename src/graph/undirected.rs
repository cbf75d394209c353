use crate::graph::traits::{Adjacency, EdgeWeight, Graph, MutableGraph, NodeId};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// An undirected graph implementation using symmetric adjacency maps
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, P, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Payload for each node, e.g. its position on screen
    nodes: BTreeMap<N, P>,

    /// Edges for each node: node -> {neighbor -> weight}, stored in both directions
    adjacency: Adjacency<N, W>,
}

impl<N, P, W> UndirectedGraph<N, P, W>
where
    N: NodeId,
    P: Debug,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Returns the payload stored for a node
    pub fn payload(&self, id: &N) -> Option<&P> {
        self.nodes.get(id)
    }

    /// Returns an iterator over all nodes and their payloads, ordered by id
    pub fn nodes(&self) -> impl Iterator<Item = (&N, &P)> + '_ {
        self.nodes.iter()
    }

    /// Returns every undirected edge once as `(a, b, weight)` with `a <= b`
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| *b >= a)
                .map(move |(b, w)| (a, b, *w))
        })
    }
}

impl<N, P, W> Default for UndirectedGraph<N, P, W>
where
    N: NodeId,
    P: Debug,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P, W> Graph<N, W> for UndirectedGraph<N, P, W>
where
    N: NodeId,
    P: Debug,
    W: EdgeWeight,
{
    fn adjacency_view(&self) -> &Adjacency<N, W> {
        &self.adjacency
    }
}

impl<N, P, W> MutableGraph<N, W> for UndirectedGraph<N, P, W>
where
    N: NodeId,
    P: Debug,
    W: EdgeWeight,
{
    type Payload = P;

    fn add_node(&mut self, id: N, payload: P) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }

        self.adjacency.insert(id.clone(), BTreeMap::new());
        self.nodes.insert(id, payload);
        true
    }

    fn add_edge(&mut self, a: N, b: N, weight: W) -> bool {
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            log::debug!("ignoring edge {:?}-{:?}: endpoint not in graph", a, b);
            return false;
        }

        // Both endpoints checked above, so neither lookup can miss
        if let Some(neighbors) = self.adjacency.get_mut(&a) {
            neighbors.insert(b.clone(), weight);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.insert(a, weight);
        }
        true
    }
}
