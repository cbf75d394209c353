use std::collections::BTreeMap;
use std::fmt::Debug;
use num_traits::{Bounded, Zero};
use std::ops::Sub;

use crate::Result;

/// Identifier of a node. `Ord` keeps every table and neighbor walk deterministic.
pub trait NodeId: Clone + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Ord + Debug {}

/// Weight of an edge, e.g. `u32` or `OrderedFloat<f64>`
pub trait EdgeWeight: Copy + Ord + Zero + Bounded + Sub<Output = Self> + Debug {}

impl<T> EdgeWeight for T where T: Copy + Ord + Zero + Bounded + Sub<Output = T> + Debug {}

/// Sum of two non-negative weights, `None` if it does not fit in `W`
pub fn checked_sum<W: EdgeWeight>(a: W, b: W) -> Option<W> {
    if b > W::max_value() - a {
        None
    } else {
        Some(a + b)
    }
}

/// Neighbor map for every node: node -> (neighbor -> weight)
pub type Adjacency<N, W> = BTreeMap<N, BTreeMap<N, W>>;

/// Trait representing a weighted undirected graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Returns the full adjacency mapping, read-only
    fn adjacency_view(&self) -> &Adjacency<N, W>;

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize {
        self.adjacency_view().len()
    }

    /// Returns the number of undirected edges in the graph, each counted once
    fn edge_count(&self) -> usize {
        self.adjacency_view()
            .iter()
            .map(|(node, neighbors)| neighbors.keys().filter(|other| *other >= node).count())
            .sum()
    }

    /// Returns an iterator over the neighbors of a node with their edge weights
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>
    where
        N: 'a,
        W: 'a,
    {
        match self.adjacency_view().get(node) {
            Some(neighbors) => Box::new(neighbors.iter().map(|(n, w)| (n, *w))),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool {
        self.adjacency_view().contains_key(node)
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, a: &N, b: &N) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: &N, b: &N) -> Option<W> {
        self.adjacency_view().get(a).and_then(|neighbors| neighbors.get(b)).copied()
    }

    /// Returns the first negative edge as an error, if any
    fn validate_non_negative(&self) -> Result<()> {
        validate_non_negative(self.adjacency_view())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Presentation data stored with each node, unused by the algorithms
    type Payload;

    /// Adds a node with no neighbors. Returns false if the id already exists,
    /// in which case the stored payload is kept.
    fn add_node(&mut self, id: N, payload: Self::Payload) -> bool;

    /// Adds or overwrites the undirected edge `a`-`b`. Returns false and leaves
    /// the graph untouched if either endpoint is missing.
    fn add_edge(&mut self, a: N, b: N, weight: W) -> bool;
}

/// Checks every edge of an adjacency map for a negative weight
pub fn validate_non_negative<N, W>(adjacency: &Adjacency<N, W>) -> Result<()>
where
    N: NodeId,
    W: EdgeWeight,
{
    for (from, neighbors) in adjacency {
        for (to, weight) in neighbors {
            if *weight < W::zero() {
                log::warn!("rejecting negative edge {:?}-{:?} ({:?})", from, to, weight);
                return Err(crate::Error::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: format!("{:?}", weight),
                });
            }
        }
    }
    Ok(())
}
