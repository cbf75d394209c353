//! Link-state style routing table derived from a completed run.

use serde::Serialize;
use std::fmt;

use crate::algorithm::snapshot::{Distance, StateSnapshot};
use crate::algorithm::ShortestPathTree;
use crate::graph::{EdgeWeight, NodeId};

/// One destination as seen from the source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingRow<N, W> {
    pub destination: N,
    pub cost: Distance<W>,
    /// First node to forward to; `None` when the destination is unreachable
    pub next_hop: Option<N>,
}

/// Destination -> cost -> next hop for every node other than the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingTable<N, W> {
    pub source: N,
    pub rows: Vec<RoutingRow<N, W>>,
}

impl<N, W> RoutingTable<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Builds the table from a completed tree, rows ordered by destination
    pub fn from_tree(tree: &ShortestPathTree<N, W>) -> Self {
        let rows = tree
            .distances
            .iter()
            .filter(|(node, _)| **node != tree.source)
            .map(|(node, cost)| RoutingRow {
                destination: node.clone(),
                cost: *cost,
                next_hop: tree.next_hop(node),
            })
            .collect();

        RoutingTable {
            source: tree.source.clone(),
            rows,
        }
    }

    /// Builds the table from the final snapshot of a run, `None` for any other snapshot
    pub fn from_snapshot(snapshot: &StateSnapshot<N, W>) -> Option<Self> {
        ShortestPathTree::from_snapshot(snapshot).map(|tree| Self::from_tree(&tree))
    }

    pub fn row(&self, destination: &N) -> Option<&RoutingRow<N, W>> {
        self.rows.iter().find(|row| row.destination == *destination)
    }
}

impl<N, W> fmt::Display for RoutingTable<N, W>
where
    N: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routing Table for Source Node: {}", self.source)?;
        writeln!(f, "{:<12} | {:<10} | {:<10}", "Destination", "Cost", "Next Hop")?;
        writeln!(f, "{}", "-".repeat(38))?;
        for row in &self.rows {
            let next_hop = match &row.next_hop {
                Some(hop) => hop.to_string(),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<12} | {:<10} | {:<10}",
                row.destination.to_string(),
                row.cost,
                next_hop
            )?;
        }
        Ok(())
    }
}
