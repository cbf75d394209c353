use dijkstra_stepper::graph::generators::{generate_random_graph, node_label, RandomGraphConfig};
use dijkstra_stepper::graph::Graph;
use dijkstra_stepper::{Dijkstra, RoutingTable};
use std::env;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [nodes] [edges_per_node] [seed]
    let args: Vec<String> = env::args().collect();
    let defaults = RandomGraphConfig::default();
    let config = RandomGraphConfig {
        node_count: args
            .get(1)
            .and_then(|a| a.parse().ok())
            .unwrap_or(defaults.node_count),
        edges_per_node: args
            .get(2)
            .and_then(|a| a.parse().ok())
            .unwrap_or(defaults.edges_per_node),
        seed: args
            .get(3)
            .and_then(|a| a.parse().ok())
            .unwrap_or(defaults.seed),
        ..defaults
    };

    let graph = generate_random_graph(&config);
    let start = node_label(0);
    log::info!(
        "running from {} over {} nodes and {} edges",
        start,
        graph.node_count(),
        graph.edge_count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stepper = Dijkstra::new().stepper(&graph, start)?;

    // One JSON object per snapshot, the last one carries the predecessors
    let mut last = None;
    for snapshot in stepper {
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        last = Some(snapshot);
    }

    if let Some(table) = last.and_then(|s| RoutingTable::from_snapshot(&s)) {
        writeln!(out)?;
        write!(out, "{}", table)?;
    }

    Ok(())
}
