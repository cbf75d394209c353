use crate::graph::{MutableGraph, UndirectedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Graph with letter labels, `(x, y)` positions and integer weights
pub type LabeledGraph = UndirectedGraph<String, (f64, f64), u32>;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub node_count: usize,
    /// Extra edges attempted per node, on top of the spanning edges
    pub edges_per_node: usize,
    /// Weights are drawn from `1..=max_weight`; zero allows zero-weight edges
    pub max_weight: u32,
    pub seed: u64,
    /// Link every node to an earlier one so the whole graph is reachable
    pub connected: bool,
    /// Width and height of the area node positions are drawn from
    pub canvas: (f64, f64),
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            node_count: 8,
            edges_per_node: 1,
            max_weight: 20,
            seed: 42,
            connected: true,
            canvas: (1280.0, 720.0),
        }
    }
}

/// Spreadsheet-style label for the i-th node: A..Z, AA..AZ, BA..
pub fn node_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Generates a small random labeled graph, reproducible for a given seed
pub fn generate_random_graph(config: &RandomGraphConfig) -> LabeledGraph {
    let mut graph = UndirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let (width, height) = config.canvas;

    let labels: Vec<String> = (0..config.node_count).map(node_label).collect();
    for label in &labels {
        let pos = (rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
        graph.add_node(label.clone(), pos);
    }

    let draw_weight = |rng: &mut StdRng| {
        if config.max_weight == 0 {
            0
        } else {
            rng.gen_range(1..=config.max_weight)
        }
    };

    if config.connected {
        for i in 1..labels.len() {
            let j = rng.gen_range(0..i);
            let weight = draw_weight(&mut rng);
            graph.add_edge(labels[i].clone(), labels[j].clone(), weight);
        }
    }

    if labels.len() > 1 {
        for i in 0..labels.len() {
            for _ in 0..config.edges_per_node {
                let j = rng.gen_range(0..labels.len());
                // Avoid self-loops
                if i != j {
                    let weight = draw_weight(&mut rng);
                    graph.add_edge(labels[i].clone(), labels[j].clone(), weight);
                }
            }
        }
    }

    log::debug!(
        "generated graph with {} nodes (seed {})",
        config.node_count,
        config.seed
    );

    graph
}
