use dijkstra_stepper::graph::generators::{generate_random_graph, node_label, LabeledGraph, RandomGraphConfig};
use dijkstra_stepper::graph::Graph;
use dijkstra_stepper::{Dijkstra, Distance, ShortestPathAlgorithm};
use std::collections::{BTreeMap, BTreeSet};

// Cheapest cost to every node over all simple paths from `start`
fn all_paths_minimum(graph: &LabeledGraph, start: &String) -> BTreeMap<String, u32> {
    fn walk(
        graph: &LabeledGraph,
        node: &String,
        cost: u32,
        on_path: &mut BTreeSet<String>,
        best: &mut BTreeMap<String, u32>,
    ) {
        let entry = best.entry(node.clone()).or_insert(cost);
        if cost < *entry {
            *entry = cost;
        }
        for (next, weight) in graph.neighbors(node) {
            if on_path.insert(next.clone()) {
                walk(graph, next, cost + weight, on_path, best);
                on_path.remove(next);
            }
        }
    }

    let mut best = BTreeMap::new();
    let mut on_path = BTreeSet::from([start.clone()]);
    walk(graph, start, 0, &mut on_path, &mut best);
    best
}

fn check_against_brute_force(config: RandomGraphConfig) {
    let graph = generate_random_graph(&config);
    let start = node_label(0);
    let expected = all_paths_minimum(&graph, &start);

    let tree = Dijkstra::new()
        .compute_shortest_paths(&graph, start.clone())
        .unwrap();

    for (node, _) in graph.nodes() {
        match expected.get(node) {
            Some(cost) => {
                assert_eq!(
                    tree.distance(node),
                    Distance::Finite(*cost),
                    "seed {}: wrong distance to {}",
                    config.seed,
                    node
                );

                // The reconstructed path has to add up to the same cost
                let path = tree.path_to(node).unwrap();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(node));
                let total: u32 = path
                    .windows(2)
                    .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap())
                    .sum();
                assert_eq!(total, *cost, "seed {}: path cost mismatch", config.seed);
            }
            None => {
                assert_eq!(tree.distance(node), Distance::Infinite);
                assert_eq!(tree.predecessor(node), None);
                assert!(tree.path_to(node).is_none());
            }
        }
    }
}

#[test]
fn test_distances_match_brute_force_on_connected_graphs() {
    for seed in 0..40 {
        check_against_brute_force(RandomGraphConfig {
            node_count: 7,
            edges_per_node: 1,
            max_weight: 9,
            seed,
            ..Default::default()
        });
    }
}

#[test]
fn test_distances_match_brute_force_on_sparse_graphs() {
    for seed in 100..140 {
        check_against_brute_force(RandomGraphConfig {
            node_count: 8,
            edges_per_node: 1,
            max_weight: 4,
            seed,
            connected: false,
            ..Default::default()
        });
    }
}

#[test]
fn test_distances_match_brute_force_with_zero_weights() {
    for seed in 200..210 {
        check_against_brute_force(RandomGraphConfig {
            node_count: 6,
            edges_per_node: 1,
            max_weight: 0,
            seed,
            ..Default::default()
        });
    }
}
