use dijkstra_stepper::graph::MutableGraph;
use dijkstra_stepper::{Dijkstra, Distance, RoutingTable, ShortestPathAlgorithm, UndirectedGraph};

// Two branches out of A plus an unreachable router F
fn branching_network() -> UndirectedGraph<&'static str, (), u32> {
    let mut graph = UndirectedGraph::new();
    for node in ["A", "B", "C", "D", "E", "F"] {
        graph.add_node(node, ());
    }
    graph.add_edge("A", "B", 1);
    graph.add_edge("A", "C", 1);
    graph.add_edge("B", "D", 1);
    graph.add_edge("C", "E", 1);
    graph.add_edge("D", "E", 5);
    graph
}

#[test]
fn test_next_hops_follow_predecessor_chain() {
    let graph = branching_network();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(tree.next_hop(&"A"), None, "Source has no next hop");
    assert_eq!(tree.next_hop(&"B"), Some("B"));
    assert_eq!(tree.next_hop(&"C"), Some("C"));
    assert_eq!(tree.next_hop(&"D"), Some("B"));
    assert_eq!(tree.next_hop(&"E"), Some("C"));
    assert_eq!(tree.next_hop(&"F"), None, "Unreachable node has no next hop");
}

#[test]
fn test_routing_table_rows() {
    let graph = branching_network();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();
    let table = RoutingTable::from_tree(&tree);

    assert_eq!(table.source, "A");
    let destinations: Vec<&str> = table.rows.iter().map(|row| row.destination).collect();
    assert_eq!(destinations, vec!["B", "C", "D", "E", "F"]);

    let e = table.row(&"E").unwrap();
    assert_eq!(e.cost, Distance::Finite(2));
    assert_eq!(e.next_hop, Some("C"));

    let f = table.row(&"F").unwrap();
    assert_eq!(f.cost, Distance::Infinite);
    assert_eq!(f.next_hop, None);

    assert!(table.row(&"A").is_none());
}

#[test]
fn test_routing_table_only_from_final_snapshot() {
    let graph = branching_network();
    let snapshots: Vec<_> = Dijkstra::new().stepper(&graph, "A").unwrap().collect();

    let (last, rest) = snapshots.split_last().unwrap();
    for snapshot in rest {
        assert!(RoutingTable::from_snapshot(snapshot).is_none());
    }

    let table = RoutingTable::from_snapshot(last).unwrap();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();
    assert_eq!(table, RoutingTable::from_tree(&tree));
}

#[test]
fn test_routing_table_display() {
    let graph = branching_network();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();
    let rendered = RoutingTable::from_tree(&tree).to_string();

    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Routing Table for Source Node: A"));

    let rows: Vec<Vec<String>> = rendered
        .lines()
        .skip(3)
        .map(|line| line.split('|').map(|cell| cell.trim().to_string()).collect())
        .collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2], vec!["D", "2", "B"]);
    assert_eq!(rows[4], vec!["F", "inf", "-"]);
}

#[test]
fn test_path_to_reconstruction() {
    let graph = branching_network();
    let tree = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(tree.path_to(&"A"), Some(vec!["A"]));
    assert_eq!(tree.path_to(&"E"), Some(vec!["A", "C", "E"]));
    assert_eq!(tree.path_to(&"F"), None);
}

#[test]
fn test_routing_table_is_rooted_at_run_start() {
    let graph = branching_network();
    let snapshots: Vec<_> = Dijkstra::new().stepper(&graph, "D").unwrap().collect();
    let last = snapshots.last().unwrap();

    assert!(snapshots.iter().all(|s| *s.start() == "D"));

    let table = RoutingTable::from_snapshot(last).unwrap();
    assert_eq!(table.source, "D");
    assert!(table.row(&"D").is_none());
    assert_eq!(table.row(&"A").unwrap().next_hop, Some("B"));
    assert_eq!(table.row(&"E").unwrap().next_hop, Some("B"));
    assert_eq!(table.row(&"E").unwrap().cost, Distance::Finite(4));
    assert_eq!(table.row(&"C").unwrap().cost, Distance::Finite(3));
}
