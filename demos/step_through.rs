use colored::*;
use dijkstra_stepper::graph::MutableGraph;
use dijkstra_stepper::{Distance, RoutingTable, StepKind, UndirectedGraph};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

fn render_distances(distances: &std::collections::BTreeMap<char, Distance<Weight>>) -> String {
    distances
        .iter()
        .map(|(node, d)| match d.finite() {
            Some(w) => format!("{}={}", node, w.into_inner()),
            None => format!("{}=inf", node),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    env_logger::init();

    // A small router network, positions as they would be placed on screen
    let mut graph: UndirectedGraph<char, (i32, i32), Weight> = UndirectedGraph::new();
    let routers = [
        ('A', (120, 360)),
        ('B', (360, 160)),
        ('C', (360, 560)),
        ('D', (640, 240)),
        ('E', (880, 400)),
        ('F', (640, 620)),
    ];
    for (id, pos) in routers {
        graph.add_node(id, pos);
    }

    let links = [
        ('A', 'B', 4.0),
        ('A', 'C', 2.0),
        ('B', 'C', 1.0),
        ('B', 'D', 5.0),
        ('C', 'D', 8.0),
        ('C', 'F', 10.0),
        ('D', 'E', 2.0),
        ('D', 'F', 2.0),
        ('E', 'F', 6.0),
    ];
    for (a, b, w) in links {
        graph.add_edge(a, b, OrderedFloat(w));
    }

    println!("{}", "=== Dijkstra step-through from A ===".bold());

    let stepper = match dijkstra_stepper::Dijkstra::new().stepper(&graph, 'A') {
        Ok(stepper) => stepper,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return;
        }
    };

    let mut last = None;
    for snapshot in stepper {
        let label = match snapshot.kind() {
            StepKind::Initial => "start".normal().to_string(),
            StepKind::Finalized => format!(
                "finalize {}",
                snapshot.current().copied().unwrap_or('?')
            )
            .green()
            .to_string(),
            StepKind::Relaxed { neighbor } => format!(
                "relax {} via {}",
                neighbor,
                snapshot.current().copied().unwrap_or('?')
            )
            .yellow()
            .to_string(),
            StepKind::Complete => "complete".bold().cyan().to_string(),
        };
        let visited: String = snapshot.visited().iter().collect();
        println!(
            "{:>3}  {:<24} {}  visited [{}]",
            snapshot.step(),
            label,
            render_distances(snapshot.distances()),
            visited
        );
        last = Some(snapshot);
    }

    if let Some(table) = last.and_then(|s| RoutingTable::from_snapshot(&s)) {
        println!();
        println!("{}", "Routing table".bold());
        for row in &table.rows {
            let cost = match row.cost.finite() {
                Some(w) => w.into_inner().to_string(),
                None => "inf".to_string(),
            };
            let hop = row.next_hop.map(String::from).unwrap_or_else(|| "-".to_string());
            println!("  {:<4} {:>6}  {}", row.destination, cost, hop.blue());
        }
    }
}
