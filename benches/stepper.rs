use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dijkstra_stepper::graph::generators::{generate_random_graph, node_label, RandomGraphConfig};
use dijkstra_stepper::Dijkstra;

fn bench_full_run(c: &mut Criterion) {
    for &node_count in &[10usize, 26, 100] {
        let graph = generate_random_graph(&RandomGraphConfig {
            node_count,
            edges_per_node: 2,
            ..Default::default()
        });
        let start = node_label(0);

        c.bench_function(&format!("step_all_{}", node_count), |b| {
            b.iter(|| {
                let stepper = Dijkstra::new().stepper(&graph, start.clone()).unwrap();
                black_box(stepper.count())
            })
        });
    }
}

criterion_group!(benches, bench_full_run);
criterion_main!(benches);
