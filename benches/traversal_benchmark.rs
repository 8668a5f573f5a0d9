use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netgraph::Graph;

/// Ring of `size` vertices with a chord every 7th vertex.
fn ring_network(size: usize) -> String {
    let mut text = format!("*Vertices {size}\n*Edges\n");
    for i in 0..size {
        text.push_str(&format!("{} {}\n", i + 1, (i + 1) % size + 1));
        if i % 7 == 0 {
            text.push_str(&format!("{} {}\n", i + 1, (i + size / 2) % size + 1));
        }
    }
    text
}

fn bench_import(c: &mut Criterion) {
    let text = ring_network(10_000);
    c.bench_function("import_ring_10k", |b| {
        b.iter(|| black_box(Graph::from_net_str(black_box(&text)).unwrap()))
    });
}

fn bench_traversal(c: &mut Criterion) {
    let graph = Graph::from_net_str(&ring_network(10_000)).unwrap();

    c.bench_function("depth_first_ring_10k", |b| {
        b.iter(|| black_box(graph.depth_first()))
    });

    c.bench_function("breadth_first_ring_10k", |b| {
        b.iter(|| black_box(graph.breadth_first()))
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let size = 2_000;
    c.bench_function("add_edge_reverse_order_2k", |b| {
        b.iter(|| {
            let mut graph = Graph::new(size);
            // Descending destinations: every insert lands at the head of the list.
            for dest in (1..size).rev() {
                graph.add_edge(0, dest);
            }
            black_box(graph)
        })
    });
}

criterion_group!(benches, bench_import, bench_traversal, bench_add_edge);
criterion_main!(benches);
