use criterion::{criterion_group, criterion_main, Criterion};
use grid_route::{load_graph, search, SearchMode};
use std::hint::black_box;
use std::path::Path;

fn sample_bench(c: &mut Criterion) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("p1_graph.txt");
    let graph = load_graph(path).unwrap();
    let scenarios = [(0, 99), (0, 50), (95, 4), (0, 15)];
    for mode in SearchMode::ALL {
        c.bench_function(format!("p1_graph, {}", mode.name()).as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(search(&graph, *start, *end, mode));
                }
            })
        });
    }
}

criterion_group!(benches, sample_bench);
criterion_main!(benches);
