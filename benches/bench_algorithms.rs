use std::{io::Cursor, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkgraph::{
    LinkGraph,
    algo::{brandes_centrality, brandes_predecessors},
    bench_utils::{GraphShape, generate_graph},
};

const ER_SEED: u64 = 0x99AA;
const SF_SEED: u64 = 0x77CC;
const SAMPLE_SIZE: usize = 10;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct ReadyGraph {
    label: String,
    graph: LinkGraph,
}

// Brandes is O(V·E), so these scales stay well below the traversal benches.
fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[250, 500]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[500, 1_000, 2_000]
    }
}

fn random_cases() -> Vec<ReadyGraph> {
    let mut cases = Vec::new();
    for &nodes in bench_scales() {
        let dataset = generate_graph(
            GraphShape::RandomErdosRenyi {
                edges: nodes.saturating_mul(5),
            },
            nodes,
            ER_SEED + nodes as u64,
        );
        cases.push(materialize(&dataset.to_adjacency_text(), nodes, format!("er_{nodes}")));
    }
    cases
}

fn scalefree_cases() -> Vec<ReadyGraph> {
    let mut cases = Vec::new();
    for &nodes in bench_scales() {
        let dataset = generate_graph(GraphShape::ScaleFree { m: 5 }, nodes, SF_SEED + nodes as u64);
        cases.push(materialize(&dataset.to_adjacency_text(), nodes, format!("sf_{nodes}")));
    }
    cases
}

fn materialize(text: &str, nodes: usize, label: String) -> ReadyGraph {
    let (graph, _) = LinkGraph::from_reader(Cursor::new(text), nodes).expect("graph");
    ReadyGraph { label, graph }
}

fn bench_centrality_random(c: &mut Criterion) {
    let cases = random_cases();
    let mut group = c.benchmark_group("brandes_random");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        let id = case.label.clone();
        group.bench_function(BenchmarkId::from_parameter(id), |b| {
            b.iter(|| brandes_centrality(&case.graph));
        });
    }
    group.finish();
}

fn bench_centrality_scalefree(c: &mut Criterion) {
    let cases = scalefree_cases();
    let mut group = c.benchmark_group("brandes_scalefree");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &cases {
        let id = case.label.clone();
        group.bench_function(BenchmarkId::from_parameter(id), |b| {
            b.iter(|| brandes_centrality(&case.graph));
        });
    }
    group.finish();
}

fn bench_predecessor_query(c: &mut Criterion) {
    let nodes = *bench_scales().last().unwrap_or(&500);
    let dataset = generate_graph(
        GraphShape::RandomErdosRenyi {
            edges: nodes.saturating_mul(5),
        },
        nodes,
        ER_SEED,
    );
    let start = dataset.hub_id();
    let case = materialize(&dataset.to_adjacency_text(), nodes, "preds".into());
    let mut group = c.benchmark_group("brandes_predecessors");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    group.bench_function("random", |b| {
        b.iter(|| brandes_predecessors(&case.graph, start));
    });
    group.finish();
}

criterion_group!(
    name = algorithm_benches;
    config = Criterion::default();
    targets = bench_centrality_random, bench_centrality_scalefree, bench_predecessor_query
);
criterion_main!(algorithm_benches);
