#![allow(unused)]
extern crate dotscribe;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dotscribe::prelude::*;
use std::{hint::black_box, rc::Rc};

/// Builds a layered graph: `clusters` clusters of `width` nodes each, every node linked to
/// the next node of its cluster and to the matching node of the next cluster.
fn build_layered(clusters: usize, width: usize) -> GraphRc {
    let generator = RandomIdGenerator::with_seed(0).into_shared();
    let root = Graph::new(
        GraphOptions::default()
            .with_id("bench")
            .with_generator(generator),
    )
    .unwrap();
    root.set_attribute(Key::RankDir, RankDir::Lr);

    let mut previous: Vec<NodeRc> = Vec::new();
    for c in 0..clusters {
        let cluster = root
            .subgraph(
                GraphOptions::default()
                    .with_id(format!("c{c}"))
                    .with_cluster(true),
            )
            .unwrap();
        cluster.label(format!("cluster {c}"));

        let nodes: Vec<NodeRc> = (0..width)
            .map(|n| {
                let node = cluster.node(&format!("c{c}n{n}"));
                node.label(format!("node {n}")).box_shape();
                node
            })
            .collect();

        for pair in nodes.windows(2) {
            cluster.edge(&pair[0], &pair[1]);
        }
        for (from, to) in previous.iter().zip(nodes.iter()) {
            root.edge(from, to).dashed();
        }
        cluster.add_to_same_rank("layer", &nodes);
        previous = nodes;
    }

    root
}

/// Benchmark serialization of graphs of increasing size into an in-memory sink.
fn bench_write_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_to");
    for &(clusters, width) in &[(4usize, 16usize), (16, 64), (32, 256)] {
        let graph = build_layered(clusters, width);
        let size = graph.to_string().len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{clusters}x{width}")),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let mut sink = Vec::with_capacity(size);
                    let written = graph.write_to(&mut sink).unwrap();
                    black_box(written)
                });
            },
        );
    }
    group.finish();
}

/// Benchmark building a graph tree, including node lookups through the parent cascade.
fn bench_build(c: &mut Criterion) {
    c.bench_function("build_16x64", |b| {
        b.iter(|| {
            let graph = build_layered(black_box(16), black_box(64));
            black_box(Rc::strong_count(&graph))
        });
    });
}

criterion_group!(benches, bench_write_to, bench_build);
criterion_main!(benches);
