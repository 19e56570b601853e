//! Benchmarks for the dense-matrix graph.
//!
//! - Insert: bulk vertex insertion from the default capacity, exercising growth
//! - Churn: repeated insert/remove cycles that recycle indices
//! - Edges: full edge enumeration on a dense graph

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_graph::DirectedGraph;
use std::hint::black_box;

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_vertex");
    for size in [100u32, 1000, 4000].iter() {
        group.bench_with_input(BenchmarkId::new("grow", size), size, |b, &size| {
            b.iter(|| {
                let mut graph = DirectedGraph::new();
                for v in 0..size {
                    black_box(graph.add_vertex(black_box(v)));
                }
                black_box(graph)
            });
        });
    }
    group.finish();
}

fn benchmark_churn(c: &mut Criterion) {
    c.bench_function("churn", |b| {
        let mut graph = DirectedGraph::with_capacity(64);
        b.iter(|| {
            for v in 0..16u32 {
                graph.add_vertex(v);
            }
            for v in 0..15u32 {
                graph.add_edge(&v, &(v + 1), 1).ok();
            }
            for v in 0..16u32 {
                black_box(graph.remove_vertex(&v));
            }
        });
    });
}

fn benchmark_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");
    for size in [32u32, 128].iter() {
        let mut graph = DirectedGraph::new();
        for v in 0..*size {
            graph.add_vertex(v);
        }
        for s in 0..*size {
            for d in 0..*size {
                graph.add_edge(&s, &d, 1).ok();
            }
        }
        group.bench_with_input(BenchmarkId::new("dense", size), &graph, |b, graph| {
            b.iter(|| black_box(graph.edges().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_churn, benchmark_edges);
criterion_main!(benches);
