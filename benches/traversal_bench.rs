//! BFS traversal benchmarks over chain, wide and grid-shaped graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use graphwalk::{bfs, GraphStore, GraphTraversal, TraversalLimits};

/// 0 -> 1 -> 2 -> ... -> n-1
fn chain(n: u32) -> GraphStore<u32> {
    (0..n).map(|i| (i, vec![i + 1])).collect()
}

/// Root with `n` leaf children.
fn wide(n: u32) -> GraphStore<u32> {
    std::iter::once((0, (1..=n).collect::<Vec<_>>())).collect()
}

/// `side` x `side` grid with right and down edges plus a back edge to the
/// left neighbor, so the visited check is exercised.
fn grid(side: u32) -> GraphStore<u32> {
    let mut entries = Vec::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let mut next = Vec::with_capacity(3);
            if col + 1 < side {
                next.push(id + 1);
            }
            if row + 1 < side {
                next.push(id + side);
            }
            if col > 0 {
                next.push(id - 1);
            }
            entries.push((id, next));
        }
    }
    entries.into_iter().collect()
}

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for size in [1_000u32, 10_000] {
        let graph = chain(size);
        group.bench_with_input(BenchmarkId::new("chain", size), &graph, |b, g| {
            b.iter(|| bfs(g, black_box(0)))
        });

        let graph = wide(size);
        group.bench_with_input(BenchmarkId::new("wide", size), &graph, |b, g| {
            b.iter(|| bfs(g, black_box(0)))
        });
    }

    for side in [32u32, 100] {
        let graph = grid(side);
        group.bench_with_input(BenchmarkId::new("grid", side * side), &graph, |b, g| {
            b.iter(|| bfs(g, black_box(0)))
        });
    }

    group.finish();
}

fn bench_bounded(c: &mut Criterion) {
    let graph = grid(100);
    let traversal = GraphTraversal::new(&graph);
    let limits = TraversalLimits::default().with_max_depth(20);

    c.bench_function("bfs_bounded/grid_depth_20", |b| {
        b.iter(|| traversal.bfs_bounded(black_box(0), limits))
    });
}

criterion_group!(benches, bench_bfs, bench_bounded);
criterion_main!(benches);
