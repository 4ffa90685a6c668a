//! Performance benchmarks for the snapshot history store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use undo_history::{EditorSnapshot, SnapshotHistory};

/// Benchmark adds that stay within budget (no eviction).
fn bench_add_within_budget(c: &mut Criterion) {
    c.bench_function("add_within_budget", |b| {
        let mut i = 0u64;
        let mut history = SnapshotHistory::new();
        b.iter(|| {
            let snapshot = EditorSnapshot::new(format!("<p>revision {i}</p>"));
            let size = snapshot.size_in_bytes();
            history.add_snapshot(black_box(snapshot), size, false);
            i += 1;
        });
    });
}

/// Benchmark adds under constant eviction pressure, with varying budgets.
fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_with_eviction");

    for budget in [100u64, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("budget", budget), &budget, |b, &budget| {
            let mut i = 0u64;
            let mut history = SnapshotHistory::with_max_size(budget);
            b.iter(|| {
                let snapshot = EditorSnapshot::new(format!("<p>revision {i:032}</p>"));
                let size = snapshot.size_in_bytes();
                history.add_snapshot(black_box(snapshot), size, false);
                i += 1;
            });
        });
    }

    group.finish();
}

/// Benchmark cursor navigation over a populated history.
fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");

    for depth in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut history = SnapshotHistory::new();
            for i in 0..depth {
                let snapshot = EditorSnapshot::new(format!("<p>revision {i}</p>"));
                let size = snapshot.size_in_bytes();
                history.add_snapshot(snapshot, size, false);
            }

            let mut step = -1isize;
            b.iter(|| {
                if !history.can_move(step) {
                    step = -step;
                }
                black_box(history.move_by(step));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_within_budget,
    bench_add_with_eviction,
    bench_move,
);

criterion_main!(benches);
