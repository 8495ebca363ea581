use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use graph_snapshot::{
    load, save, Edge, GraphElement, IndexRegistry, JsonElementCodec, SaveOptions, Snapshot, Vertex,
};
use serde_json::json;
use tempfile::TempDir;

fn build_snapshot(count: u64) -> Snapshot {
    let elements = (0..count)
        .map(|i| match i % 3 {
            0 => Vertex::new(i, "Person", json!({"name": format!("p{}", i), "age": i % 90})).into(),
            1 => Edge::new(i, i - 1, 0, "KNOWS", json!({"weight": i})).into(),
            _ => GraphElement::Tombstone,
        })
        .collect();
    Snapshot::new(count, elements)
}

/// Benchmark saving snapshots of increasing size
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_save");

    for count in [1_000u64, 10_000, 100_000] {
        let snapshot = build_snapshot(count);
        let indices = IndexRegistry::new();
        group.throughput(Throughput::Elements(count));

        group.bench_function(format!("elements_{}", count), |b| {
            b.iter(|| {
                let temp_dir = TempDir::new().unwrap();
                let dest = temp_dir.path().join("bench.snapshot");
                let saved = save(
                    &snapshot,
                    &indices,
                    &dest,
                    &JsonElementCodec,
                    &SaveOptions::default(),
                )
                .unwrap();
                black_box(saved.partitions().len());
            });
        });
    }

    group.finish();
}

/// Benchmark loading a saved snapshot
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_load");

    for count in [1_000u64, 10_000, 100_000] {
        let snapshot = build_snapshot(count);
        let temp_dir = TempDir::new().unwrap();
        let saved = save(
            &snapshot,
            &IndexRegistry::new(),
            &temp_dir.path().join("bench.snapshot"),
            &JsonElementCodec,
            &SaveOptions::default(),
        )
        .unwrap();
        group.throughput(Throughput::Elements(count));

        group.bench_function(format!("elements_{}", count), |b| {
            b.iter(|| {
                let loaded = load(saved.path(), &JsonElementCodec).unwrap();
                black_box(loaded.element_count());
            });
        });
    }

    group.finish();
}

/// Benchmark the effect of the partition count on save time
fn bench_partition_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_partition_counts");
    let snapshot = build_snapshot(50_000);
    let indices = IndexRegistry::new();
    group.throughput(Throughput::Elements(50_000));

    for partitions in [1usize, 2, 4, 8] {
        group.bench_function(format!("partitions_{}", partitions), |b| {
            b.iter(|| {
                let temp_dir = TempDir::new().unwrap();
                let saved = save(
                    &snapshot,
                    &indices,
                    &temp_dir.path().join("bench.snapshot"),
                    &JsonElementCodec,
                    &SaveOptions {
                        partitions: Some(partitions),
                    },
                )
                .unwrap();
                black_box(saved.path());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_save, bench_load, bench_partition_counts);
criterion_main!(benches);
