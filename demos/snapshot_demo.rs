/// Snapshot persistence demonstration
///
/// This example demonstrates:
/// 1. Building a point-in-time snapshot with tombstones
/// 2. Saving it across parallel partition writers
/// 3. Loading it back and verifying the round trip
/// 4. Non-clobbering resolution when the destination is occupied

use anyhow::Result;
use graph_snapshot::{
    load, save, Edge, GraphElement, IndexRegistry, JsonElementCodec, SaveOptions, Snapshot, Vertex,
};
use serde_json::json;
use tempfile::TempDir;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Graph Snapshot Demonstration ===\n");

    let temp_dir = TempDir::new()?;
    let dest = temp_dir.path().join("demo.snapshot");

    println!("1. Building a snapshot");
    println!("{}", "-".repeat(50));
    let elements: Vec<GraphElement> = (0..1_000u64)
        .map(|i| match i % 4 {
            0 | 1 => Vertex::new(i, "Person", json!({"name": format!("p{}", i)})).into(),
            2 => Edge::new(i, i - 2, i - 1, "KNOWS", json!({"since": 2020})).into(),
            _ => GraphElement::Tombstone,
        })
        .collect();
    let snapshot = Snapshot::new(1_000, elements);
    println!(
        "✓ Snapshot with {} slots ({} live elements)\n",
        snapshot.element_count(),
        snapshot.live_count()
    );

    println!("2. Saving in parallel");
    println!("{}", "-".repeat(50));
    let saved = save(
        &snapshot,
        &IndexRegistry::new(),
        &dest,
        &JsonElementCodec,
        &SaveOptions::default(),
    )?;
    println!("✓ Manifest: {:?}", saved.path());
    for partition in saved.partitions() {
        println!(
            "  partition [{}, {}) -> {}",
            partition.start, partition.end, partition.file_name
        );
    }
    println!();

    println!("3. Loading back");
    println!("{}", "-".repeat(50));
    let loaded = load(saved.path(), &JsonElementCodec)?;
    assert_eq!(loaded, snapshot);
    println!("✓ Round trip verified: {} slots\n", loaded.element_count());

    println!("4. Saving again to the same destination");
    println!("{}", "-".repeat(50));
    let second = save(
        &snapshot,
        &IndexRegistry::new(),
        &dest,
        &JsonElementCodec,
        &SaveOptions::default(),
    )?;
    println!("✓ First snapshot kept at  {:?}", saved.path());
    println!("✓ Second resolved to      {:?}", second.path());

    Ok(())
}
