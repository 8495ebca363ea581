/// Graph Snapshot
///
/// Parallel binary snapshot persistence for an in-memory graph engine.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Graph Snapshot                         │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Save Coordinator / Loader    │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Partition Writers (rayon)    │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Element Codec + Wire Format  │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// A save splits the graph's ordered element sequence into contiguous id
/// ranges, writes one partition file per range on a worker pool, and commits
/// a manifest referencing the partition files once every writer has flushed
/// and closed. A load runs the same pipeline in reverse.
///
/// # Modules
///
/// - `types`: Core data types (Vertex, Edge, GraphElement, Snapshot)
/// - `snapshot`: Save/load machinery, wire format, partition files
/// - `index`: Opaque boundary to the engine's index subsystem

pub mod index;
pub mod snapshot;
pub mod types;

// Re-export commonly used types
pub use types::{Edge, GraphElement, Snapshot, Vertex};

// Re-export snapshot machinery
pub use snapshot::{
    load, save, ElementCodec, JsonElementCodec, Partition, SaveOptions, SavedSnapshot,
    SnapshotError, SnapshotResult,
};

// Re-export the index boundary
pub use index::{GraphIndex, IndexRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
