/// Snapshot persistence for the graph engine
///
/// This module serializes a point-in-time view of the graph's element
/// sequence to durable storage and reads it back:
/// - wire: variable-length integer and string primitives
/// - codec: pluggable per-element payload encoding
/// - path: collision-avoiding destination resolution
/// - partition: per-id-range files written and read independently
/// - save: parallel save coordinator committing the manifest
/// - load: symmetric loader reassembling the snapshot
///
/// On-disk layout is two-tier: one manifest holding the global counters and
/// the partition file names, plus one file per id-range partition.

pub mod codec;
pub mod error;
pub mod load;
pub mod partition;
pub mod path;
pub mod save;
pub mod wire;

pub use codec::{ElementCodec, JsonElementCodec};
pub use error::{SnapshotError, SnapshotResult};
pub use load::load;
pub use partition::Partition;
pub use save::{save, SaveOptions, SavedSnapshot};
