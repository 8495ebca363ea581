/// Snapshot save coordinator
///
/// Orchestrates a whole-graph snapshot: resolves a non-clobbering destination,
/// splits the id space into contiguous ranges, writes one partition file per
/// range on rayon's worker pool, and commits the manifest only after every
/// partition is flushed and closed.
///
/// Manifest layout:
/// ```text
/// next_id:varint | element_count:varint | partition_count:varint
///     | (file_name:string)*
/// ```
///
/// Failure anywhere aborts the whole call. There is no temp-file-then-rename
/// step, so an aborted save can leave orphan partition files or a truncated
/// manifest behind; the caller owns cleanup and retry decisions.

use super::codec::ElementCodec;
use super::error::SnapshotResult;
use super::partition::{self, Partition};
use super::{path, wire};
use crate::index::IndexRegistry;
use crate::types::Snapshot;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Tuning knobs for one save call
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Number of partitions to split the id space into
    ///
    /// Defaults to the number of available CPUs. This is a performance
    /// heuristic, not a persisted contract: any exact covering of the id
    /// space produces an equivalent snapshot.
    pub partitions: Option<usize>,
}

/// Handle to a committed snapshot
#[derive(Debug, Clone)]
pub struct SavedSnapshot {
    path: PathBuf,
    partitions: Vec<Partition>,
}

impl SavedSnapshot {
    /// The resolved manifest path (may differ from the requested destination)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The partitions the manifest references, sorted by range start
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

/// Split `[0, element_count)` into contiguous, non-overlapping ranges
///
/// Every range is non-empty and the union is exactly the full id space; an
/// empty snapshot yields no ranges at all.
fn split_ranges(element_count: u64, partition_hint: usize) -> Vec<(u64, u64)> {
    if element_count == 0 {
        return Vec::new();
    }
    let parts = (partition_hint.max(1) as u64).min(element_count);
    let chunk = element_count.div_ceil(parts);

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;
    while start < element_count {
        let end = (start + chunk).min(element_count);
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Save a snapshot to durable storage
///
/// Writes the manifest at a collision-free path resolved from `dest`, fans
/// the element sequence out across parallel partition writers, and returns a
/// handle naming the resolved path and the committed partitions. `indices`
/// are accepted for call-site symmetry with the owning engine but are not
/// serialized here.
pub fn save(
    snapshot: &Snapshot,
    indices: &IndexRegistry,
    dest: &Path,
    codec: &dyn ElementCodec,
    options: &SaveOptions,
) -> SnapshotResult<SavedSnapshot> {
    let resolved = path::resolve(dest);
    let element_count = snapshot.elements.len() as u64;

    debug!(
        path = %resolved.display(),
        element_count,
        next_id = snapshot.next_id,
        indices = indices.len(),
        "starting snapshot save"
    );

    // The manifest stream is opened first so the resolved path is occupied
    // before any partition file derives its name from it.
    let file = File::create(&resolved)?;
    let mut manifest = BufWriter::new(file);
    wire::write_varint(&mut manifest, snapshot.next_id)?;
    wire::write_varint(&mut manifest, element_count)?;

    let partition_hint = options.partitions.unwrap_or_else(num_cpus::get);
    let ranges = split_ranges(element_count, partition_hint);
    debug!(ranges = ranges.len(), "partitioned id space");

    // Fork/join over the ranges: each worker owns its output file exclusively
    // and surfaces only the produced file name. Collecting into a Result is
    // the join point; any worker failure aborts the whole save.
    let mut partitions: Vec<Partition> = ranges
        .into_par_iter()
        .map(|(start, end)| {
            let file_name = partition::write_range(
                &snapshot.elements,
                start,
                end,
                &resolved,
                codec,
            )?;
            Ok(Partition {
                start,
                end,
                file_name,
            })
        })
        .collect::<SnapshotResult<Vec<_>>>()?;

    // Workers complete in nondeterministic order; sorting by range start
    // makes the manifest byte-for-byte reproducible across runs.
    partitions.sort_by_key(|p| p.start);

    wire::write_varint(&mut manifest, partitions.len() as u64)?;
    for partition in &partitions {
        wire::write_string(&mut manifest, &partition.file_name)?;
    }
    manifest.flush()?;

    info!(
        path = %resolved.display(),
        element_count,
        partitions = partitions.len(),
        "snapshot saved"
    );

    Ok(SavedSnapshot {
        path: resolved,
        partitions,
    })
}
