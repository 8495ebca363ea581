/// Snapshot loader, the symmetric inverse of save
///
/// Reads the manifest's global counters and partition file names, recovers
/// each partition's id range from its file name, validates that the ranges
/// cover `[0, element_count)` exactly once, then decodes the partitions on
/// rayon's worker pool and reassembles the element sequence in id order.
///
/// The manifest records file names relative to its own directory, so a
/// snapshot (manifest plus partitions) can be moved as a unit.

use super::codec::ElementCodec;
use super::error::{SnapshotError, SnapshotResult};
use super::partition::{self, Partition};
use super::wire;
use crate::types::{GraphElement, Snapshot};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Upper bound for preallocations sized from manifest counters
///
/// The counters come off the wire and must not be trusted for allocation
/// sizing; vectors grow past this bound only as decoded data arrives.
const MAX_PREALLOC: usize = 64 * 1024;

/// Check that sorted partitions tile the id space exactly once
fn validate_coverage(partitions: &[Partition], element_count: u64) -> SnapshotResult<()> {
    let mut expected_start = 0;
    for partition in partitions {
        if partition.start != expected_start {
            let detail = if partition.start > expected_start {
                format!("gap at id {}", expected_start)
            } else {
                format!("overlap at id {}", partition.start)
            };
            return Err(SnapshotError::CoverageViolation {
                expected: element_count,
                detail,
            });
        }
        expected_start = partition.end;
    }
    if expected_start != element_count {
        return Err(SnapshotError::CoverageViolation {
            expected: element_count,
            detail: format!("ranges end at {}", expected_start),
        });
    }
    Ok(())
}

/// Load a snapshot from a manifest written by `save`
pub fn load(manifest_path: &Path, codec: &dyn ElementCodec) -> SnapshotResult<Snapshot> {
    let dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let file = File::open(manifest_path)?;
    let mut manifest = BufReader::new(file);

    let next_id = wire::read_varint(&mut manifest)?;
    let element_count = wire::read_varint(&mut manifest)?;
    let partition_count = wire::read_varint(&mut manifest)?;
    if partition_count > element_count {
        return Err(SnapshotError::CorruptManifest(format!(
            "{} partitions for {} elements",
            partition_count, element_count
        )));
    }

    let mut partitions = Vec::with_capacity(
        usize::try_from(partition_count)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOC),
    );
    for _ in 0..partition_count {
        let file_name = wire::read_string(&mut manifest)?;
        partitions.push(Partition::parse(&file_name)?);
    }

    // The manifest makes no ordering promise for its file name list.
    partitions.sort_by_key(|p| p.start);
    validate_coverage(&partitions, element_count)?;

    debug!(
        path = %manifest_path.display(),
        element_count,
        partitions = partitions.len(),
        "loading snapshot"
    );

    let decoded: Vec<Vec<GraphElement>> = partitions
        .par_iter()
        .map(|partition| partition::read_range(dir, partition, codec))
        .collect::<SnapshotResult<Vec<_>>>()?;

    let mut elements = Vec::with_capacity(
        usize::try_from(element_count)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOC),
    );
    for chunk in decoded {
        elements.extend(chunk);
    }

    info!(
        path = %manifest_path.display(),
        element_count,
        next_id,
        "snapshot loaded"
    );

    Ok(Snapshot::new(next_id, elements))
}
