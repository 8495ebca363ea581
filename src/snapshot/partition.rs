/// Per-range partition files
///
/// Each partition holds one contiguous half-open id range `[start, end)` of
/// the snapshot's element sequence, serialized into its own file so that
/// ranges can be written and read in parallel. The range bounds live in the
/// file name (`<base>_<start>_to_<end>`), not in the file body; the body is
/// purely the per-id records:
///
/// ```text
/// for each id in [start, end):
///     marker:u8        0 = tombstone (record ends here)
///     kind:u8          0 = vertex, 1 = edge
///     payload          ElementCodec encoding, self-delimiting
/// ```

use super::codec::ElementCodec;
use super::error::{SnapshotError, SnapshotResult};
use crate::types::GraphElement;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const MARKER_TOMBSTONE: u8 = 0;
const MARKER_LIVE: u8 = 1;

const KIND_VERTEX: u8 = 0;
const KIND_EDGE: u8 = 1;

/// Upper bound for preallocating a decoded range
///
/// A partition's claimed length is taken from its file name and must not be
/// trusted for allocation sizing.
const MAX_RANGE_PREALLOC: usize = 64 * 1024;

/// One contiguous id range and the file holding its serialized contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// First id in the range (inclusive)
    pub start: u64,

    /// One past the last id in the range (exclusive)
    pub end: u64,

    /// Name of the partition file, relative to the manifest's directory
    pub file_name: String,
}

impl Partition {
    /// Number of id slots covered by this partition
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the partition covers no ids
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Recover the range bounds embedded in a partition file name
    ///
    /// Inverse of the naming scheme used by `write_range`.
    pub fn parse(file_name: &str) -> SnapshotResult<Self> {
        let invalid = || SnapshotError::InvalidPartitionName(file_name.to_string());

        let to_idx = file_name.rfind("_to_").ok_or_else(invalid)?;
        let end: u64 = file_name[to_idx + 4..].parse().map_err(|_| invalid())?;
        let head = &file_name[..to_idx];
        let start_idx = head.rfind('_').ok_or_else(invalid)?;
        let start: u64 = head[start_idx + 1..].parse().map_err(|_| invalid())?;

        if start > end {
            return Err(invalid());
        }
        Ok(Self {
            start,
            end,
            file_name: file_name.to_string(),
        })
    }
}

/// Derive the deterministic file name for a range under `base`
///
/// Disjoint ranges produced by one save call can never collide because the
/// bounds themselves are part of the name.
fn range_file_name(base: &Path, start: u64, end: u64) -> String {
    let base_name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    format!("{}_{}_to_{}", base_name, start, end)
}

/// Serialize one id range of the element sequence into its own file
///
/// Writes every id in `[start, end)` in increasing order, flushes and closes
/// the stream, and returns the produced file name. The file is created next
/// to `base`; nothing else is shared with concurrently running writers.
pub fn write_range(
    elements: &[GraphElement],
    start: u64,
    end: u64,
    base: &Path,
    codec: &dyn ElementCodec,
) -> SnapshotResult<String> {
    if start > end || end > elements.len() as u64 {
        return Err(SnapshotError::InvalidRange {
            start,
            end,
            len: elements.len() as u64,
        });
    }

    let file_name = range_file_name(base, start, end);
    let file_path = base.with_file_name(&file_name);

    let file = File::create(&file_path)?;
    let mut writer = BufWriter::new(file);

    for element in &elements[start as usize..end as usize] {
        match element {
            GraphElement::Tombstone => {
                writer.write_all(&[MARKER_TOMBSTONE])?;
            }
            GraphElement::Vertex(vertex) => {
                writer.write_all(&[MARKER_LIVE, KIND_VERTEX])?;
                codec.encode_vertex(&mut writer, vertex)?;
            }
            GraphElement::Edge(edge) => {
                writer.write_all(&[MARKER_LIVE, KIND_EDGE])?;
                codec.encode_edge(&mut writer, edge)?;
            }
        }
    }

    writer.flush()?;
    Ok(file_name)
}

/// Read back the elements of one partition
///
/// `dir` is the directory holding the manifest; the partition's range is
/// recovered from its file name and exactly `end - start` records are
/// decoded, in id order.
pub fn read_range(
    dir: &Path,
    partition: &Partition,
    codec: &dyn ElementCodec,
) -> SnapshotResult<Vec<GraphElement>> {
    let file_path = dir.join(&partition.file_name);
    let file = File::open(&file_path)
        .map_err(|_| SnapshotError::MissingPartition(partition.file_name.clone()))?;
    let mut reader = BufReader::new(file);

    // The range length comes from the file name, which is corruption-prone;
    // preallocation is bounded and the vector grows only as records decode.
    let capacity = usize::try_from(partition.len())
        .unwrap_or(usize::MAX)
        .min(MAX_RANGE_PREALLOC);
    let mut elements = Vec::with_capacity(capacity);
    for _ in 0..partition.len() {
        let mut marker = [0u8; 1];
        reader.read_exact(&mut marker)?;
        match marker[0] {
            MARKER_TOMBSTONE => {
                elements.push(GraphElement::Tombstone);
                continue;
            }
            MARKER_LIVE => {}
            other => {
                return Err(SnapshotError::InvalidEncoding(format!(
                    "invalid element marker: {}",
                    other
                )))
            }
        }

        let mut kind = [0u8; 1];
        reader.read_exact(&mut kind)?;
        let element = match kind[0] {
            KIND_VERTEX => GraphElement::Vertex(codec.decode_vertex(&mut reader)?),
            KIND_EDGE => GraphElement::Edge(codec.decode_edge(&mut reader)?),
            other => return Err(SnapshotError::UnsupportedKind(other)),
        };
        elements.push(element);
    }

    Ok(elements)
}
