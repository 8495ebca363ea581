/// Collision-avoiding destination path resolution
///
/// A save never overwrites an existing snapshot: when the requested path is
/// already occupied, a suffix derived from the current timestamp and a
/// process-wide monotonic counter is appended, producing a presumptively
/// unique sibling path. Best-effort only: two processes resolving the same
/// occupied path in the same nanosecond can still collide.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Distinguishes resolutions within one process even when the clock stalls
static RESOLVE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Resolve the actual destination for a snapshot save
///
/// Returns `path` unchanged when nothing exists there, otherwise a new path
/// with a `.<timestamp>.<counter>` suffix appended to the file name.
pub fn resolve(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let seq = RESOLVE_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    name.push_str(&format!(".{}.{}", nanos, seq));
    path.with_file_name(name)
}
