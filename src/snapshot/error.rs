/// Error types for snapshot persistence operations

use thiserror::Error;

/// Snapshot save/load errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// IO error at the manifest or a partition file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Property payload serialization error
    #[error("Payload serialization error: {0}")]
    PayloadError(#[from] serde_json::Error),

    /// Varint or length prefix too large or truncated
    #[error("Invalid wire encoding: {0}")]
    InvalidEncoding(String),

    /// UTF-8 conversion error
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Unknown element kind tag in a partition file
    #[error("Unsupported element kind tag: {0}")]
    UnsupportedKind(u8),

    /// Requested id range does not fit the element sequence
    #[error("Range [{start}, {end}) out of bounds for {len} elements")]
    InvalidRange { start: u64, end: u64, len: u64 },

    /// Manifest references a partition that cannot be read
    #[error("Missing partition file: {0}")]
    MissingPartition(String),

    /// Partition file name does not carry parseable range bounds
    #[error("Invalid partition file name: {0}")]
    InvalidPartitionName(String),

    /// Partition ranges do not cover the id space exactly once
    #[error("Partition ranges do not cover [0, {expected}): {detail}")]
    CoverageViolation { expected: u64, detail: String },

    /// Manifest counters or structure are inconsistent
    #[error("Corrupt manifest: {0}")]
    CorruptManifest(String),

    /// Generic error
    #[error("Snapshot error: {0}")]
    Other(String),
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

impl From<String> for SnapshotError {
    fn from(s: String) -> Self {
        SnapshotError::Other(s)
    }
}

impl From<&str> for SnapshotError {
    fn from(s: &str) -> Self {
        SnapshotError::Other(s.to_string())
    }
}
