//! Error types for store operations

use thiserror::Error;

/// Errors surfaced by store operations
///
/// Missing or expired keys are never errors: reads return `None` and the
/// TTL query uses its sentinel values. Only the persistent backend can fail,
/// and only through its snapshot file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but did not pass validation
    #[error("snapshot corrupt: {0}")]
    Corrupt(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, StoreError>;
