//! Store configuration

use std::path::PathBuf;

/// Default snapshot filename, relative to the working directory
pub const DEFAULT_SNAPSHOT_PATH: &str = "cuprumdb.snap";

/// Configuration consumed once at store construction
///
/// The `durable` flag selects the backend: `false` builds a volatile
/// in-memory store, `true` builds a store that snapshots to
/// `snapshot_path` after every mutation. The path is ignored when
/// `durable` is `false`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Select the persistent backend
    pub durable: bool,

    /// Path to the snapshot file (persistent backend only)
    pub snapshot_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            durable: false,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default values (volatile backend)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the persistent backend
    pub fn durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }

    /// Set the snapshot file path
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(!config.durable);
        assert_eq!(config.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
    }

    #[test]
    fn test_builder_chaining() {
        let config = StoreConfig::new()
            .durable(true)
            .with_snapshot_path("data/state.snap");
        assert!(config.durable);
        assert_eq!(config.snapshot_path, PathBuf::from("data/state.snap"));
    }
}
