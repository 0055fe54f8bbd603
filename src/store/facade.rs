//! Store facade
//!
//! Selects a concrete backend once at construction and forwards every
//! contract operation verbatim. Carries no state of its own beyond the
//! chosen backend.

use super::{KeyValueStore, PersistentStore, Value, VolatileStore};
use crate::config::StoreConfig;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Entry point for callers: a store with the backend chosen by configuration
pub struct Store {
    backend: Box<dyn KeyValueStore>,
}

impl Store {
    /// Build the backend selected by `config`
    pub fn new(config: StoreConfig) -> Result<Self> {
        let backend: Box<dyn KeyValueStore> = if config.durable {
            info!(
                "opening persistent store at {}",
                config.snapshot_path.display()
            );
            Box::new(PersistentStore::open(config.snapshot_path)?)
        } else {
            info!("opening volatile store");
            Box::new(VolatileStore::new())
        };

        Ok(Store { backend })
    }

    /// Convenience: a volatile store
    pub fn volatile() -> Self {
        Store {
            backend: Box::new(VolatileStore::new()),
        }
    }

    /// Convenience: a persistent store snapshotting to `path`
    pub fn persistent(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Store {
            backend: Box::new(PersistentStore::open(path)?),
        })
    }
}

impl KeyValueStore for Store {
    fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> Result<()> {
        self.backend.set(key, value, ttl_seconds)
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.backend.get(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.backend.delete(key)
    }

    fn expire(&self, key: &str, seconds: u64) -> Result<()> {
        self.backend.expire(key, seconds)
    }

    fn ttl(&self, key: &str) -> Result<i64> {
        self.backend.ttl(key)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        self.backend.exists(key)
    }

    fn len(&self) -> Result<usize> {
        self.backend.len()
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.backend.keys()
    }

    fn clear(&self) -> Result<()> {
        self.backend.clear()
    }
}
