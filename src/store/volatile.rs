//! Volatile in-memory backend
//!
//! No durability: the map lives and dies with the store instance. One
//! exclusive lock serializes all operations, reads included, so the
//! read-then-maybe-evict sequence inside `get` stays indivisible.

use super::entry::Entry;
use super::value::Value;
use super::{KeyValueStore, StoreMap};
use crate::error::Result;
use std::sync::Mutex;

/// In-memory key-value store without persistence
pub struct VolatileStore {
    entries: Mutex<StoreMap>,
}

impl VolatileStore {
    /// Create an empty store
    pub fn new() -> Self {
        VolatileStore {
            entries: Mutex::new(StoreMap::default()),
        }
    }
}

impl Default for VolatileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for VolatileStore {
    fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> Result<()> {
        let entry = match ttl_seconds {
            Some(ttl) => Entry::with_expiration(value, ttl),
            None => Entry::new(value),
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut entries = self.entries.lock().unwrap();

        // Evict before reading so an expired entry is never observable
        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn expire(&self, key: &str, seconds: u64) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            entries.remove(key);
            return Ok(());
        }

        if let Some(entry) = entries.get_mut(key) {
            entry.set_expiration(seconds);
        }
        Ok(())
    }

    fn ttl(&self, key: &str) -> Result<i64> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            entries.remove(key);
            return Ok(-2);
        }

        Ok(entries.get(key).map(|entry| entry.ttl_seconds()).unwrap_or(-2))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            entries.remove(key);
            return Ok(false);
        }

        Ok(entries.contains_key(key))
    }

    fn len(&self) -> Result<usize> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.values().filter(|entry| !entry.is_expired()).count())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
