//! Persistent snapshot-backed backend
//!
//! Identical operational contract to the volatile backend, plus a snapshot
//! load at construction and a full snapshot rewrite after every mutation.
//! The lock covers the in-memory mutation and the file write, so memory and
//! disk never diverge relative to each other within the process.
//!
//! Mutations follow a write-then-commit discipline: the next map state is
//! built on the side, written to disk, and only then swapped in. A failed
//! write surfaces as an error with the in-memory state untouched.

use super::entry::Entry;
use super::value::Value;
use super::{KeyValueStore, StoreMap};
use crate::error::Result;
use crate::snapshot::SnapshotFile;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value store that snapshots to a file after every mutation
///
/// The snapshot file is single-owner: concurrent access from multiple
/// processes is unsupported and would end as last-writer-wins.
pub struct PersistentStore {
    entries: Mutex<StoreMap>,
    snapshot: SnapshotFile,
}

impl PersistentStore {
    /// Open a store backed by the given snapshot path
    ///
    /// Loads the full snapshot if the file exists; starts empty otherwise.
    /// An existing file that fails validation is a construction error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let snapshot = SnapshotFile::new(path);
        let entries = snapshot.load()?.unwrap_or_default();

        Ok(PersistentStore {
            entries: Mutex::new(entries),
            snapshot,
        })
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        self.snapshot.path()
    }

    /// Write `next` to disk, then make it the current state
    fn commit(&self, current: &mut StoreMap, next: StoreMap) -> Result<()> {
        self.snapshot.save(&next)?;
        *current = next;
        Ok(())
    }
}

impl KeyValueStore for PersistentStore {
    fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> Result<()> {
        let entry = match ttl_seconds {
            Some(ttl) => Entry::with_expiration(value, ttl),
            None => Entry::new(value),
        };

        let mut entries = self.entries.lock().unwrap();
        let mut next = entries.clone();
        next.insert(key.to_string(), entry);
        self.commit(&mut entries, next)
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            let mut next = entries.clone();
            next.remove(key);
            self.commit(&mut entries, next)?;
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if !entries.contains_key(key) {
            return Ok(());
        }

        let mut next = entries.clone();
        next.remove(key);
        self.commit(&mut entries, next)
    }

    fn expire(&self, key: &str, seconds: u64) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            let mut next = entries.clone();
            next.remove(key);
            return self.commit(&mut entries, next);
        }

        if !entries.contains_key(key) {
            return Ok(());
        }

        let mut next = entries.clone();
        if let Some(entry) = next.get_mut(key) {
            entry.set_expiration(seconds);
        }
        self.commit(&mut entries, next)
    }

    fn ttl(&self, key: &str) -> Result<i64> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            let mut next = entries.clone();
            next.remove(key);
            self.commit(&mut entries, next)?;
            return Ok(-2);
        }

        Ok(entries.get(key).map(|entry| entry.ttl_seconds()).unwrap_or(-2))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.lock().unwrap();

        let is_expired = entries.get(key).map(|e| e.is_expired()).unwrap_or(false);
        if is_expired {
            let mut next = entries.clone();
            next.remove(key);
            self.commit(&mut entries, next)?;
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
        let mut entries = self.entries.lock().unwrap();
        if entries.is_empty() {
            return Ok(());
        }

        self.commit(&mut entries, StoreMap::default())
    }
}
