//! Snapshot file access
//!
//! Handles loading a snapshot at startup and atomically rewriting it after
//! mutations.

use super::codec;
use crate::error::Result;
use crate::store::StoreMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the path of one snapshot file
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a handle for the given path (the file itself may not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot if the file exists
    ///
    /// Returns `Ok(None)` when there is no file yet. An existing file that
    /// fails validation is an error, never an empty store.
    pub fn load(&self) -> Result<Option<StoreMap>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entries = codec::decode(&data)?;
        info!(
            "snapshot loaded: {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(Some(entries))
    }

    /// Rewrite the snapshot with the given entries
    ///
    /// Writes a temporary sibling file, syncs it, then renames it over the
    /// target so a crash mid-write never leaves a torn snapshot behind.
    pub fn save(&self, entries: &StoreMap) -> Result<()> {
        let bytes = codec::encode(entries)?;

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            "snapshot written: {} entries, {} bytes to {}",
            entries.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_owned();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::{Entry, Value};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("cuprumdb_test_snapshot_file.snap");
        let _ = fs::remove_file(&path);

        let snapshot = SnapshotFile::new(&path);
        let mut entries = StoreMap::default();
        entries.insert("key".to_string(), Entry::new(Value::string("value")));

        snapshot.save(&entries).unwrap();
        let loaded = snapshot.load().unwrap().unwrap();
        assert_eq!(loaded, entries);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let snapshot = SnapshotFile::new(temp_path("cuprumdb_test_snapshot_missing.snap"));
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let path = temp_path("cuprumdb_test_snapshot_corrupt.snap");
        fs::write(&path, b"definitely not a snapshot").unwrap();

        let snapshot = SnapshotFile::new(&path);
        assert!(matches!(snapshot.load(), Err(StoreError::Corrupt(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let path = temp_path("cuprumdb_test_snapshot_replace.snap");
        let _ = fs::remove_file(&path);

        let snapshot = SnapshotFile::new(&path);
        let mut entries = StoreMap::default();
        entries.insert("old".to_string(), Entry::new(Value::string("old")));
        snapshot.save(&entries).unwrap();

        entries.clear();
        entries.insert("new".to_string(), Entry::new(Value::string("new")));
        snapshot.save(&entries).unwrap();

        let loaded = snapshot.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("new"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = temp_path("cuprumdb_no_such_dir").join("state.snap");
        let snapshot = SnapshotFile::new(&path);
        let entries = StoreMap::default();
        assert!(matches!(snapshot.save(&entries), Err(StoreError::Io(_))));
    }
}
