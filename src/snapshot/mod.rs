//! Snapshot persistence module
//!
//! Provides durability by rewriting the entire store to disk after every
//! mutation and loading it back at startup. One snapshot is one file; there
//! is no incremental log.
//!
//! Container layout: [magic(4)] [payload_len(u64 LE)] [payload: JSON map] [xxh64(payload)(u64 LE)]

mod codec;
mod file;

pub use codec::{decode, encode, MAGIC};
pub use file::SnapshotFile;
