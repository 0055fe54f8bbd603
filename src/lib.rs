//! CuprumDB - A lightweight in-process key-value store with per-key TTL
//! and optional snapshot persistence
//!
//! CuprumDB is a library, not a service: callers construct a store and talk
//! to it directly. Two backends share one contract:
//! - A volatile in-memory map, gone when the process ends
//! - A persistent map that rewrites a full snapshot file after every mutation
//!   and reloads it at construction
//!
//! Expiration is lazy: an expired entry is evicted when an operation next
//! observes it, never by a background sweep.
//!
//! ```rust,no_run
//! use cuprumdb::{KeyValueStore, Store, StoreConfig, Value};
//!
//! fn main() -> cuprumdb::Result<()> {
//!     let store = Store::new(StoreConfig::default())?;
//!
//!     store.set("session:42", Value::string("alice"), Some(60))?;
//!     assert!(store.get("session:42")?.is_some());
//!     assert!(store.ttl("session:42")? <= 60);
//!
//!     store.delete("session:42")?;
//!     assert_eq!(store.ttl("session:42")?, -2);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod snapshot;
pub mod store;

/// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{Entry, KeyValueStore, PersistentStore, Store, Value, VolatileStore};
