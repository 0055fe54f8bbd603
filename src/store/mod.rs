//! Storage module
//!
//! Provides the core data structures and the two storage backends. The
//! backends share one contract so the facade selects a backend once and
//! forwards everything without further branching.

mod entry;
mod facade;
mod persistent;
mod value;
mod volatile;

pub use entry::Entry;
pub use facade::Store;
pub use persistent::PersistentStore;
pub use value::Value;
pub use volatile::VolatileStore;

use crate::error::Result;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for the backing map with SipHasher
pub type StoreMap = HashMap<String, Entry, BuildHasherDefault<SipHasher13>>;

/// Contract shared by every storage backend
///
/// Both backends implement these operations with identical semantics; only
/// durability differs. Every operation returns `Result` so the contract is
/// uniform; the volatile backend simply never fails. Expiration is always
/// evaluated against wall-clock "now" at call time, and any operation that
/// observes an expired entry evicts it on the spot (lazy deletion).
pub trait KeyValueStore: Send + Sync {
    /// Insert or fully replace the entry for `key`
    ///
    /// With `Some(n)` the entry expires `n` seconds from now; with `None`
    /// it never expires. Overwriting replaces value and expiration as one
    /// unit.
    fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> Result<()>;

    /// Current value, or `None` if the key was never set, deleted or expired
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Remove the entry if present; silent no-op if absent
    fn delete(&self, key: &str) -> Result<()>;

    /// Set expiration to `seconds` from now, overwriting any prior one
    ///
    /// Silent no-op if the key is absent.
    fn expire(&self, key: &str, seconds: u64) -> Result<()>;

    /// Remaining TTL in seconds
    ///
    /// Returns:
    /// - n >= 0: remaining TTL in seconds
    /// - -1: key exists but has no expiration
    /// - -2: key does not exist (or is expired)
    fn ttl(&self, key: &str) -> Result<i64>;

    /// Check if a key exists (and is not expired)
    fn exists(&self, key: &str) -> Result<bool>;

    /// Number of live (non-expired) entries
    fn len(&self) -> Result<usize>;

    /// Check if the store holds no live entries
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All live keys, in no particular order
    fn keys(&self) -> Result<Vec<String>>;

    /// Remove all entries
    fn clear(&self) -> Result<()>;
}
