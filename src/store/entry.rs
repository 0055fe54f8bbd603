//! Entry structure for key-value pairs

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in whole seconds since the Unix epoch
pub(crate) fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Represents a single entry in the store
///
/// Expiration is an absolute instant in seconds since the Unix epoch rather
/// than a monotonic `Instant`, so an entry serializes into a snapshot and
/// keeps its remaining lifetime across store restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The value
    pub value: Value,

    /// Optional expiration time (absolute, epoch seconds)
    pub expire_at: Option<u64>,
}

impl Entry {
    /// Create a new entry without expiration
    pub fn new(value: Value) -> Self {
        Entry {
            value,
            expire_at: None,
        }
    }

    /// Create a new entry expiring `ttl_seconds` from now
    pub fn with_expiration(value: Value, ttl_seconds: u64) -> Self {
        Entry {
            value,
            expire_at: Some(now_epoch_secs() + ttl_seconds),
        }
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        match self.expire_at {
            Some(expire_at) => now_epoch_secs() >= expire_at,
            None => false,
        }
    }

    /// Set expiration to `ttl_seconds` from now, overwriting any prior one
    pub fn set_expiration(&mut self, ttl_seconds: u64) {
        self.expire_at = Some(now_epoch_secs() + ttl_seconds);
    }

    /// Get remaining TTL in seconds
    ///
    /// Returns:
    /// - n >= 0: remaining TTL in seconds
    /// - -1: no expiration set
    /// - -2: already expired
    pub fn ttl_seconds(&self) -> i64 {
        match self.expire_at {
            Some(expire_at) => {
                let now = now_epoch_secs();
                if expire_at > now {
                    (expire_at - now) as i64
                } else {
                    -2 // Expired
                }
            }
            None => -1, // No expiration
        }
    }
}
