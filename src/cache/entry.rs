//! Cache entry type.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single cached GET response.
///
/// Entries are never mutated once stored; an overwrite replaces the whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Parsed response body.
    pub data: Value,
    /// When the server says the response stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create a new cache entry.
    pub fn new(data: Value, expires_at: DateTime<Utc>) -> Self {
        Self { data, expires_at }
    }

    /// Check if the entry has expired as of `now`.
    ///
    /// An entry whose expiry equals `now` counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
