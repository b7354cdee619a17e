//! In-memory response cache.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::entry::CacheEntry;
use super::expiry::parse_expiry;
use crate::error::Result;

/// Cache of GET responses keyed by canonical request URL.
///
/// Expiry is checked lazily: an expired entry stays in the map until the
/// next read of its URL, which evicts it and reports a miss. Reads and
/// writes both mutate the map, so all access goes through one lock.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // The map holds plain values, so a panic elsewhere cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a fresh document for `url`, evicting it if it has expired.
    pub fn get(&self, url: &str) -> Option<Value> {
        self.get_at(url, Utc::now())
    }

    /// Look up a document for `url` as of `now`.
    pub fn get_at(&self, url: &str, now: DateTime<Utc>) -> Option<Value> {
        let mut entries = self.lock();

        let Some(entry) = entries.get(url) else {
            tracing::debug!("No entry in cache for URL '{}'", url);
            return None;
        };

        if entry.is_expired_at(now) {
            tracing::debug!("Data in cache for '{}' is expired; removing", url);
            entries.remove(url);
            return None;
        }

        tracing::debug!("Returning non-expired cached data for '{}'", url);
        Some(entry.data.clone())
    }

    /// Store `data` for `url`, expiring at the time given by an `Expires` header.
    ///
    /// On a parse failure the cache is left untouched.
    pub fn set(&self, url: &str, data: Value, expires: &str) -> Result<()> {
        let expires_at = parse_expiry(expires)?;
        self.set_until(url, data, expires_at);
        Ok(())
    }

    /// Store `data` for `url` with an already-parsed expiry. Last write wins.
    pub fn set_until(&self, url: &str, data: Value, expires_at: DateTime<Utc>) {
        tracing::debug!("Storing url in cache, '{}', expires '{}'", url, expires_at);
        self.lock()
            .insert(url.to_string(), CacheEntry::new(data, expires_at));
    }

    /// Discard every entry.
    pub fn clear(&self) {
        tracing::debug!("Clearing cache");
        *self.lock() = HashMap::new();
    }

    /// Whether an entry exists for `url`, without checking or evicting on expiry.
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains_key(url)
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
