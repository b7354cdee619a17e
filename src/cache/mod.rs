//! Response caching.
//!
//! GET responses are cached in memory keyed by their canonical URL. The
//! server's `Expires` header is the only source of cache lifetime; there are
//! no default TTLs and no background sweeping. Expired entries are evicted
//! when they are next read.

pub mod entry;
pub mod expiry;
pub mod store;

pub use entry::CacheEntry;
pub use expiry::parse_expiry;
pub use store::ResponseCache;
