//! esi-client - EVE Swagger Interface client.
//!
//! Provides SSO code-grant authentication, GET/POST request execution, and
//! an in-memory response cache driven by the server's `Expires` headers.
//!
//! # Modules
//!
//! - [`cache`] - Response cache and `Expires` parsing
//! - [`cli`] - Command-line interface for the `esi` binary
//! - [`client`] - The [`EsiClient`] and its SSO and request operations
//! - [`config`] - Client configuration files
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use esi_client::cache::ResponseCache;
//! use serde_json::json;
//!
//! let cache = ResponseCache::new();
//! cache
//!     .set("https://esi.tech.ccp.is/latest/status/", json!({"players": 1}), "Thu, 09 Nov 2017 17:27:14 GMT")
//!     .unwrap();
//!
//! // Already expired: the read evicts it.
//! assert!(cache.get("https://esi.tech.ccp.is/latest/status/").is_none());
//! assert!(cache.is_empty());
//! ```

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;

pub use client::EsiClient;
pub use error::{EsiError, Result};
