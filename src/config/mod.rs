//! Client configuration.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! The library itself only needs credentials at construction time; config
//! files are a convenience for applications such as the `esi` binary.
//!
//! # Example
//!
//! ```
//! use esi_client::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("client_id: abc\nscope: publicData\n", Path::new("esi.yml")).unwrap();
//! assert_eq!(config.client_id, "abc");
//! assert_eq!(config.version, "latest");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, parse_config};
pub use schema::ClientConfig;
