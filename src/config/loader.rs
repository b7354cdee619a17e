//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::error::{EsiError, Result};

/// Load a config file and parse it into a [`ClientConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ClientConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EsiError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EsiError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

impl ClientConfig {
    /// Load a YAML config file. See [`load_config_file`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_config_file(path.as_ref())
    }
}

/// Parse YAML content into a [`ClientConfig`].
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ClientConfig> {
    if content.trim().is_empty() {
        return Ok(ClientConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EsiError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
