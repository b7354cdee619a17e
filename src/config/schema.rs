//! Client configuration schema.
//!
//! Maps to a YAML file such as:
//!
//! ```yaml
//! client_id: 0123456789abcdef
//! client_secret: s3cr3t
//! callback_url: http://localhost:8000/callback
//! scope: esi-skills.read_skills.v1
//! version: latest
//! timeout_secs: 30
//! endpoints:
//!   base_url: https://esi.tech.ccp.is/
//! ```

use serde::{Deserialize, Serialize};

use crate::client::session::{DEFAULT_USER_AGENT, DEFAULT_VERSION};
use crate::client::Endpoints;

/// Settings used to construct an [`EsiClient`](crate::EsiClient).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Application client ID.
    pub client_id: String,

    /// Application secret key.
    pub client_secret: String,

    /// Callback URL registered with the SSO.
    pub callback_url: String,

    /// Space-separated scopes to request.
    pub scope: String,

    /// API version path segment.
    pub version: String,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Transport timeout in seconds.
    pub timeout_secs: u64,

    /// Endpoint overrides.
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            callback_url: String::new(),
            scope: String::new(),
            version: DEFAULT_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            endpoints: Endpoints::default(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("callback_url", &self.callback_url)
            .field("scope", &self.scope)
            .field("version", &self.version)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
