//! Upstream endpoint locations.

use serde::{Deserialize, Serialize};

/// Top-level URL of ESI.
pub const BASE_URL: &str = "https://esi.tech.ccp.is/";

/// URL users visit to authorize the application.
pub const AUTHORIZE_URL: &str = "https://login.eveonline.com/oauth/authorize";

/// URL for exchanging an authorization code for tokens.
pub const TOKEN_URL: &str = "https://login.eveonline.com/oauth/token";

/// The "whoami" URL.
pub const VERIFY_URL: &str = "https://login.eveonline.com/oauth/verify";

/// The set of URLs a client talks to.
///
/// Defaults to the public ESI and SSO endpoints. Tests and proxies can point
/// a client elsewhere with [`Endpoints::rooted_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// ESI root; the API version and path are appended to it. Must end with `/`.
    pub base_url: String,
    /// SSO authorization page.
    pub authorize_url: String,
    /// SSO token exchange endpoint.
    pub token_url: String,
    /// SSO identity endpoint.
    pub verify_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            verify_url: VERIFY_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Serve every endpoint from a single root, using the public URL layout.
    ///
    /// `http://127.0.0.1:8080` yields `http://127.0.0.1:8080/` for ESI and
    /// `http://127.0.0.1:8080/oauth/{authorize,token,verify}` for SSO.
    pub fn rooted_at(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            base_url: format!("{}/", root),
            authorize_url: format!("{}/oauth/authorize", root),
            token_url: format!("{}/oauth/token", root),
            verify_url: format!("{}/oauth/verify", root),
        }
    }
}
