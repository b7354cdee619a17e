//! ESI client.
//!
//! [`EsiClient`] owns the HTTP transport, the session state, and one
//! [`ResponseCache`]. It provides:
//! - SSO authorization URL generation and code-for-token exchange ([`auth`])
//! - Cached GET, uncached POST, and identity lookup ([`request`])
//!
//! All operations block until the round trip (or cache hit) completes.
//!
//! # Example
//!
//! ```no_run
//! use esi_client::EsiClient;
//!
//! let mut client = EsiClient::new("client-id", "secret", "http://localhost/callback")
//!     .unwrap()
//!     .with_scope("esi-skills.read_skills.v1");
//!
//! println!("Visit {}", client.authorize_url().unwrap());
//! client.exchange_code_for_token("code-from-callback").unwrap();
//!
//! let tritanium = client.get("universe/types/{}", &[&34]).unwrap();
//! println!("{}", tritanium["name"]);
//! ```

pub mod auth;
pub mod endpoints;
pub mod request;
pub mod session;

pub use auth::AuthResponse;
pub use endpoints::Endpoints;
pub use request::format_path;
pub use session::{ClientSession, Credentials};

use reqwest::blocking::Client;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::error::Result;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for ESI and its SSO.
pub struct EsiClient {
    http: Client,
    cache: ResponseCache,
    session: ClientSession,
    endpoints: Endpoints,
    timeout: Duration,
}

impl EsiClient {
    /// Create an unauthenticated client for the given application credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Result<Self> {
        tracing::debug!("Initializing a new ESI client");
        let credentials = Credentials::new(client_id, client_secret, callback_url);
        Ok(Self {
            http: build_http(DEFAULT_TIMEOUT)?,
            cache: ResponseCache::new(),
            session: ClientSession::new(credentials),
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Self::new(
            config.client_id.as_str(),
            config.client_secret.as_str(),
            config.callback_url.as_str(),
        )?
        .with_version(config.version.as_str())
        .with_user_agent(config.user_agent.as_str())
        .with_scope(config.scope.as_str())
        .with_endpoints(config.endpoints.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs))?;

        Ok(client)
    }

    /// Set the API version path segment.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.session.version = version.into();
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.session.user_agent = user_agent.into();
        self
    }

    /// Set the scopes requested during authorization.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.session.scope = scope.into();
        self
    }

    /// Point the client at different endpoints.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Rebuild the transport with a different timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = build_http(timeout)?;
        self.timeout = timeout;
        Ok(self)
    }

    /// Get the configured transport timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Session state.
    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    /// Endpoints in use.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Current access token, if authenticated.
    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token()
    }

    /// Current refresh token, if one was issued.
    pub fn refresh_token(&self) -> Option<&str> {
        self.session.refresh_token()
    }

    /// Whether an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Use an access token obtained outside this client.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.session.set_access_token(access_token);
    }

    /// Discard every cached response.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn build_http(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
