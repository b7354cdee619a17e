//! Client session state: credentials, request settings, and tokens.

use base64::Engine;
use std::fmt;

/// Default API version segment.
pub const DEFAULT_VERSION: &str = "latest";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("esi-client/", env!("CARGO_PKG_VERSION"));

/// Application credentials registered with the SSO.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Application client ID.
    pub client_id: String,
    /// Application secret key.
    pub client_secret: String,
    /// Callback URL registered for the application.
    pub callback_url: String,
}

impl Credentials {
    /// Create a set of credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.client_id.is_empty() {
            Some("client_id")
        } else if self.client_secret.is_empty() {
            Some("client_secret")
        } else if self.callback_url.is_empty() {
            Some("callback_url")
        } else {
            None
        }
    }

    /// `Authorization` header value for the token endpoint.
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(pair)
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

/// Everything a client needs to build requests on behalf of one application.
///
/// Tokens are empty until a code exchange succeeds. The only mutators are
/// [`ClientSession::set_tokens`] and [`ClientSession::set_access_token`],
/// reached through `&mut` on the owning client.
#[derive(Clone)]
pub struct ClientSession {
    /// Application credentials.
    pub credentials: Credentials,
    /// API version path segment, e.g. `latest` or `v4`.
    pub version: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Space-separated scopes requested during authorization.
    pub scope: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl ClientSession {
    /// Create an unauthenticated session with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            version: DEFAULT_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            scope: String::new(),
            access_token: None,
            refresh_token: None,
        }
    }

    /// Current access token.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Current refresh token.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Whether an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replace both tokens, as after a code exchange.
    pub fn set_tokens(&mut self, access_token: String, refresh_token: Option<String>) {
        self.access_token = Some(access_token).filter(|t| !t.is_empty());
        self.refresh_token = refresh_token.filter(|t| !t.is_empty());
    }

    /// Use an access token obtained elsewhere.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into()).filter(|t| !t.is_empty());
    }
}

impl fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSession")
            .field("credentials", &self.credentials)
            .field("version", &self.version)
            .field("user_agent", &self.user_agent)
            .field("scope", &self.scope)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
