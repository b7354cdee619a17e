//! SSO authorization: building the login URL and exchanging codes for tokens.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::EsiClient;
use crate::error::{EsiError, Result};

/// Token endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token type, normally `Bearer`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Refresh token; absent when no scopes were granted.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl EsiClient {
    /// URL a user must visit to authorize this application with the SSO.
    ///
    /// Values are inserted as given, without additional percent-encoding.
    ///
    /// # Errors
    ///
    /// Returns [`EsiError::MissingCredentials`] if the client ID, secret, or
    /// callback URL is empty.
    pub fn authorize_url(&self) -> Result<String> {
        tracing::debug!("Creating authorization url");
        let credentials = &self.session.credentials;

        if let Some(field) = credentials.missing_field() {
            let err = EsiError::MissingCredentials { field };
            tracing::error!("{}", err);
            return Err(err);
        }

        Ok(format!(
            "{}?response_type=code&redirect_uri={}&client_id={}&scope={}",
            self.endpoints.authorize_url,
            credentials.callback_url,
            credentials.client_id,
            self.session.scope,
        ))
    }

    /// Exchange an authorization code from the SSO callback for tokens.
    ///
    /// On success the access and refresh tokens replace any held before.
    ///
    /// # Errors
    ///
    /// - [`EsiError::Transport`] if the request cannot be made
    /// - [`EsiError::AuthFailed`] on a non-200 status or an empty body
    /// - [`EsiError::AuthResponseInvalid`] if the body is not a token response
    pub fn exchange_code_for_token(&mut self, code: &str) -> Result<()> {
        tracing::debug!("Starting authorization flow");
        let form = format!(
            "grant_type=authorization_code&code={}",
            urlencoding::encode(code)
        );

        let response = self
            .http
            .post(&self.endpoints.token_url)
            .header(AUTHORIZATION, self.session.credentials.basic_auth_header())
            .header(USER_AGENT, &self.session.user_agent)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form)
            .send()
            .inspect_err(|e| tracing::error!("Error making token request: {}", e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text()?;

        if body.is_empty() || status != StatusCode::OK {
            tracing::error!(
                "Error with authenticate response, code {}, body: '{}'",
                status.as_u16(),
                body
            );
            for (name, value) in &headers {
                tracing::debug!("{} = {:?}", name, value);
            }
            return Err(EsiError::AuthFailed {
                status: status.as_u16(),
                body,
            });
        }

        let tokens: AuthResponse = serde_json::from_str(&body).map_err(|source| {
            tracing::error!("Error parsing response, body: '{}'", body);
            EsiError::AuthResponseInvalid { source }
        })?;

        tracing::debug!("Setting token");
        self.session
            .set_tokens(tokens.access_token, tokens.refresh_token);
        Ok(())
    }
}
