//! GET, POST, and identity requests.
//!
//! GET responses are cached by canonical URL until the server's `Expires`
//! time. POST and identity lookups always go to the network.

use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, EXPIRES, USER_AGENT};
use serde_json::Value;
use std::fmt::Display;

use super::EsiClient;
use crate::error::{EsiError, Result};

const PLACEHOLDER: &str = "{}";

/// Substitute `{}` placeholders in `template` with `args`, in order.
///
/// With no arguments the template is returned unchanged.
///
/// # Errors
///
/// Returns [`EsiError::PathTemplate`] when the number of placeholders and
/// arguments differ.
pub fn format_path(template: &str, args: &[&dyn Display]) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let pieces: Vec<&str> = template.split(PLACEHOLDER).collect();
    let placeholders = pieces.len() - 1;
    if placeholders != args.len() {
        return Err(EsiError::PathTemplate {
            template: template.to_string(),
            message: format!(
                "expected {} argument(s), got {}",
                placeholders,
                args.len()
            ),
        });
    }

    let mut path = String::with_capacity(template.len());
    for (piece, arg) in pieces.iter().zip(args) {
        path.push_str(piece);
        path.push_str(&arg.to_string());
    }
    if let Some(last) = pieces.last() {
        path.push_str(last);
    }

    Ok(path)
}

impl EsiClient {
    /// Canonical URL for an API path: base + version + `/` + path + `/`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}/{}/",
            self.endpoints.base_url, self.session.version, path
        )
    }

    /// Attach `User-Agent`, `Accept`, and bearer authorization when a token is held.
    fn with_standard_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header(USER_AGENT, &self.session.user_agent)
            .header(ACCEPT, "application/json");

        match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch data from ESI, or return a cached copy that has not expired.
    ///
    /// `path` may contain `{}` placeholders filled from `args`. The response
    /// is cached until its `Expires` time; a missing or malformed header
    /// only skips caching.
    pub fn get(&self, path: &str, args: &[&dyn Display]) -> Result<Value> {
        let url = self.api_url(&format_path(path, args)?);

        if let Some(cached) = self.cache.get(&url) {
            tracing::info!("Returning cached value for URL '{}'", url);
            return Ok(cached);
        }

        tracing::info!("Making GET call to URL '{}'", url);
        let response = send(self.with_standard_headers(self.http.get(&url)))?;

        let expires = response.headers().get(EXPIRES).cloned();

        let document = parse_body(&url, response)?;

        match expires.as_ref().map(|v| v.to_str()) {
            Some(Ok(expires)) => {
                if let Err(e) = self.cache.set(&url, document.clone(), expires) {
                    tracing::warn!("Not caching response from '{}': {}", url, e);
                }
            }
            Some(Err(e)) => tracing::warn!(
                "Unreadable Expires header on response from '{}' ({}); not caching",
                url,
                e
            ),
            None => tracing::warn!("No Expires header on response from '{}'; not caching", url),
        }

        Ok(document)
    }

    /// Send `body` to ESI and return the parsed response. Never cached.
    pub fn post(&self, path: &str, body: &str) -> Result<Value> {
        let url = self.api_url(path);
        tracing::info!("Making POST call to URL '{}'", url);

        let request = self
            .with_standard_headers(self.http.post(&url))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());

        parse_body(&url, send(request)?)
    }

    /// Basic information about the character the access token belongs to.
    ///
    /// Always a live request; identity lookups bypass the cache.
    pub fn fetch_identity(&self) -> Result<Value> {
        tracing::info!("Making whoami request");
        let url = &self.endpoints.verify_url;
        let response = send(self.with_standard_headers(self.http.get(url)))?;
        parse_body(url, response)
    }
}

fn send(request: RequestBuilder) -> Result<Response> {
    request
        .send()
        .inspect_err(|e| tracing::error!("Error making request to ESI: {}", e))
        .map_err(EsiError::from)
}

fn parse_body(url: &str, response: Response) -> Result<Value> {
    let body = response.text()?;
    serde_json::from_str(&body).map_err(|source| {
        tracing::error!("Error converting response body from '{}' to JSON", url);
        EsiError::InvalidJson {
            url: url.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoints;
    use chrono::{Duration, Utc};
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> EsiClient {
        EsiClient::new("id", "secret", "http://localhost/cb")
            .unwrap()
            .with_endpoints(Endpoints::rooted_at(&server.base_url()))
    }

    fn expires_in(duration: Duration) -> String {
        (Utc::now() + duration)
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }

    #[test]
    fn format_path_substitutes_in_order() {
        let path = format_path("characters/{}/assets/{}", &[&90000001, &"page"]).unwrap();
        assert_eq!(path, "characters/90000001/assets/page");
    }

    #[test]
    fn format_path_without_args_is_verbatim() {
        assert_eq!(format_path("status", &[]).unwrap(), "status");
        assert_eq!(format_path("odd/{}", &[]).unwrap(), "odd/{}");
    }

    #[test]
    fn format_path_rejects_count_mismatch() {
        let err = format_path("universe/types/{}", &[&1, &2]).unwrap_err();
        assert!(matches!(err, EsiError::PathTemplate { .. }));
        assert!(format_path("status", &[&1]).is_err());
    }

    #[test]
    fn api_url_is_canonical() {
        let client = EsiClient::new("id", "secret", "cb").unwrap();
        assert_eq!(
            client.api_url("universe/types/34"),
            "https://esi.tech.ccp.is/latest/universe/types/34/"
        );
    }

    #[test]
    fn get_sends_standard_headers_without_auth() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/status/")
                .header("Accept", "application/json")
                .header_missing("Authorization");
            then.status(200).json_body(json!({"players": 20000}));
        });

        let client = client_for(&server).with_user_agent("test-agent");
        let doc = client.get("status", &[]).unwrap();

        assert_eq!(doc["players"], 20000);
        mock.assert();
    }

    #[test]
    fn get_sends_bearer_token_when_authenticated() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/latest/characters/1/")
                .header("Authorization", "Bearer abc123")
                .header("User-Agent", "test-agent");
            then.status(200).json_body(json!({"name": "Pilot"}));
        });

        let mut client = client_for(&server).with_user_agent("test-agent");
        client.set_access_token("abc123");
        client.get("characters/{}", &[&1]).unwrap();

        mock.assert();
    }

    #[test]
    fn get_uses_cache_on_second_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/universe/types/34/");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .json_body(json!({"name": "Tritanium"}));
        });

        let client = client_for(&server);
        let first = client.get("universe/types/{}", &[&34]).unwrap();
        let second = client.get("universe/types/{}", &[&34]).unwrap();

        assert_eq!(first, second);
        mock.assert_calls(1);
    }

    #[test]
    fn get_refetches_when_response_already_expired() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200)
                .header("Expires", "Thu, 09 Nov 2017 17:27:14 GMT")
                .json_body(json!({"players": 1}));
        });

        let client = client_for(&server);
        client.get("status", &[]).unwrap();
        client.get("status", &[]).unwrap();

        mock.assert_calls(2);
    }

    #[test]
    fn get_without_expires_is_returned_but_not_cached() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200).json_body(json!({"players": 2}));
        });

        let client = client_for(&server);
        let doc = client.get("status", &[]).unwrap();

        assert_eq!(doc["players"], 2);
        assert!(client.cache().is_empty());
        client.get("status", &[]).unwrap();
        mock.assert_calls(2);
    }

    #[test]
    fn get_with_malformed_expires_still_returns_document() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200)
                .header("Expires", "tomorrow-ish")
                .json_body(json!({"players": 3}));
        });

        let client = client_for(&server);
        let doc = client.get("status", &[]).unwrap();

        assert_eq!(doc["players"], 3);
        assert!(client.cache().is_empty());
    }

    #[test]
    fn get_with_non_ascii_expires_is_not_cached() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200)
                .header("Expires", "Thu, 09 Nov 2099 17:27:14 GMT\u{e9}")
                .json_body(json!({"players": 4}));
        });

        let client = client_for(&server);
        let doc = client.get("status", &[]).unwrap();

        assert_eq!(doc["players"], 4);
        assert!(client.cache().is_empty());
        client.get("status", &[]).unwrap();
        mock.assert_calls(2);
    }

    #[test]
    fn get_with_invalid_json_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .body("<html>not json</html>");
        });

        let client = client_for(&server);
        let err = client.get("status", &[]).unwrap_err();

        assert!(matches!(err, EsiError::InvalidJson { .. }));
        assert!(client.cache().is_empty());
    }

    #[test]
    fn get_transport_failure_is_reported() {
        let client = EsiClient::new("id", "secret", "cb")
            .unwrap()
            .with_endpoints(Endpoints::rooted_at("http://127.0.0.1:1"));

        let err = client.get("status", &[]).unwrap_err();

        assert!(matches!(err, EsiError::Transport(_)));
    }

    #[test]
    fn clear_cache_forces_refetch() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/latest/status/");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .json_body(json!({"players": 4}));
        });

        let client = client_for(&server);
        client.get("status", &[]).unwrap();
        mock.assert_calls(1);

        client.clear_cache();

        client.get("status", &[]).unwrap();
        mock.assert_calls(2);
    }

    #[test]
    fn post_sends_raw_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/latest/universe/names/")
                .header("Content-Type", "application/json")
                .body("[34, 35]");
            then.status(200)
                .json_body(json!([{"id": 34, "name": "Tritanium"}]));
        });

        let client = client_for(&server);
        let doc = client.post("universe/names", "[34, 35]").unwrap();

        assert_eq!(doc[0]["name"], "Tritanium");
        mock.assert();
    }

    #[test]
    fn post_bypasses_cache() {
        let server = MockServer::start();
        let get_mock = server.mock(|when, then| {
            when.method(GET).path("/latest/universe/ids/");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .json_body(json!({"cached": true}));
        });
        let post_mock = server.mock(|when, then| {
            when.method(POST).path("/latest/universe/ids/");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .json_body(json!({"cached": false}));
        });

        let client = client_for(&server);
        client.get("universe/ids", &[]).unwrap();

        let first = client.post("universe/ids", "[\"Jita\"]").unwrap();
        let second = client.post("universe/ids", "[\"Jita\"]").unwrap();

        assert_eq!(first["cached"], false);
        assert_eq!(second["cached"], false);
        get_mock.assert_calls(1);
        post_mock.assert_calls(2);
        assert_eq!(client.cache().len(), 1);
    }

    #[test]
    fn fetch_identity_is_never_cached() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/oauth/verify")
                .header("Authorization", "Bearer tok");
            then.status(200)
                .header("Expires", expires_in(Duration::hours(1)))
                .json_body(json!({"CharacterID": 90000001, "CharacterName": "Pilot"}));
        });

        let mut client = client_for(&server);
        client.set_access_token("tok");

        let first = client.fetch_identity().unwrap();
        client.fetch_identity().unwrap();

        assert_eq!(first["CharacterName"], "Pilot");
        mock.assert_calls(2);
        assert!(client.cache().is_empty());
    }
}
