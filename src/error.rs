//! Error types for ESI client operations.
//!
//! This module defines [`EsiError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems (missing credentials, bad config file) are
//!   reported before any request is made
//! - Parse failures cover both `Expires` headers and JSON bodies
//! - SSO failures carry the HTTP status and body for diagnosis
//! - Network failures wrap the underlying `reqwest` error
//!
//! Nothing here is fatal; every error is returned to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ESI client operations.
#[derive(Debug, Error)]
pub enum EsiError {
    /// A required client credential is empty.
    #[error("Missing client data: {field} is empty, cannot generate authorization URL")]
    MissingCredentials { field: &'static str },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An `Expires` header value did not match the expected date format.
    #[error("Invalid expiration timestamp '{value}': {message}")]
    InvalidExpiry { value: String, message: String },

    /// A response body could not be parsed as JSON.
    #[error("Invalid JSON in response from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The SSO token endpoint answered with a non-200 status or an empty body.
    #[error("Authentication failed with status {status}: '{body}'")]
    AuthFailed { status: u16, body: String },

    /// The SSO token response did not have the expected shape.
    #[error("Unexpected authentication response: {source}")]
    AuthResponseInvalid {
        #[source]
        source: serde_json::Error,
    },

    /// A request path template did not match its arguments.
    #[error("Invalid path template '{template}': {message}")]
    PathTemplate { template: String, message: String },

    /// Network-level failure from the HTTP transport.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ESI client operations.
pub type Result<T> = std::result::Result<T, EsiError>;
