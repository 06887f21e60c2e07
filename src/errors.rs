//! Error types and handling for the CamCloud SDK
//!
//! This module defines the error types that can be returned by SDK operations.
//! Local precondition failures (endpoint template misuse, missing client
//! credentials, invalid arguments) fail fast without a network call; every
//! remote failure surfaces as exactly one of [`Error::Api`] or
//! [`Error::Transport`], never as a raw transport exception.
//!
//! # Example
//!
//! ```no_run
//! # use camera_cloud_sdk::{Client, Error};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! match client.get_camera("front-door").await {
//!     Ok(Some(camera)) => println!("Camera: {}", camera.name),
//!     Ok(None) => println!("Camera not found"),
//!     Err(Error::Api { status: 403, .. }) => println!("Access denied"),
//!     Err(Error::MissingCredentials(_)) => println!("Client credentials required"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Endpoint template substitution failed
    ///
    /// Raised when a caller supplies the wrong number of path parameters
    /// for an endpoint template. This is a hard local failure; a request
    /// with an unresolved placeholder is never sent.
    #[error("endpoint template '{operation}' expects {expected} path parameter(s), got {supplied}")]
    Template {
        /// Logical operation name
        operation: &'static str,
        /// Number of placeholders in the template
        expected: usize,
        /// Number of parameters supplied by the caller
        supplied: usize,
    },

    /// Operation requires client credentials that are not configured
    ///
    /// Raised before any network I/O when a credential-gated operation is
    /// invoked on a client built without `api_id`/`api_secret`.
    #[error("missing client credentials: {0}")]
    MissingCredentials(String),

    /// API error from the server
    #[error("api {status}: {message} (code={code:?})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the server, or the raw body when unparseable
        message: String,
        /// Machine-readable error code when the server supplied one
        code: Option<String>,
        /// Additional error context from the server
        context: Option<serde_json::Value>,
    },

    /// Transport-level failure
    ///
    /// DNS, TLS, connection, timeout, and malformed-body failures all land
    /// here; the underlying cause is preserved in the message.
    #[error("transport: {0}")]
    Transport(String),

    /// Client-side configuration or argument error
    #[error("config: {0}")]
    Config(String),
}

/// Error categories for coarse matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Endpoint template misuse
    Template,
    /// Missing client credentials
    MissingCredentials,
    /// Authentication/authorization rejected by the server (401/403)
    Auth,
    /// Request rejected as invalid (400)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Rate limit exceeded (429)
    RateLimit,
    /// Server-side error (5xx)
    Server,
    /// Transport-level failure
    Transport,
    /// Client-side configuration error
    Config,
    /// Other/unknown error
    Other,
}

impl Error {
    /// Get the error kind for categorization
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Template { .. } => ErrorKind::Template,
            Error::MissingCredentials(_) => ErrorKind::MissingCredentials,
            Error::Api { status, .. } => match status {
                400 => ErrorKind::Validation,
                401 | 403 => ErrorKind::Auth,
                404 => ErrorKind::NotFound,
                429 => ErrorKind::RateLimit,
                500..=599 => ErrorKind::Server,
                _ => ErrorKind::Other,
            },
            Error::Transport(_) => ErrorKind::Transport,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Get the HTTP status code if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Create an API error from a parsed server error body
    pub(crate) fn from_response(status: u16, body: ErrorResponse) -> Self {
        Error::Api {
            status,
            message: body.message,
            code: body.code,
            context: body.context,
        }
    }

    /// Create an API error from an unparseable body, keeping the raw text
    pub(crate) fn from_raw_response(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("HTTP error {}", status)
        } else {
            body
        };
        Error::Api {
            status,
            message,
            code: None,
            context: None,
        }
    }
}

/// Server error response structure
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            Error::Transport(format!("connection failed: {}", err))
        } else if err.is_decode() {
            Error::Transport(format!("malformed response body: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(format!("malformed response body: {}", err))
    }
}
