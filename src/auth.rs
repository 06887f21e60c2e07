//! Authentication support for the CamCloud SDK
//!
//! Two independent credential levels exist:
//!
//! 1. **User credentials** ([`Auth`]) - HTTP Basic or an OAuth2 bearer
//!    token, attached as an `Authorization` header. At most one applies
//!    per request, selected by a fixed precedence: a non-empty OAuth2
//!    access token wins over Basic, and an empty credential means the
//!    request goes out anonymous.
//! 2. **Client credentials** ([`ClientCredentials`]) - the `api_id` /
//!    `api_secret` pair (plus optional redirect URI) that credential-gated
//!    operations require, attached as query parameters.
//!
//! Selection is a pure function of the credential value. There is no
//! authenticator hierarchy and no shared mutable state; the same
//! credential always produces the same header.
//!
//! # Examples
//!
//! ```
//! use camera_cloud_sdk::Auth;
//!
//! // HTTP Basic
//! let auth = Auth::basic("joe", "pa55w0rd");
//!
//! // OAuth2 bearer token
//! let auth = Auth::oauth2("8b076ea1b2...");
//!
//! // Anonymous (vendor/model/public endpoints accept this)
//! let auth = Auth::None;
//! ```

use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// User-level credential for API requests
///
/// Credentials are immutable once constructed and stored using
/// [`SecretString`] to prevent accidental exposure in logs or debug
/// output.
#[derive(Clone, Default)]
pub enum Auth {
    /// No user credential; requests are sent anonymously
    #[default]
    None,
    /// HTTP Basic authentication
    Basic {
        /// Account username
        username: String,
        /// Account password
        password: SecretString,
    },
    /// OAuth2 bearer token authentication
    ///
    /// Sent as `Authorization: bearer <access_token>`
    OAuth2 {
        /// Access token issued by the authorization server
        access_token: SecretString,
        /// Token type from the token response; normalized to lowercase,
        /// defaults to `bearer`
        token_type: Option<String>,
        /// Token lifetime in seconds, kept for caller bookkeeping only
        expires_in: Option<u64>,
    },
}

impl Auth {
    /// Create a HTTP Basic credential
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Auth::Basic {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Create an OAuth2 bearer credential
    pub fn oauth2(access_token: impl Into<String>) -> Self {
        Auth::OAuth2 {
            access_token: SecretString::new(access_token.into()),
            token_type: None,
            expires_in: None,
        }
    }

    /// Create an OAuth2 credential from a full token response
    pub fn oauth2_token(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: Option<u64>,
    ) -> Self {
        Auth::OAuth2 {
            access_token: SecretString::new(access_token.into()),
            token_type: Some(token_type.into()),
            expires_in,
        }
    }

    /// Select the `Authorization` header for this credential, if any
    ///
    /// Precedence: a non-empty OAuth2 access token beats Basic; Basic
    /// applies only with a non-empty username; anything else is anonymous.
    /// Pure function of the credential value.
    pub(crate) fn authorization_header(&self) -> Option<(&'static str, String)> {
        match self {
            Auth::OAuth2 {
                access_token,
                token_type,
                ..
            } if !access_token.expose_secret().is_empty() => {
                let scheme = token_type
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(str::to_lowercase)
                    .unwrap_or_else(|| "bearer".to_string());
                Some((
                    "Authorization",
                    format!("{} {}", scheme, access_token.expose_secret()),
                ))
            }
            Auth::Basic { username, password } if !username.is_empty() => {
                let raw = format!("{}:{}", username, password.expose_secret());
                let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
                Some(("Authorization", format!("Basic {}", encoded)))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::None => write!(f, "Auth::None"),
            Auth::Basic { username, .. } => write!(f, "Auth::Basic({}, ****)", username),
            Auth::OAuth2 { .. } => write!(f, "Auth::OAuth2(****)"),
        }
    }
}

/// Client-level API credentials
///
/// The `api_id`/`api_secret` pair required by credential-gated operations,
/// distinct from the end-user [`Auth`] credential. Attached to requests as
/// the `api_id` and `api_key` query parameters.
#[derive(Clone)]
pub struct ClientCredentials {
    /// API client identifier
    pub api_id: String,
    /// API client secret
    pub api_secret: SecretString,
    /// Optional OAuth2 redirect URI registered for this client
    pub redirect_uri: Option<String>,
}

impl ClientCredentials {
    /// Create client credentials from an id/secret pair
    pub fn new(api_id: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_secret: SecretString::new(api_secret.into()),
            redirect_uri: None,
        }
    }

    /// Attach a registered redirect URI
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Expand into the query parameters the API expects
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("api_id", self.api_id.clone()),
            ("api_key", self.api_secret.expose_secret().clone()),
        ];
        if let Some(redirect_uri) = &self.redirect_uri {
            pairs.push(("redirect_uri", redirect_uri.clone()));
        }
        pairs
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("api_id", &self.api_id)
            .field("api_secret", &"****")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}
