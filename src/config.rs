use crate::{
    auth::{Auth, ClientCredentials},
    endpoints::{PRODUCTION_BASE, SANDBOX_BASE},
    errors::Result,
    Error,
};
use std::time::Duration;

/// Client configuration
///
/// Immutable once built. The base URL (production, sandbox, or custom) is
/// fixed per client instance, so one client's environment can never leak
/// into another's in-flight call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API
    pub base_url: String,
    /// User-level credential
    pub auth: Auth,
    /// Client-level API credentials
    pub client_credentials: Option<ClientCredentials>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent suffix
    pub user_agent_suffix: Option<String>,
}

/// Builder for creating a configured [`Client`](crate::Client)
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    auth: Auth,
    client_credentials: Option<ClientCredentials>,
    timeout_ms: u64,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a client builder with a custom base URL
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g. `"https://api.camcloud.io/v1"`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: Auth::None,
            client_credentials: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
            user_agent_suffix: None,
        }
    }

    /// Create a client builder targeting the production API
    pub fn production() -> Self {
        Self::new(PRODUCTION_BASE)
    }

    /// Create a client builder targeting the sandbox API
    pub fn sandbox() -> Self {
        Self::new(SANDBOX_BASE)
    }

    /// Set the user-level credential (Basic or OAuth2)
    ///
    /// Defaults to [`Auth::None`]; vendor, model, and public-camera
    /// operations accept anonymous requests.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Set the client-level API credentials
    ///
    /// Required by every operation except vendor, model, and
    /// public-camera reads.
    pub fn client_credentials(mut self, credentials: ClientCredentials) -> Self {
        self.client_credentials = Some(credentials);
        self
    }

    /// Set the request timeout in milliseconds
    ///
    /// Applies per request. The SDK never retries on timeout; the failure
    /// surfaces as [`Error::Transport`] for the caller to decide.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Add a custom user agent suffix
    pub fn user_agent_extra(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client with the configured options
    pub fn build(self) -> Result<crate::Client> {
        let url = self.base_url.trim_end_matches('/');

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::Config(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        let config = ClientConfig {
            base_url: url.to_string(),
            auth: self.auth,
            client_credentials: self.client_credentials,
            timeout: Duration::from_millis(self.timeout_ms),
            user_agent_suffix: self.user_agent_suffix,
        };

        crate::client::Client::new(config)
    }
}
