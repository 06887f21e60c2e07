//! CamCloud SDK for Rust
//!
//! A client SDK for the CamCloud camera management API, covering vendors,
//! models, users, cameras, live and recorded snapshots, shares, webhooks,
//! clip archives, and public camera discovery.
//!
//! # Features
//!
//! - Async/await support with the tokio runtime
//! - HTTP Basic and OAuth2 bearer authentication, plus client-level
//!   `api_id`/`api_key` credentials for gated operations
//! - Typed results: single-entity lookups return `Option`, list endpoints
//!   return empty lists for unmatched filters, and every failure is one
//!   typed error
//! - Production/sandbox selection fixed per client instance
//! - Secure credential handling via `secrecy`
//!
//! Requests are sent exactly once; the SDK never retries. Failures carry
//! enough context (status, server message, machine-readable code) for the
//! caller to decide on a retry policy.
//!
//! # Example
//!
//! ```no_run
//! use camera_cloud_sdk::{Auth, ClientBuilder, ClientCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::production()
//!         .auth(Auth::basic("joe", "pa55w0rd"))
//!         .client_credentials(ClientCredentials::new("my-api-id", "my-api-secret"))
//!         .build()?;
//!
//!     for camera in client.list_cameras(&[]).await? {
//!         println!("{}: online={:?}", camera.id, camera.is_online);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unused_results,
    warnings
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod auth;
mod client;
mod config;
mod endpoints;
mod errors;
mod models;
mod util;

pub use auth::{Auth, ClientCredentials};
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig};
pub use endpoints::{Endpoints, Operation, PRODUCTION_BASE, SANDBOX_BASE};
pub use errors::{Error, ErrorKind, Result};
pub use models::*;

// Re-export commonly used types
pub use secrecy::SecretString;

/// SDK version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default page size applied when a caller supplies `limit <= 0`
pub const DEFAULT_LIMIT: i64 = 10;

/// Default page number applied when a caller supplies a negative `page`
pub const DEFAULT_PAGE: i64 = 0;
