//! CamCloud client implementation
//!
//! This module contains the main `Client` struct that provides one method
//! per API operation.
//!
//! # Architecture
//!
//! - **HTTP Layer**: Built on `reqwest`; one pooled client per `Client`
//!   instance, owned by its immutable configuration
//! - **Request shaping**: every call resolves an endpoint template,
//!   collects query pairs under a single omit-empty/boolean-token/clamping
//!   policy, and attaches credentials through one code path
//! - **Response mapping**: per-operation success-status whitelists; list
//!   payloads are unwrapped from their named JSON field; everything else
//!   becomes a typed error
//!
//! Requests are sent exactly once. There is no retry, no cache, and no
//! cross-call state beyond the configuration and connection pool.
//!
//! # Examples
//!
//! ```no_run
//! use camera_cloud_sdk::{Auth, ClientBuilder, ClientCredentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::production()
//!     .auth(Auth::basic("joe", "pa55w0rd"))
//!     .client_credentials(ClientCredentials::new("my-api-id", "my-api-secret"))
//!     .build()?;
//!
//! if let Some(camera) = client.get_camera("front-door").await? {
//!     println!("Camera online: {:?}", camera.is_online);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    config::ClientConfig,
    endpoints::{Endpoints, Operation},
    errors::{Error, ErrorResponse, Result},
    models::*,
    util::{generate_request_id, header_str, QueryPairs},
};

use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};

const USER_AGENT_PREFIX: &str = "camcloud-sdk-rust";

// Per-operation success-status whitelists. Reads are lenient because some
// deployments answer mutating reads with 201/202; deletes only ever answer
// 200 or 204.
const READ_OK: &[u16] = &[200, 201, 202, 204];
const CREATE_OK: &[u16] = &[200, 201];
const UPDATE_OK: &[u16] = &[200, 201, 202];
const DELETE_OK: &[u16] = &[200, 204];

/// Transient request descriptor: built per call, sent once, discarded.
#[derive(Debug)]
struct ApiRequest {
    method: Method,
    operation: Operation,
    path_params: Vec<String>,
    query: QueryPairs,
    body: Option<serde_json::Value>,
    requires_client_credentials: bool,
    success: &'static [u16],
}

impl ApiRequest {
    fn new(method: Method, operation: Operation, success: &'static [u16]) -> Self {
        Self {
            method,
            operation,
            path_params: Vec::new(),
            query: QueryPairs::new(),
            body: None,
            requires_client_credentials: true,
            success,
        }
    }

    /// Mark this operation as tolerating anonymous access.
    fn anonymous_ok(mut self) -> Self {
        self.requires_client_credentials = false;
        self
    }

    fn path_param(mut self, param: impl Into<String>) -> Self {
        self.path_params.push(param.into());
        self
    }

    fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// CamCloud API client
///
/// The main client for interacting with the CamCloud camera management
/// API. Provides methods for vendors, models, users, cameras, live and
/// recorded snapshots, shares, webhooks, archives, and public camera
/// discovery.
#[derive(Clone)]
pub struct Client {
    pub(crate) config: ClientConfig,
    http: HttpClient,
    endpoints: Endpoints,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field(
                "client_credentials",
                &self.config.client_credentials.is_some(),
            )
            .finish()
    }
}

impl Client {
    /// Create a new client with the given configuration
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let user_agent = if let Some(suffix) = &config.user_agent_suffix {
            format!("{}/{} {}", USER_AGENT_PREFIX, crate::VERSION, suffix)
        } else {
            format!("{}/{}", USER_AGENT_PREFIX, crate::VERSION)
        };

        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoints: Endpoints::new(&config.base_url),
            http,
            config,
        })
    }

    // ── Vendors ──────────────────────────────────────────────────────

    /// List camera vendors
    ///
    /// Accepts anonymous requests. An unmatched filter yields an empty
    /// list, not an error.
    pub async fn list_vendors(&self, filter: VendorFilter) -> Result<Vec<Vendor>> {
        let mut request =
            ApiRequest::new(Method::GET, Operation::Vendors, READ_OK).anonymous_ok();
        filter.apply(&mut request.query);
        self.fetch_list(request, "vendors").await
    }

    /// Get a vendor by id
    ///
    /// Returns `Ok(None)` when no vendor matches the id.
    pub async fn get_vendor(&self, vendor_id: &str) -> Result<Option<Vendor>> {
        require_arg("vendor_id", vendor_id)?;
        let request = ApiRequest::new(Method::GET, Operation::VendorById, READ_OK)
            .anonymous_ok()
            .path_param(vendor_id);
        self.fetch_first(request, "vendors").await
    }

    // ── Models ───────────────────────────────────────────────────────

    /// List camera models
    ///
    /// Accepts anonymous requests. Pagination parameters outside their
    /// valid range are clamped to the documented defaults.
    pub async fn list_models(&self, filter: ModelFilter) -> Result<Vec<CameraModel>> {
        let mut request = ApiRequest::new(Method::GET, Operation::Models, READ_OK).anonymous_ok();
        filter.apply(&mut request.query);
        self.fetch_list(request, "models").await
    }

    /// Get a camera model by id
    pub async fn get_model(&self, model_id: &str) -> Result<Option<CameraModel>> {
        require_arg("model_id", model_id)?;
        let request = ApiRequest::new(Method::GET, Operation::ModelById, READ_OK)
            .anonymous_ok()
            .path_param(model_id);
        self.fetch_first(request, "models").await
    }

    // ── Users ────────────────────────────────────────────────────────

    /// Create a user account
    ///
    /// Requires client credentials; `params` must carry a username, email,
    /// and password.
    pub async fn create_user(&self, params: UserParams) -> Result<User> {
        require_opt_arg("username", params.username.as_deref())?;
        require_opt_arg("email", params.email.as_deref())?;
        require_opt_arg("password", params.password.as_deref())?;
        let request = ApiRequest::new(Method::POST, Operation::Users, CREATE_OK)
            .body(params.into_body());
        self.fetch_created(request, "users").await
    }

    /// Get a user by id
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        require_arg("user_id", user_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::UserById, READ_OK).path_param(user_id);
        self.fetch_first(request, "users").await
    }

    /// Update a user
    pub async fn update_user(&self, user_id: &str, params: UserParams) -> Result<User> {
        require_arg("user_id", user_id)?;
        let request = ApiRequest::new(Method::PATCH, Operation::UserById, UPDATE_OK)
            .path_param(user_id)
            .body(params.into_body());
        self.fetch_created(request, "users").await
    }

    /// Delete a user and all cameras owned by them
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        require_arg("user_id", user_id)?;
        let request =
            ApiRequest::new(Method::DELETE, Operation::UserById, DELETE_OK).path_param(user_id);
        self.fetch_unit(request).await
    }

    // ── Cameras ──────────────────────────────────────────────────────

    /// List cameras visible to the authenticated user
    ///
    /// Pass specific ids to restrict the listing; an empty slice lists
    /// everything the user owns or has been granted access to.
    pub async fn list_cameras(&self, ids: &[&str]) -> Result<Vec<Camera>> {
        let mut request = ApiRequest::new(Method::GET, Operation::Cameras, READ_OK);
        if !ids.is_empty() {
            request.query.push("ids", ids.join(","));
        }
        self.fetch_list(request, "cameras").await
    }

    /// Register a camera
    ///
    /// `params` must carry an id and a name; everything else is optional.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camera_cloud_sdk::{Client, CameraParams};
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let camera = client
    ///     .create_camera(
    ///         CameraParams::create("gate", "Gate Camera")
    ///             .with_vendor("hikvision")
    ///             .with_external("203.0.113.7", 8080)
    ///             .with_is_public(false),
    ///     )
    ///     .await?;
    /// assert_eq!(camera.id, "gate");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_camera(&self, params: CameraParams) -> Result<Camera> {
        require_opt_arg("id", params.id.as_deref())?;
        require_opt_arg("name", params.name.as_deref())?;
        let request = ApiRequest::new(Method::POST, Operation::Cameras, CREATE_OK)
            .body(params.into_body());
        self.fetch_created(request, "cameras").await
    }

    /// Get a camera by id
    ///
    /// Returns `Ok(None)` when the id matches nothing the user can see.
    /// Access failures and server errors surface as [`Error::Api`] with
    /// the original status.
    pub async fn get_camera(&self, camera_id: &str) -> Result<Option<Camera>> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::CameraById, READ_OK).path_param(camera_id);
        self.fetch_first(request, "cameras").await
    }

    /// Update a camera in place (partial update)
    pub async fn update_camera(&self, camera_id: &str, params: CameraParams) -> Result<Camera> {
        require_arg("camera_id", camera_id)?;
        let request = ApiRequest::new(Method::PATCH, Operation::CameraById, UPDATE_OK)
            .path_param(camera_id)
            .body(params.into_body());
        self.fetch_created(request, "cameras").await
    }

    /// Replace a camera's full configuration
    pub async fn replace_camera(&self, camera_id: &str, params: CameraParams) -> Result<Camera> {
        require_arg("camera_id", camera_id)?;
        let request = ApiRequest::new(Method::PUT, Operation::CameraById, UPDATE_OK)
            .path_param(camera_id)
            .body(params.into_body());
        self.fetch_created(request, "cameras").await
    }

    /// Delete a camera and its recordings
    pub async fn delete_camera(&self, camera_id: &str) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::DELETE, Operation::CameraById, DELETE_OK).path_param(camera_id);
        self.fetch_unit(request).await
    }

    // ── Snapshots ────────────────────────────────────────────────────

    /// Fetch a live JPEG frame straight from the camera
    pub async fn live_snapshot(&self, camera_id: &str) -> Result<Vec<u8>> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::LiveSnapshot, &[200]).path_param(camera_id);
        self.fetch_bytes(request).await
    }

    /// List recorded snapshots in a time range
    pub async fn list_snapshots(
        &self,
        camera_id: &str,
        range: SnapshotRange,
    ) -> Result<Vec<Snapshot>> {
        require_arg("camera_id", camera_id)?;
        let mut request =
            ApiRequest::new(Method::GET, Operation::Snapshots, READ_OK).path_param(camera_id);
        range.apply(&mut request.query);
        self.fetch_list(request, "snapshots").await
    }

    /// Capture and store a snapshot from the camera now
    pub async fn create_snapshot(
        &self,
        camera_id: &str,
        notes: Option<&str>,
    ) -> Result<Snapshot> {
        require_arg("camera_id", camera_id)?;
        let request = ApiRequest::new(Method::POST, Operation::Snapshots, CREATE_OK)
            .path_param(camera_id)
            .body(notes_body(notes));
        self.fetch_created(request, "snapshots").await
    }

    /// Store the frame recorded at a specific instant
    pub async fn store_snapshot(
        &self,
        camera_id: &str,
        timestamp: i64,
        notes: Option<&str>,
    ) -> Result<Snapshot> {
        require_arg("camera_id", camera_id)?;
        let request = ApiRequest::new(Method::POST, Operation::SnapshotByTimestamp, CREATE_OK)
            .path_param(camera_id)
            .path_param(timestamp.to_string())
            .body(notes_body(notes));
        self.fetch_created(request, "snapshots").await
    }

    /// Get the snapshot stored at a specific instant
    ///
    /// With `with_data` the response carries the base64 JPEG frame.
    /// Returns `Ok(None)` when nothing was recorded at that instant.
    pub async fn get_snapshot(
        &self,
        camera_id: &str,
        timestamp: i64,
        with_data: bool,
    ) -> Result<Option<Snapshot>> {
        require_arg("camera_id", camera_id)?;
        let mut request = ApiRequest::new(Method::GET, Operation::SnapshotByTimestamp, READ_OK)
            .path_param(camera_id)
            .path_param(timestamp.to_string());
        request.query.push_bool("with_data", Some(with_data));
        self.fetch_first(request, "snapshots").await
    }

    /// Delete the snapshot stored at a specific instant
    pub async fn delete_snapshot(&self, camera_id: &str, timestamp: i64) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        let request = ApiRequest::new(Method::DELETE, Operation::SnapshotByTimestamp, DELETE_OK)
            .path_param(camera_id)
            .path_param(timestamp.to_string());
        self.fetch_unit(request).await
    }

    // ── Shares ───────────────────────────────────────────────────────

    /// List active shares for a camera
    pub async fn list_shares(&self, camera_id: &str) -> Result<Vec<Share>> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::Shares, READ_OK).path_param(camera_id);
        self.fetch_list(request, "shares").await
    }

    /// Share a camera with another account
    ///
    /// `rights` is a comma-separated list, e.g. `"snapshot,list"`.
    pub async fn create_share(
        &self,
        camera_id: &str,
        email: &str,
        rights: &str,
    ) -> Result<Share> {
        require_arg("camera_id", camera_id)?;
        require_arg("email", email)?;
        require_arg("rights", rights)?;
        let request = ApiRequest::new(Method::POST, Operation::Shares, CREATE_OK)
            .path_param(camera_id)
            .body(serde_json::json!({ "email": email, "rights": rights }));
        self.fetch_created(request, "shares").await
    }

    /// Change the rights granted by an existing share
    pub async fn update_share(
        &self,
        camera_id: &str,
        email: &str,
        rights: &str,
    ) -> Result<Share> {
        require_arg("camera_id", camera_id)?;
        require_arg("email", email)?;
        require_arg("rights", rights)?;
        let request = ApiRequest::new(Method::PATCH, Operation::Shares, UPDATE_OK)
            .path_param(camera_id)
            .body(serde_json::json!({ "email": email, "rights": rights }));
        self.fetch_created(request, "shares").await
    }

    /// Revoke a share
    pub async fn delete_share(&self, camera_id: &str, email: &str) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        require_arg("email", email)?;
        let mut request = ApiRequest::new(Method::DELETE, Operation::Shares, DELETE_OK)
            .path_param(camera_id);
        request.query.push("email", email);
        self.fetch_unit(request).await
    }

    // ── Share requests ───────────────────────────────────────────────

    /// List share offers made for a camera
    pub async fn list_share_requests(
        &self,
        camera_id: &str,
        status: Option<ShareRequestStatus>,
    ) -> Result<Vec<ShareRequest>> {
        require_arg("camera_id", camera_id)?;
        let mut request =
            ApiRequest::new(Method::GET, Operation::ShareRequests, READ_OK).path_param(camera_id);
        request
            .query
            .push_opt("status", status.map(|s| s.as_str()));
        self.fetch_list(request, "share_requests").await
    }

    /// Change the rights a pending share offer grants
    pub async fn update_share_request(
        &self,
        camera_id: &str,
        email: &str,
        rights: &str,
    ) -> Result<ShareRequest> {
        require_arg("camera_id", camera_id)?;
        require_arg("email", email)?;
        require_arg("rights", rights)?;
        let request = ApiRequest::new(Method::PATCH, Operation::ShareRequests, UPDATE_OK)
            .path_param(camera_id)
            .body(serde_json::json!({ "email": email, "rights": rights }));
        self.fetch_created(request, "share_requests").await
    }

    /// Cancel a pending share offer
    pub async fn delete_share_request(&self, camera_id: &str, email: &str) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        require_arg("email", email)?;
        let mut request = ApiRequest::new(Method::DELETE, Operation::ShareRequests, DELETE_OK)
            .path_param(camera_id);
        request.query.push("email", email);
        self.fetch_unit(request).await
    }

    // ── Webhooks ─────────────────────────────────────────────────────

    /// List webhooks registered on a camera
    pub async fn list_webhooks(&self, camera_id: &str) -> Result<Vec<Webhook>> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::Webhooks, READ_OK).path_param(camera_id);
        self.fetch_list(request, "webhooks").await
    }

    /// Register a webhook on a camera
    pub async fn create_webhook(&self, camera_id: &str, url: &str) -> Result<Webhook> {
        require_arg("camera_id", camera_id)?;
        require_arg("url", url)?;
        let request = ApiRequest::new(Method::POST, Operation::Webhooks, CREATE_OK)
            .path_param(camera_id)
            .body(serde_json::json!({ "url": url }));
        self.fetch_created(request, "webhooks").await
    }

    /// Change a webhook's delivery URL
    pub async fn update_webhook(
        &self,
        camera_id: &str,
        webhook_id: &str,
        url: &str,
    ) -> Result<Webhook> {
        require_arg("camera_id", camera_id)?;
        require_arg("webhook_id", webhook_id)?;
        require_arg("url", url)?;
        let request = ApiRequest::new(Method::PATCH, Operation::WebhookById, UPDATE_OK)
            .path_param(camera_id)
            .path_param(webhook_id)
            .body(serde_json::json!({ "url": url }));
        self.fetch_created(request, "webhooks").await
    }

    /// Remove a webhook
    pub async fn delete_webhook(&self, camera_id: &str, webhook_id: &str) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        require_arg("webhook_id", webhook_id)?;
        let request = ApiRequest::new(Method::DELETE, Operation::WebhookById, DELETE_OK)
            .path_param(camera_id)
            .path_param(webhook_id);
        self.fetch_unit(request).await
    }

    // ── Public cameras ───────────────────────────────────────────────

    /// Discover publicly viewable cameras
    ///
    /// Accepts anonymous requests.
    pub async fn list_public_cameras(
        &self,
        filter: PublicCameraFilter,
    ) -> Result<Vec<Camera>> {
        let mut request =
            ApiRequest::new(Method::GET, Operation::PublicCameras, READ_OK).anonymous_ok();
        filter.apply(&mut request.query);
        self.fetch_list(request, "cameras").await
    }

    /// Find the public camera nearest to an address or `lat,lng` point
    pub async fn nearest_public_camera(&self, near: &str) -> Result<Option<Camera>> {
        require_arg("near", near)?;
        let mut request =
            ApiRequest::new(Method::GET, Operation::NearestPublicCamera, READ_OK).anonymous_ok();
        request.query.push("near", near);
        self.fetch_first(request, "cameras").await
    }

    /// Fetch a live frame from the nearest public camera
    pub async fn nearest_public_camera_snapshot(&self, near: &str) -> Result<Vec<u8>> {
        require_arg("near", near)?;
        let mut request =
            ApiRequest::new(Method::GET, Operation::NearestPublicCameraSnapshot, &[200])
                .anonymous_ok();
        request.query.push("near", near);
        self.fetch_bytes(request).await
    }

    // ── Archives ─────────────────────────────────────────────────────

    /// List clip archives for a camera
    pub async fn list_archives(&self, camera_id: &str) -> Result<Vec<Archive>> {
        require_arg("camera_id", camera_id)?;
        let request =
            ApiRequest::new(Method::GET, Operation::Archives, READ_OK).path_param(camera_id);
        self.fetch_list(request, "archives").await
    }

    /// Get a clip archive by id
    pub async fn get_archive(&self, camera_id: &str, archive_id: &str) -> Result<Option<Archive>> {
        require_arg("camera_id", camera_id)?;
        require_arg("archive_id", archive_id)?;
        let request = ApiRequest::new(Method::GET, Operation::ArchiveById, READ_OK)
            .path_param(camera_id)
            .path_param(archive_id);
        self.fetch_first(request, "archives").await
    }

    /// Request a clip archive to be assembled from recordings
    ///
    /// `params` must carry a title and a from/to range. Assembly is
    /// asynchronous on the server; poll [`Client::get_archive`] until the
    /// status reaches a terminal state.
    pub async fn create_archive(
        &self,
        camera_id: &str,
        params: ArchiveParams,
    ) -> Result<Archive> {
        require_arg("camera_id", camera_id)?;
        require_opt_arg("title", params.title.as_deref())?;
        if params.from_date.is_none() || params.to_date.is_none() {
            return Err(Error::Config(
                "archive from_date and to_date must be set".to_string(),
            ));
        }
        let request = ApiRequest::new(Method::POST, Operation::Archives, CREATE_OK)
            .path_param(camera_id)
            .body(params.into_body());
        self.fetch_created(request, "archives").await
    }

    /// Update a clip archive's metadata
    pub async fn update_archive(
        &self,
        camera_id: &str,
        archive_id: &str,
        params: ArchiveParams,
    ) -> Result<Archive> {
        require_arg("camera_id", camera_id)?;
        require_arg("archive_id", archive_id)?;
        let request = ApiRequest::new(Method::PATCH, Operation::ArchiveById, UPDATE_OK)
            .path_param(camera_id)
            .path_param(archive_id)
            .body(params.into_body());
        self.fetch_created(request, "archives").await
    }

    /// Delete a clip archive
    pub async fn delete_archive(&self, camera_id: &str, archive_id: &str) -> Result<()> {
        require_arg("camera_id", camera_id)?;
        require_arg("archive_id", archive_id)?;
        let request = ApiRequest::new(Method::DELETE, Operation::ArchiveById, DELETE_OK)
            .path_param(camera_id)
            .path_param(archive_id);
        self.fetch_unit(request).await
    }

    // ── Request execution ────────────────────────────────────────────

    /// Send a request once and return the raw response.
    ///
    /// Local preconditions (client credentials, template arity) fail
    /// before any network I/O. Transport failures are rewrapped; a raw
    /// `reqwest::Error` never escapes this function.
    async fn send(&self, request: &ApiRequest) -> Result<Response> {
        if request.requires_client_credentials && self.config.client_credentials.is_none() {
            return Err(Error::MissingCredentials(format!(
                "operation '{}' requires api_id/api_key client credentials",
                request.operation.name()
            )));
        }

        let params: Vec<&str> = request.path_params.iter().map(String::as_str).collect();
        let url = self.endpoints.url(request.operation, &params)?;

        let request_id = generate_request_id();
        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header("X-Request-ID", &request_id);

        let mut query = request.query.clone();
        if let Some(credentials) = &self.config.client_credentials {
            for (name, value) in credentials.query_pairs() {
                query.push(name, value);
            }
        }
        if !query.is_empty() {
            builder = builder.query(query.as_slice());
        }

        if let Some((name, value)) = self.config.auth.authorization_header() {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        trace!("{} {} (req={})", request.method, url, request_id);
        let response = builder.send().await.map_err(Error::from)?;
        debug!("{} {} -> {}", request.method, url, response.status());
        Ok(response)
    }

    /// Map the response status against the whitelist.
    async fn check_status(&self, success: &[u16], response: Response) -> Result<Response> {
        let status = response.status().as_u16();
        if success.contains(&status) {
            Ok(response)
        } else {
            Err(self.parse_error_response(response).await)
        }
    }

    /// Fetch a list payload wrapped in a named top-level JSON field.
    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        field: &str,
    ) -> Result<Vec<T>> {
        let response = self.send(&request).await?;
        let response = self.check_status(request.success, response).await?;

        // A whitelisted 204 carries no body; that is an empty result, not
        // a malformed one.
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let value: serde_json::Value = response.json().await.map_err(Error::from)?;
        extract_field(value, field)
    }

    /// Fetch a single entity as list-extract-take-first.
    async fn fetch_first<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        field: &str,
    ) -> Result<Option<T>> {
        let items = self.fetch_list(request, field).await?;
        Ok(items.into_iter().next())
    }

    /// Fetch the entity a mutating call must return.
    async fn fetch_created<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        field: &str,
    ) -> Result<T> {
        self.fetch_first(request, field).await?.ok_or_else(|| {
            Error::Transport(format!("response contained no '{}' entry", field))
        })
    }

    /// Execute a request where only the status matters.
    async fn fetch_unit(&self, request: ApiRequest) -> Result<()> {
        let response = self.send(&request).await?;
        let _ = self.check_status(request.success, response).await?;
        Ok(())
    }

    /// Fetch a raw binary payload (JPEG frames).
    async fn fetch_bytes(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let response = self.send(&request).await?;
        let response = self.check_status(request.success, response).await?;
        let bytes = response.bytes().await.map_err(Error::from)?;
        Ok(bytes.to_vec())
    }

    /// Parse an error response body, falling back to the raw text.
    async fn parse_error_response(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        if let Some(request_id) = header_str(response.headers(), "x-request-id") {
            debug!("error response {} (req={})", status, request_id);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => return Error::from_raw_response(status, String::new()),
        };

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => Error::from_response(status, parsed),
            Err(_) => Error::from_raw_response(status, body),
        }
    }
}

/// Extract a named top-level field from a JSON response.
///
/// List endpoints wrap their array in an object key; the top-level value
/// itself is never the array.
fn extract_field<T: serde::de::DeserializeOwned>(
    mut value: serde_json::Value,
    field: &str,
) -> Result<Vec<T>> {
    match value.get_mut(field) {
        Some(inner) => serde_json::from_value(inner.take()).map_err(Error::from),
        None => Err(Error::Transport(format!(
            "malformed response body: missing '{}' field",
            field
        ))),
    }
}

fn require_arg(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::Config(format!("{} must not be empty", name)))
    } else {
        Ok(())
    }
}

fn require_opt_arg(name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => require_arg(name, value),
        None => Err(Error::Config(format!("{} must be set", name))),
    }
}

fn notes_body(notes: Option<&str>) -> serde_json::Value {
    match notes {
        Some(notes) if !notes.is_empty() => serde_json::json!({ "notes": notes }),
        _ => serde_json::json!({}),
    }
}
