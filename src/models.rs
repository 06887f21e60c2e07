//! Data models for the CamCloud SDK
//!
//! Response types mirror the JSON the API returns. Field presence is
//! inconsistent across camera firmware and account ages, so optional
//! fields lean on `#[serde(default)]` and [`Camera`] keeps a catch-all
//! map for undocumented fields.
//!
//! Request parameters are plain structs with builder-style setters; unset
//! fields are omitted from the serialized request entirely, because the
//! API distinguishes "absent" from "empty".

use crate::util::QueryPairs;
use serde::{Deserialize, Serialize};

// ── Response models ──────────────────────────────────────────────────

/// A camera hardware vendor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vendor {
    /// Vendor identifier, e.g. `hikvision`
    pub id: String,
    /// Display name
    pub name: String,
    /// MAC address prefixes known to belong to this vendor
    #[serde(default)]
    pub known_macs: Vec<String>,
    /// Vendor logo URL
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A camera model belonging to a vendor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraModel {
    /// Model identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning vendor identifier
    pub vendor_id: String,
    /// Default JPEG snapshot URL path for this model
    #[serde(default)]
    pub jpg_url: Option<String>,
    /// Default H.264 stream URL path for this model
    #[serde(default)]
    pub h264_url: Option<String>,
    /// Default MJPEG stream URL path for this model
    #[serde(default)]
    pub mjpg_url: Option<String>,
    /// Catch-all for undocumented fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Network location of a camera, as seen from one side of its NAT
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConnectionDetails {
    /// Host name or IP address
    #[serde(default)]
    pub host: Option<String>,
    /// HTTP port
    #[serde(default)]
    pub http_port: Option<u16>,
    /// RTSP port
    #[serde(default)]
    pub rtsp_port: Option<u16>,
    /// Full JPEG snapshot URL
    #[serde(default)]
    pub jpg_url: Option<String>,
    /// Full RTSP stream URL
    #[serde(default)]
    pub rtsp_url: Option<String>,
}

/// A managed camera
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Camera {
    /// Camera identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether the requesting user owns this camera
    #[serde(default)]
    pub owned: bool,
    /// Owner username
    #[serde(default)]
    pub owner: Option<String>,
    /// Hardware vendor identifier
    #[serde(default)]
    pub vendor_id: Option<String>,
    /// Hardware model identifier
    #[serde(default)]
    pub model_id: Option<String>,
    /// IANA timezone the camera reports timestamps in
    #[serde(default)]
    pub timezone: Option<String>,
    /// Creation time, unix seconds
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update time, unix seconds
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Last poll time, unix seconds
    #[serde(default)]
    pub last_polled_at: Option<i64>,
    /// Last time the camera was seen online, unix seconds
    #[serde(default)]
    pub last_online_at: Option<i64>,
    /// Whether the camera responded to its last poll; absent when the
    /// camera has never been polled
    #[serde(default)]
    pub is_online: Option<bool>,
    /// Whether the camera is publicly discoverable
    #[serde(default)]
    pub is_public: bool,
    /// Whether the camera appears in public discovery results
    #[serde(default)]
    pub discoverable: bool,
    /// External (WAN) connection details
    #[serde(default)]
    pub external: Option<ConnectionDetails>,
    /// Internal (LAN) connection details
    #[serde(default)]
    pub internal: Option<ConnectionDetails>,
    /// Proxied snapshot URL served by the cloud
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Catch-all for undocumented fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A stored snapshot frame
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Snapshot {
    /// Capture time, unix seconds
    pub created_at: i64,
    /// Free-form notes attached at capture time
    #[serde(default)]
    pub notes: Option<String>,
    /// Base64-encoded JPEG data, present only when requested with
    /// `with_data`
    #[serde(default)]
    pub data: Option<String>,
}

impl Snapshot {
    /// Capture time as UTC, when the timestamp is representable
    pub fn created_at_utc(&self) -> Option<time::OffsetDateTime> {
        time::OffsetDateTime::from_unix_timestamp(self.created_at).ok()
    }
}

/// An active camera share
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Share {
    /// Share identifier
    pub id: i64,
    /// Shared camera identifier
    pub camera_id: String,
    /// Identifier of the user the camera is shared with
    #[serde(default)]
    pub user_id: Option<String>,
    /// Identifier of the sharing user
    #[serde(default)]
    pub sharer_id: Option<String>,
    /// Email the share was granted to
    #[serde(default)]
    pub email: Option<String>,
    /// Share kind, `public` or `private`
    #[serde(default)]
    pub kind: Option<String>,
    /// Comma-separated rights granted by this share
    #[serde(default)]
    pub rights: String,
}

/// State of a pending camera share request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRequestStatus {
    /// Sent but not yet accepted
    Pending,
    /// Accepted and converted into a share
    Used,
    /// Cancelled before acceptance
    Cancelled,
}

impl ShareRequestStatus {
    /// The token the API expects in the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareRequestStatus::Pending => "pending",
            ShareRequestStatus::Used => "used",
            ShareRequestStatus::Cancelled => "cancelled",
        }
    }
}

/// A share offer made to an email address not yet registered
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareRequest {
    /// Share request identifier
    pub id: String,
    /// Camera being offered
    pub camera_id: String,
    /// Identifier of the requesting user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Email the offer was sent to
    pub email: String,
    /// Comma-separated rights the offer grants
    #[serde(default)]
    pub rights: String,
    /// Current request state
    #[serde(default)]
    pub status: Option<ShareRequestStatus>,
}

/// A camera event webhook
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Webhook {
    /// Webhook identifier
    pub id: String,
    /// Camera the webhook watches
    pub camera_id: String,
    /// Identifier of the owning user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Delivery URL
    pub url: String,
}

/// A registered account
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    /// User identifier (username)
    pub id: String,
    /// Given name
    #[serde(default)]
    pub firstname: Option<String>,
    /// Family name
    #[serde(default)]
    pub lastname: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// ISO 3166 country code
    #[serde(default)]
    pub country: Option<String>,
    /// Creation time, unix seconds
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update time, unix seconds
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Email confirmation time, unix seconds
    #[serde(default)]
    pub confirmed_at: Option<i64>,
}

/// Processing state of a clip archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveStatus {
    /// Queued, not yet picked up
    Pending,
    /// Frames being assembled
    Processing,
    /// Ready for download
    Completed,
    /// Assembly failed
    Failed,
}

/// A clip archive assembled from recorded snapshots
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Archive {
    /// Archive identifier
    pub id: String,
    /// Source camera identifier
    pub camera_id: String,
    /// Display title
    pub title: String,
    /// Clip start, unix seconds
    pub from_date: i64,
    /// Clip end, unix seconds
    pub to_date: i64,
    /// Processing state
    #[serde(default)]
    pub status: Option<ArchiveStatus>,
    /// Username of the requester
    #[serde(default)]
    pub requested_by: Option<String>,
    /// Whether capture timestamps are burned into frames
    #[serde(default)]
    pub embed_time: Option<bool>,
    /// Whether the archive is publicly viewable
    #[serde(default)]
    pub public: Option<bool>,
    /// Number of frames in the clip
    #[serde(default)]
    pub frames: Option<i64>,
}

// ── Request parameters ───────────────────────────────────────────────

/// Filter for vendor listing
#[derive(Debug, Clone, Default)]
pub struct VendorFilter {
    /// Match vendors by exact name
    pub name: Option<String>,
    /// Match the vendor owning a MAC address prefix
    pub mac: Option<String>,
}

impl VendorFilter {
    /// Filter by vendor name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by MAC address prefix
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    pub(crate) fn apply(&self, pairs: &mut QueryPairs) {
        pairs.push_opt("name", self.name.as_deref());
        pairs.push_opt("mac", self.mac.as_deref());
    }
}

/// Filter for model listing
#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    /// Restrict to one vendor
    pub vendor_id: Option<String>,
    /// Match models by name
    pub name: Option<String>,
    /// Page size; values `<= 0` are clamped to the API default of 10
    pub limit: Option<i64>,
    /// Zero-based page number; negative values are clamped to 0
    pub page: Option<i64>,
}

impl ModelFilter {
    /// Restrict results to one vendor
    pub fn with_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    /// Filter by model name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn apply(&self, pairs: &mut QueryPairs) {
        pairs.push_opt("vendor_id", self.vendor_id.as_deref());
        pairs.push_opt("name", self.name.as_deref());
        pairs.push_limit(self.limit);
        pairs.push_page(self.page);
    }
}

/// Filter for public camera discovery
#[derive(Debug, Clone, Default)]
pub struct PublicCameraFilter {
    /// Match camera ids beginning with a prefix
    pub id_starts_with: Option<String>,
    /// Match camera ids ending with a suffix
    pub id_ends_with: Option<String>,
    /// Match camera ids containing a substring
    pub id_contains: Option<String>,
    /// Whether id matching is case sensitive
    pub case_sensitive: Option<bool>,
    /// Page size; values `<= 0` are clamped to the API default of 10
    pub limit: Option<i64>,
    /// Zero-based page number; negative values are clamped to 0
    pub page: Option<i64>,
}

impl PublicCameraFilter {
    /// Match camera ids beginning with a prefix
    pub fn with_id_starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.id_starts_with = Some(prefix.into());
        self
    }

    /// Match camera ids ending with a suffix
    pub fn with_id_ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.id_ends_with = Some(suffix.into());
        self
    }

    /// Match camera ids containing a substring
    pub fn with_id_contains(mut self, substring: impl Into<String>) -> Self {
        self.id_contains = Some(substring.into());
        self
    }

    /// Set id matching case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn apply(&self, pairs: &mut QueryPairs) {
        pairs.push_opt("id_starts_with", self.id_starts_with.as_deref());
        pairs.push_opt("id_ends_with", self.id_ends_with.as_deref());
        pairs.push_opt("id_contains", self.id_contains.as_deref());
        pairs.push_bool("case_sensitive", self.case_sensitive);
        pairs.push_limit(self.limit);
        pairs.push_page(self.page);
    }
}

/// Time range and paging for recorded snapshot listing
#[derive(Debug, Clone, Default)]
pub struct SnapshotRange {
    /// Range start, unix seconds, inclusive
    pub from: Option<i64>,
    /// Range end, unix seconds, inclusive
    pub to: Option<i64>,
    /// Page size; values `<= 0` are clamped to the API default of 10
    pub limit: Option<i64>,
    /// Zero-based page number; negative values are clamped to 0
    pub page: Option<i64>,
}

impl SnapshotRange {
    /// Set the range start
    pub fn with_from(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the range end
    pub fn with_to(mut self, to: i64) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn apply(&self, pairs: &mut QueryPairs) {
        if let Some(from) = self.from {
            pairs.push("from", from.to_string());
        }
        if let Some(to) = self.to {
            pairs.push("to", to.to_string());
        }
        pairs.push_limit(self.limit);
        pairs.push_page(self.page);
    }
}

/// Parameters for creating or updating a camera
///
/// All fields are optional; unset fields are omitted from the request
/// body. Camera creation requires `id` and `name`, enforced by the
/// client before any network call.
#[derive(Debug, Clone, Default)]
pub struct CameraParams {
    /// Camera identifier (required on create)
    pub id: Option<String>,
    /// Display name (required on create)
    pub name: Option<String>,
    /// Hardware vendor identifier
    pub vendor_id: Option<String>,
    /// Hardware model identifier
    pub model_id: Option<String>,
    /// IANA timezone
    pub timezone: Option<String>,
    /// Public discoverability
    pub is_public: Option<bool>,
    /// Whether the camera appears in public discovery results
    pub discoverable: Option<bool>,
    /// External (WAN) host
    pub external_host: Option<String>,
    /// External HTTP port
    pub external_http_port: Option<u16>,
    /// External RTSP port
    pub external_rtsp_port: Option<u16>,
    /// Internal (LAN) host
    pub internal_host: Option<String>,
    /// Internal HTTP port
    pub internal_http_port: Option<u16>,
    /// Internal RTSP port
    pub internal_rtsp_port: Option<u16>,
    /// JPEG snapshot URL path override
    pub jpg_url: Option<String>,
    /// Username the camera itself expects
    pub cam_username: Option<String>,
    /// Password the camera itself expects
    pub cam_password: Option<String>,
}

impl CameraParams {
    /// Start building creation parameters for a camera
    pub fn create(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the vendor identifier
    pub fn with_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Set the timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Set public discoverability
    pub fn with_is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Set external connection details
    pub fn with_external(mut self, host: impl Into<String>, http_port: u16) -> Self {
        self.external_host = Some(host.into());
        self.external_http_port = Some(http_port);
        self
    }

    /// Set the credentials the camera itself expects
    pub fn with_camera_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.cam_username = Some(username.into());
        self.cam_password = Some(password.into());
        self
    }

    pub(crate) fn into_body(self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        insert_str(&mut body, "id", self.id);
        insert_str(&mut body, "name", self.name);
        insert_str(&mut body, "vendor_id", self.vendor_id);
        insert_str(&mut body, "model_id", self.model_id);
        insert_str(&mut body, "timezone", self.timezone);
        insert_bool(&mut body, "is_public", self.is_public);
        insert_bool(&mut body, "discoverable", self.discoverable);
        insert_str(&mut body, "external_host", self.external_host);
        insert_port(&mut body, "external_http_port", self.external_http_port);
        insert_port(&mut body, "external_rtsp_port", self.external_rtsp_port);
        insert_str(&mut body, "internal_host", self.internal_host);
        insert_port(&mut body, "internal_http_port", self.internal_http_port);
        insert_port(&mut body, "internal_rtsp_port", self.internal_rtsp_port);
        insert_str(&mut body, "jpg_url", self.jpg_url);
        insert_str(&mut body, "cam_username", self.cam_username);
        insert_str(&mut body, "cam_password", self.cam_password);
        serde_json::Value::Object(body)
    }
}

/// Parameters for creating or updating a user
#[derive(Debug, Clone, Default)]
pub struct UserParams {
    /// Given name
    pub firstname: Option<String>,
    /// Family name
    pub lastname: Option<String>,
    /// Username (required on create)
    pub username: Option<String>,
    /// Contact email (required on create)
    pub email: Option<String>,
    /// Account password (required on create)
    pub password: Option<String>,
    /// ISO 3166 country code
    pub country: Option<String>,
}

impl UserParams {
    /// Start building creation parameters for a user
    pub fn create(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Set the given name
    pub fn with_firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    /// Set the family name
    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the country code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub(crate) fn into_body(self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        insert_str(&mut body, "firstname", self.firstname);
        insert_str(&mut body, "lastname", self.lastname);
        insert_str(&mut body, "username", self.username);
        insert_str(&mut body, "email", self.email);
        insert_str(&mut body, "password", self.password);
        insert_str(&mut body, "country", self.country);
        serde_json::Value::Object(body)
    }
}

/// Parameters for creating or updating a clip archive
#[derive(Debug, Clone, Default)]
pub struct ArchiveParams {
    /// Display title (required on create)
    pub title: Option<String>,
    /// Clip start, unix seconds (required on create)
    pub from_date: Option<i64>,
    /// Clip end, unix seconds (required on create)
    pub to_date: Option<i64>,
    /// Burn capture timestamps into frames
    pub embed_time: Option<bool>,
    /// Make the archive publicly viewable
    pub public: Option<bool>,
    /// Username of the requester
    pub requested_by: Option<String>,
}

impl ArchiveParams {
    /// Start building creation parameters for an archive
    pub fn create(title: impl Into<String>, from_date: i64, to_date: i64) -> Self {
        Self {
            title: Some(title.into()),
            from_date: Some(from_date),
            to_date: Some(to_date),
            ..Self::default()
        }
    }

    /// Burn capture timestamps into frames
    pub fn with_embed_time(mut self, embed_time: bool) -> Self {
        self.embed_time = Some(embed_time);
        self
    }

    /// Make the archive publicly viewable
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Set the requesting username
    pub fn with_requested_by(mut self, requested_by: impl Into<String>) -> Self {
        self.requested_by = Some(requested_by.into());
        self
    }

    pub(crate) fn into_body(self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        insert_str(&mut body, "title", self.title);
        if let Some(from_date) = self.from_date {
            let _ = body.insert("from_date".to_string(), serde_json::json!(from_date));
        }
        if let Some(to_date) = self.to_date {
            let _ = body.insert("to_date".to_string(), serde_json::json!(to_date));
        }
        insert_bool(&mut body, "embed_time", self.embed_time);
        insert_bool(&mut body, "public", self.public);
        insert_str(&mut body, "requested_by", self.requested_by);
        serde_json::Value::Object(body)
    }
}

// Body assembly helpers. Empty strings are treated as unset, matching the
// query-parameter policy.

fn insert_str(body: &mut serde_json::Map<String, serde_json::Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            let _ = body.insert(key.to_string(), serde_json::Value::String(value));
        }
    }
}

fn insert_bool(body: &mut serde_json::Map<String, serde_json::Value>, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        let _ = body.insert(key.to_string(), serde_json::Value::Bool(value));
    }
}

fn insert_port(body: &mut serde_json::Map<String, serde_json::Value>, key: &str, value: Option<u16>) {
    if let Some(value) = value {
        let _ = body.insert(key.to_string(), serde_json::json!(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_params_body_skips_unset() {
        let body = CameraParams::create("gate", "Gate Camera")
            .with_vendor("hikvision")
            .with_is_public(false)
            .into_body();

        assert_eq!(body["id"], "gate");
        assert_eq!(body["name"], "Gate Camera");
        assert_eq!(body["vendor_id"], "hikvision");
        assert_eq!(body["is_public"], false);
        assert!(body.get("model_id").is_none());
        assert!(body.get("timezone").is_none());
        assert!(body.get("cam_password").is_none());
    }

    #[test]
    fn test_empty_string_treated_as_unset() {
        let params = CameraParams {
            id: Some("gate".to_string()),
            timezone: Some(String::new()),
            ..CameraParams::default()
        };
        let body = params.into_body();
        assert!(body.get("timezone").is_none());
    }

    #[test]
    fn test_vendor_filter_pairs() {
        let mut pairs = QueryPairs::new();
        VendorFilter::default().with_name("axis").apply(&mut pairs);
        assert_eq!(
            pairs.as_slice(),
            &[("name".to_string(), "axis".to_string())]
        );
    }

    #[test]
    fn test_model_filter_clamps_pagination() {
        let mut pairs = QueryPairs::new();
        ModelFilter::default()
            .with_limit(-5)
            .with_page(-1)
            .apply(&mut pairs);
        assert_eq!(
            pairs.as_slice(),
            &[
                ("limit".to_string(), "10".to_string()),
                ("page".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_public_filter_bool_tokens() {
        let mut pairs = QueryPairs::new();
        PublicCameraFilter::default()
            .with_id_starts_with("town-")
            .with_case_sensitive(false)
            .apply(&mut pairs);
        assert_eq!(
            pairs.as_slice(),
            &[
                ("id_starts_with".to_string(), "town-".to_string()),
                ("case_sensitive".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_snapshot_created_at_utc() {
        let snapshot = Snapshot {
            created_at: 1463145447,
            notes: None,
            data: None,
        };
        let utc = snapshot.created_at_utc().unwrap();
        assert_eq!(utc.unix_timestamp(), 1463145447);
    }

    #[test]
    fn test_camera_keeps_undocumented_fields() {
        let camera: Camera = serde_json::from_value(serde_json::json!({
            "id": "gate",
            "name": "Gate Camera",
            "owned": true,
            "firmware_rev": "2.1.1"
        }))
        .unwrap();
        assert_eq!(camera.id, "gate");
        assert!(camera.owned);
        assert_eq!(camera.extra["firmware_rev"], "2.1.1");
    }

    #[test]
    fn test_share_request_status_tokens() {
        assert_eq!(ShareRequestStatus::Pending.as_str(), "pending");
        let status: ShareRequestStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ShareRequestStatus::Cancelled);
    }

    #[test]
    fn test_archive_deserializes() {
        let archive: Archive = serde_json::from_value(serde_json::json!({
            "id": "gate-evening",
            "camera_id": "gate",
            "title": "Evening clip",
            "from_date": 1463145000,
            "to_date": 1463148600,
            "status": "completed",
            "frames": 120
        }))
        .unwrap();
        assert_eq!(archive.status, Some(ArchiveStatus::Completed));
        assert_eq!(archive.frames, Some(120));
    }
}
