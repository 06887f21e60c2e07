//! API endpoint URL construction
//!
//! Every operation maps to an immutable relative-path template with ordered
//! positional placeholders (`{0}`, `{1}`). Substitution is deterministic and
//! fails hard with [`Error::Template`] on an arity mismatch; a URL with a
//! literal placeholder left in place is never produced.

use crate::errors::{Error, Result};
use crate::util::encode_path;

/// Production API base URL
pub const PRODUCTION_BASE: &str = "https://api.camcloud.io/v1";

/// Sandbox API base URL
pub const SANDBOX_BASE: &str = "https://api-sandbox.camcloud.io/v1";

/// Logical API operation
///
/// Keys into the process-wide endpoint template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `vendors`
    Vendors,
    /// `vendors/{0}`
    VendorById,
    /// `models`
    Models,
    /// `models/{0}`
    ModelById,
    /// `users`
    Users,
    /// `users/{0}`
    UserById,
    /// `cameras`
    Cameras,
    /// `cameras/{0}`
    CameraById,
    /// `cameras/{0}/live/snapshot`
    LiveSnapshot,
    /// `cameras/{0}/recordings/snapshots`
    Snapshots,
    /// `cameras/{0}/recordings/snapshots/{1}`
    SnapshotByTimestamp,
    /// `cameras/{0}/shares`
    Shares,
    /// `cameras/{0}/shares/requests`
    ShareRequests,
    /// `cameras/{0}/webhooks`
    Webhooks,
    /// `cameras/{0}/webhooks/{1}`
    WebhookById,
    /// `cameras/{0}/archives`
    Archives,
    /// `cameras/{0}/archives/{1}`
    ArchiveById,
    /// `public/cameras`
    PublicCameras,
    /// `public/cameras/nearest`
    NearestPublicCamera,
    /// `public/cameras/nearest/snapshot`
    NearestPublicCameraSnapshot,
}

impl Operation {
    /// The relative-path template for this operation
    pub const fn template(self) -> &'static str {
        match self {
            Operation::Vendors => "vendors",
            Operation::VendorById => "vendors/{0}",
            Operation::Models => "models",
            Operation::ModelById => "models/{0}",
            Operation::Users => "users",
            Operation::UserById => "users/{0}",
            Operation::Cameras => "cameras",
            Operation::CameraById => "cameras/{0}",
            Operation::LiveSnapshot => "cameras/{0}/live/snapshot",
            Operation::Snapshots => "cameras/{0}/recordings/snapshots",
            Operation::SnapshotByTimestamp => "cameras/{0}/recordings/snapshots/{1}",
            Operation::Shares => "cameras/{0}/shares",
            Operation::ShareRequests => "cameras/{0}/shares/requests",
            Operation::Webhooks => "cameras/{0}/webhooks",
            Operation::WebhookById => "cameras/{0}/webhooks/{1}",
            Operation::Archives => "cameras/{0}/archives",
            Operation::ArchiveById => "cameras/{0}/archives/{1}",
            Operation::PublicCameras => "public/cameras",
            Operation::NearestPublicCamera => "public/cameras/nearest",
            Operation::NearestPublicCameraSnapshot => "public/cameras/nearest/snapshot",
        }
    }

    /// Logical name used in template error messages
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Vendors => "vendors",
            Operation::VendorById => "vendor",
            Operation::Models => "models",
            Operation::ModelById => "model",
            Operation::Users => "users",
            Operation::UserById => "user",
            Operation::Cameras => "cameras",
            Operation::CameraById => "camera",
            Operation::LiveSnapshot => "live_snapshot",
            Operation::Snapshots => "snapshots",
            Operation::SnapshotByTimestamp => "snapshot",
            Operation::Shares => "shares",
            Operation::ShareRequests => "share_requests",
            Operation::Webhooks => "webhooks",
            Operation::WebhookById => "webhook",
            Operation::Archives => "archives",
            Operation::ArchiveById => "archive",
            Operation::PublicCameras => "public_cameras",
            Operation::NearestPublicCamera => "nearest_public_camera",
            Operation::NearestPublicCameraSnapshot => "nearest_public_camera_snapshot",
        }
    }

    /// Number of path parameters the template requires
    pub fn arity(self) -> usize {
        self.template().matches('{').count()
    }

    /// Substitute path parameters into the template
    ///
    /// Parameters are percent-encoded as path segments. The parameter count
    /// must match the template arity exactly; anything else is an
    /// [`Error::Template`].
    pub fn resolve(self, params: &[&str]) -> Result<String> {
        let expected = self.arity();
        if params.len() != expected {
            return Err(Error::Template {
                operation: self.name(),
                expected,
                supplied: params.len(),
            });
        }

        let mut path = self.template().to_string();
        for (index, param) in params.iter().enumerate() {
            path = path.replace(&format!("{{{}}}", index), &encode_path(param));
        }
        Ok(path)
    }
}

/// Endpoint URL builder bound to a base URL
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create a new endpoints builder
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the full URL for an operation
    pub fn url(&self, operation: Operation, params: &[&str]) -> Result<String> {
        Ok(format!("{}/{}", self.base_url, operation.resolve(params)?))
    }
}
