//! Utility functions

/// Extract header value as string
pub fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers.get(name)?.to_str().ok().map(|s| s.to_string())
}

/// Generate a new request ID
pub fn generate_request_id() -> String {
    format!("sdk-{}", uuid::Uuid::new_v4())
}

/// URL encode a path segment
pub fn encode_path(s: &str) -> String {
    use percent_encoding::{AsciiSet, CONTROLS};

    // Define which characters to encode - RFC 3986 unreserved characters plus common safe chars
    const FRAGMENT: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'<')
        .add(b'>')
        .add(b'`')
        .add(b'#')
        .add(b'?')
        .add(b'{')
        .add(b'}')
        .add(b'/')
        .add(b'%');

    percent_encoding::utf8_percent_encode(s, FRAGMENT).to_string()
}

/// Clamp a `limit` pagination parameter to the API default when invalid.
///
/// The API treats `limit <= 0` as a client mistake; the documented default
/// page size is [`crate::DEFAULT_LIMIT`].
pub fn clamp_limit(limit: i64) -> i64 {
    if limit <= 0 {
        crate::DEFAULT_LIMIT
    } else {
        limit
    }
}

/// Clamp a `page` pagination parameter to the first page when negative.
///
/// Page numbering starts at 0, so 0 itself is preserved.
pub fn clamp_page(page: i64) -> i64 {
    if page < 0 {
        crate::DEFAULT_PAGE
    } else {
        page
    }
}

/// Ordered query parameter collector.
///
/// The API distinguishes "absent" from "empty": parameters with no value
/// must be omitted entirely, booleans must be the lowercase `true`/`false`
/// tokens, and pagination parameters are clamped before serialization.
/// Every call site goes through this type so the policy cannot drift.
#[derive(Debug, Default, Clone)]
pub(crate) struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.pairs.push((name.to_string(), value.into()));
    }

    /// Append a parameter, omitting unset or empty values.
    pub fn push_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.push(name, value);
            }
        }
    }

    /// Append a boolean parameter as a lowercase `true`/`false` token.
    pub fn push_bool(&mut self, name: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.push(name, if value { "true" } else { "false" });
        }
    }

    /// Append a clamped `limit` parameter.
    pub fn push_limit(&mut self, limit: Option<i64>) {
        if let Some(limit) = limit {
            self.push("limit", clamp_limit(limit).to_string());
        }
    }

    /// Append a clamped `page` parameter.
    pub fn push_page(&mut self, page: Option<i64>) {
        if let Some(page) = page {
            self.push("page", clamp_page(page).to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }
}
