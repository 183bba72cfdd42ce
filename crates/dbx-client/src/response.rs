//! Raw wire response.
//!
//! The transport decodes JSON bodies eagerly when the content type says
//! JSON, and always exposes the raw status, header map, and body text —
//! some endpoints (uploads in particular) answer with non-JSON bodies even
//! on error statuses.

use std::collections::HashMap;

/// A response as it came off the wire, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HashMap<String, String>,
    text: String,
    json: Option<serde_json::Value>,
}

impl RawResponse {
    /// Build a response from raw parts.
    ///
    /// Header names are normalized to lowercase for case-insensitive
    /// lookups. The body is decoded as JSON only when the content type
    /// indicates JSON.
    pub fn new(status: u16, headers: HashMap<String, String>, text: String) -> Self {
        let headers: HashMap<String, String> = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let is_json = headers
            .get("content-type")
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false);

        let json = if is_json {
            serde_json::from_str(&text).ok()
        } else {
            None
        };

        Self {
            status,
            headers,
            text,
            json,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// The decoded JSON body, when the content type was JSON and the body
    /// parsed.
    pub fn json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }

    /// Consume the response, returning the decoded JSON body.
    pub fn into_json(self) -> Option<serde_json::Value> {
        self.json
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the response, returning the raw body text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// The `Retry-After` header as integer seconds; 0 when the header is
    /// missing or unparseable.
    pub fn retry_after_secs(&self) -> u64 {
        self.header("retry-after")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }
}
