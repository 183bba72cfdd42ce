//! Response classification.
//!
//! Maps a raw response's HTTP status to a dispatch decision. Official
//! Dropbox documentation for HTTP error codes:
//! https://www.dropbox.com/developers/documentation/http/documentation#error-handling
//!
//! Status 409 is a carrier for endpoint-specific errors: the real
//! success/error split for 200 and 409 happens one layer down, in result
//! building, by inspecting the payload. This keeps one classifier serving
//! every endpoint regardless of its error vocabulary.

use crate::error::{Error, ErrorKind, Result};
use crate::response::RawResponse;

/// Synthesized reason tag for a 429 with no decodable body.
const DEFAULT_RATE_LIMIT_REASON: &str = "too_many_write_operations";

/// Classify a raw response into the success path or a pipeline error.
///
/// On 200/409 the decoded body is returned for result building; every
/// other status becomes an error kind.
pub fn classify(raw: RawResponse) -> Result<serde_json::Value> {
    match raw.status() {
        200 | 409 => {
            let status = raw.status();
            raw.into_json().ok_or_else(|| {
                Error::new(ErrorKind::Json(format!(
                    "expected a JSON body at status {status}"
                )))
            })
        }
        401 => {
            let summary = raw
                .json()
                .and_then(|body| body.get("error_summary"))
                .and_then(|v| v.as_str())
                .unwrap_or("expired_access_token/..")
                .to_string();
            Err(Error::new(ErrorKind::ExpiredCredential { summary }))
        }
        429 => {
            let retry_after = raw.retry_after_secs();
            // Uploads can answer 429 with a non-JSON content type, so the
            // decoded body may be absent entirely.
            let (summary, reason) = match raw.json() {
                Some(body) => (
                    body.get("error_summary")
                        .and_then(|v| v.as_str())
                        .unwrap_or("too_many_requests/..")
                        .to_string(),
                    body.pointer("/error/reason/.tag")
                        .and_then(|v| v.as_str())
                        .unwrap_or(DEFAULT_RATE_LIMIT_REASON)
                        .to_string(),
                ),
                None => (
                    "Too many requests.".to_string(),
                    DEFAULT_RATE_LIMIT_REASON.to_string(),
                ),
            };
            Err(Error::new(ErrorKind::TooManyRequests {
                summary,
                reason,
                retry_after,
            }))
        }
        status => Err(Error::new(ErrorKind::Http {
            status,
            body: raw.into_text(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn json_response(status: u16, body: serde_json::Value) -> RawResponse {
        json_response_with_headers(status, body, HashMap::new())
    }

    fn json_response_with_headers(
        status: u16,
        body: serde_json::Value,
        mut headers: HashMap<String, String>,
    ) -> RawResponse {
        headers.insert("content-type".to_string(), "application/json".to_string());
        RawResponse::new(status, headers, body.to_string())
    }

    #[test]
    fn test_200_returns_body_for_result_building() {
        let raw = json_response(200, serde_json::json!({"name": "hello.txt"}));
        let payload = classify(raw).unwrap();
        assert_eq!(payload["name"], "hello.txt");
    }

    #[test]
    fn test_409_is_also_the_success_path() {
        let raw = json_response(
            409,
            serde_json::json!({
                "error_summary": "path/not_found/..",
                "error": {".tag": "path", "path": {".tag": "not_found"}}
            }),
        );
        let payload = classify(raw).unwrap();
        assert_eq!(payload["error_summary"], "path/not_found/..");
    }

    #[test]
    fn test_401_is_expired_credential() {
        let raw = json_response(
            401,
            serde_json::json!({
                "error_summary": "expired_access_token/...",
                "error": {".tag": "expired_access_token"}
            }),
        );
        let err = classify(raw).unwrap_err();
        match err.kind {
            ErrorKind::ExpiredCredential { summary } => {
                assert_eq!(summary, "expired_access_token/...");
            }
            other => panic!("expected ExpiredCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_429_with_json_body_and_retry_after() {
        let raw = json_response_with_headers(
            429,
            serde_json::json!({
                "error_summary": "too_many_write_operations/..",
                "error": {"reason": {".tag": "too_many_write_operations"}}
            }),
            HashMap::from([("Retry-After".to_string(), "30".to_string())]),
        );
        let err = classify(raw).unwrap_err();
        match err.kind {
            ErrorKind::TooManyRequests {
                summary,
                reason,
                retry_after,
            } => {
                assert_eq!(summary, "too_many_write_operations/..");
                assert_eq!(reason, "too_many_write_operations");
                assert_eq!(retry_after, 30);
            }
            other => panic!("expected TooManyRequests, got {other:?}"),
        }
    }

    #[test]
    fn test_429_without_body_synthesizes_defaults() {
        let raw = RawResponse::new(
            429,
            HashMap::from([
                ("content-type".to_string(), "text/plain".to_string()),
                ("retry-after".to_string(), "5".to_string()),
            ]),
            String::new(),
        );
        let err = classify(raw).unwrap_err();
        match err.kind {
            ErrorKind::TooManyRequests {
                summary,
                reason,
                retry_after,
            } => {
                assert_eq!(summary, "Too many requests.");
                assert_eq!(reason, "too_many_write_operations");
                assert_eq!(retry_after, 5);
            }
            other => panic!("expected TooManyRequests, got {other:?}"),
        }
    }

    #[test]
    fn test_429_missing_retry_after_is_zero() {
        let raw = RawResponse::new(429, HashMap::new(), String::new());
        let err = classify(raw).unwrap_err();
        assert_eq!(err.retry_after(), Some(0));
    }

    #[test]
    fn test_other_status_is_http_error_with_body_text() {
        let raw = RawResponse::new(503, HashMap::new(), "server busy".to_string());
        let err = classify(raw).unwrap_err();
        match err.kind {
            ErrorKind::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "server busy");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn test_200_without_json_body_is_a_json_error() {
        let raw = RawResponse::new(200, HashMap::new(), "not json".to_string());
        let err = classify(raw).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }
}
