//! Result building for the 200/409 success path.
//!
//! Dropbox encodes endpoint-specific failures in the payload rather than
//! the HTTP status: a body carrying the reserved `error` key is an error
//! envelope, anything else is a success payload. This is where the typed
//! split happens.

use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::{Error, ErrorKind};

/// Reserved top-level key marking a payload as an error envelope.
const ERROR_KEY: &str = "error";

/// Human-readable summary accompanying an error envelope.
const SUMMARY_KEY: &str = "error_summary";

/// Decide success vs. application error for an already-classified payload
/// and decode it against the endpoint's shapes.
pub fn build_result<E: Endpoint>(
    payload: serde_json::Value,
) -> Result<E::Response, Error<E::Error>> {
    if payload.get(ERROR_KEY).is_some() {
        let summary = payload
            .get(SUMMARY_KEY)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let envelope = payload[ERROR_KEY].clone();

        return match serde_json::from_value::<E::Error>(envelope) {
            Ok(error) => Err(Error::new(ErrorKind::Api { summary, error })),
            // The discriminant is outside the endpoint's closed vocabulary.
            Err(_) => Err(Error::new(ErrorKind::UnknownApi { summary, payload })),
        };
    }

    decode::<E::Response, E::Error>(payload)
}

fn decode<T: DeserializeOwned, AE: std::error::Error>(
    payload: serde_json::Value,
) -> Result<T, Error<AE>> {
    serde_json::from_value(payload)
        .map_err(|e| Error::with_source(ErrorKind::Json(e.to_string()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct GetThing;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Thing {
        name: String,
        size: u64,
    }

    #[derive(Debug, PartialEq, thiserror::Error, Deserialize)]
    #[serde(tag = ".tag", rename_all = "snake_case")]
    enum GetThingError {
        #[error("not found")]
        NotFound,
        #[error("restricted")]
        Restricted,
    }

    impl Endpoint for GetThing {
        const PATH: &'static str = "things/get";
        type Params = serde_json::Value;
        type Response = Thing;
        type Error = GetThingError;
    }

    #[test]
    fn test_payload_without_error_key_decodes_as_success() {
        let payload = serde_json::json!({"name": "hello.txt", "size": 42});
        let thing = build_result::<GetThing>(payload).unwrap();
        assert_eq!(
            thing,
            Thing {
                name: "hello.txt".to_string(),
                size: 42
            }
        );
    }

    #[test]
    fn test_error_envelope_decodes_as_typed_api_error() {
        let payload = serde_json::json!({
            "error_summary": "not_found/..",
            "error": {".tag": "not_found"}
        });
        let err = build_result::<GetThing>(payload).unwrap_err();
        match err.kind {
            ErrorKind::Api { summary, error } => {
                assert_eq!(summary, "not_found/..");
                assert_eq!(error, GetThingError::NotFound);
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_discriminant_is_unknown_api_error() {
        let payload = serde_json::json!({
            "error_summary": "brand_new_failure/..",
            "error": {".tag": "brand_new_failure"}
        });
        let err = build_result::<GetThing>(payload).unwrap_err();
        match err.kind {
            ErrorKind::UnknownApi { summary, payload } => {
                assert_eq!(summary, "brand_new_failure/..");
                assert_eq!(payload["error"][".tag"], "brand_new_failure");
            }
            other => panic!("expected UnknownApi, got {other:?}"),
        }
    }

    #[test]
    fn test_success_payload_with_wrong_shape_is_json_error() {
        let payload = serde_json::json!({"name": "hello.txt"});
        let err = build_result::<GetThing>(payload).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }
}
