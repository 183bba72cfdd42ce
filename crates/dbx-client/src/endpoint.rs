//! The per-endpoint contract seam.
//!
//! Each remote operation is described once, statically: method, path, and
//! the three payload shapes (params, success result, error union). The
//! executor consumes contracts; it never knows endpoint vocabularies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::request::RequestMethod;

/// The immutable contract of one remote operation.
///
/// Implemented by zero-sized marker types, one per endpoint. The error
/// union is a closed set: an envelope whose discriminant falls outside it
/// surfaces as `ErrorKind::UnknownApi`, never as a panic or a silent
/// success.
pub trait Endpoint {
    /// HTTP method. All Dropbox RPC endpoints use POST.
    const METHOD: RequestMethod = RequestMethod::Post;

    /// Path relative to the API base, e.g. `files/get_metadata`.
    const PATH: &'static str;

    /// Request parameters, serialized as the JSON body.
    type Params: Serialize + Send + Sync;

    /// Decoded success payload.
    type Response: DeserializeOwned;

    /// Closed endpoint-specific error union, decoded from the `error`
    /// field of a 200/409 envelope.
    type Error: DeserializeOwned + std::error::Error + Send + Sync + 'static;
}

/// Entry in a static endpoint registry table.
///
/// Endpoint namespaces publish a table of these so callers can enumerate
/// the operations a build supports without invoking any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Short operation name, e.g. `get_metadata`.
    pub name: &'static str,
    /// HTTP method.
    pub method: RequestMethod,
    /// Path relative to the API base.
    pub path: &'static str,
}

/// Build a registry entry from an endpoint contract.
pub const fn describe<E: Endpoint>(name: &'static str) -> EndpointDescriptor {
    EndpointDescriptor {
        name,
        method: E::METHOD,
        path: E::PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    #[derive(Debug, thiserror::Error, serde::Deserialize)]
    enum PingError {
        #[error("unreachable")]
        #[allow(dead_code)]
        Unreachable,
    }

    impl Endpoint for Ping {
        const PATH: &'static str = "check/user";
        type Params = serde_json::Value;
        type Response = serde_json::Value;
        type Error = PingError;
    }

    #[test]
    fn test_describe_builds_registry_entry() {
        const ENTRY: EndpointDescriptor = describe::<Ping>("ping");
        assert_eq!(ENTRY.name, "ping");
        assert_eq!(ENTRY.path, "check/user");
        assert_eq!(ENTRY.method, RequestMethod::Post);
    }
}
