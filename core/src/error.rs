//! Error types for request construction.
//!
//! # Design
//! Every variant surfaces synchronously from `Endpoint::url` and the request
//! builders. `MalformedUrl` only fires when a base/path pair does not form a
//! valid URL, which the catalog never produces; callers should treat it as a
//! bug rather than branch on it. `DotSegment` is the same class of error,
//! raised when an identifier would make the URL point somewhere else.

use thiserror::Error;

/// Errors returned while building an `HttpRequest`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The base URL joined with the endpoint path is not a valid URL.
    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// The path holds a `.` or `..` segment (plain or percent-encoded) that
    /// URL resolution would collapse, retargeting the request.
    #[error("malformed URL: dot segment {segment:?} in path {path:?}")]
    DotSegment { path: String, segment: String },
}
