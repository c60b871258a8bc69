//! Turning an endpoint into a transport-ready `HttpRequest`.
//!
//! # Design
//! `Endpoint` only asks an implementor for a base origin and a path. URL
//! assembly, headers and body encoding are provided methods, so every
//! endpoint type builds requests the same way. The builders are pure: no
//! network, no filesystem, no shared state.

use serde::Serialize;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

const JSON_CONTENT_TYPE: &str = "application/json";

/// One `name[=value]` pair of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    pub value: Option<String>,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// An item rendered as a bare `name` with no `=`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for QueryItem {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

/// Something that resolves to a URL on a remote JSON API.
pub trait Endpoint {
    /// Origin the path is resolved against, e.g. `https://api.openai.com`.
    fn base(&self) -> &str;

    /// Path of this endpoint. Interpolated identifiers are not escaped.
    fn path(&self) -> String;

    /// Absolute URL with `query_items` appended in order. An empty slice
    /// leaves the URL without a query string.
    ///
    /// Fails with `ApiError::DotSegment` when the path carries a `.` or `..`
    /// segment, since resolving it would point the URL at another resource.
    fn url(&self, query_items: &[QueryItem]) -> Result<Url, ApiError> {
        let path = self.path();
        if let Some(segment) = dot_segment(&path) {
            return Err(ApiError::DotSegment {
                segment: segment.to_string(),
                path,
            });
        }
        let mut url = Url::parse(self.base())?.join(&path)?;
        if !query_items.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for item in query_items {
                match &item.value {
                    Some(value) => pairs.append_pair(&item.name, value),
                    None => pairs.append_key_only(&item.name),
                };
            }
        }
        Ok(url)
    }

    /// Build a request without a body.
    ///
    /// The method is not checked against the endpoint; any verb is accepted.
    fn request(
        &self,
        api_key: &str,
        method: HttpMethod,
        query_items: &[QueryItem],
    ) -> Result<HttpRequest, ApiError> {
        let url = self.url(query_items)?;
        Ok(assemble(url, api_key, method, None))
    }

    /// Build a request whose body is `params` encoded as JSON.
    fn request_with_params<P: Serialize + ?Sized>(
        &self,
        api_key: &str,
        method: HttpMethod,
        params: &P,
        query_items: &[QueryItem],
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_vec(params)?;
        let url = self.url(query_items)?;
        Ok(assemble(url, api_key, method, Some(body)))
    }
}

/// First segment of `path` that URL parsing treats as `.` or `..`.
///
/// Mirrors the WHATWG rules: `\` also separates segments, tab and newline
/// are dropped, `%2e` counts as a dot, and anything after `?` or `#` is not
/// part of the path.
fn dot_segment(path: &str) -> Option<&str> {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path[..end]
        .split(|c: char| c == '/' || c == '\\')
        .find(|segment| {
            let cleaned: String = segment
                .chars()
                .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
                .collect::<String>()
                .to_ascii_lowercase()
                .replace("%2e", ".");
            cleaned == "." || cleaned == ".."
        })
}

fn assemble(url: Url, api_key: &str, method: HttpMethod, body: Option<Vec<u8>>) -> HttpRequest {
    tracing::debug!(
        %method,
        %url,
        body_len = body.as_ref().map_or(0, Vec::len),
        "built request"
    );
    HttpRequest {
        method,
        url,
        headers: vec![
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
            ("Authorization".to_string(), format!("Bearer {api_key}")),
        ],
        body,
    }
}
