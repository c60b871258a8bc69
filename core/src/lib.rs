//! Typed request construction for the OpenAI REST API.
//!
//! # Overview
//! Callers name what they want to do with an `OpenAiApi` value, and the
//! `Endpoint` trait turns it into an `HttpRequest`: absolute URL, method,
//! JSON and bearer-auth headers, optional JSON body. Nothing in this crate
//! performs I/O. The caller's transport executes the request.
//!
//! # Design
//! - `OpenAiApi` is a closed enum; path resolution is an exhaustive match.
//! - Request building lives in provided methods on `Endpoint`, so it is
//!   stateless and safe to call from any number of threads at once.
//! - Identifiers are interpolated into paths without escaping. Callers pass
//!   URL-safe IDs.
//!
//! ```
//! use openai_endpoints::{Endpoint, HttpMethod, OpenAiApi};
//!
//! let req = OpenAiApi::Chat
//!     .request_with_params("sk-test", HttpMethod::Post, &serde_json::json!({"model": "gpt-4"}), &[])
//!     .unwrap();
//! assert_eq!(req.url.as_str(), "https://api.openai.com/v1/chat/completions");
//! assert_eq!(req.header("Authorization"), Some("Bearer sk-test"));
//! ```

pub mod api;
pub mod endpoint;
pub mod error;
pub mod http;

pub use api::{
    AudioCategory, FileCategory, FineTuningCategory, ImageCategory, ModelCategory, OpenAiApi,
};
pub use endpoint::{Endpoint, QueryItem};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest};
