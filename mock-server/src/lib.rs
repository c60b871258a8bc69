use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

/// What the server saw for one request, sent back as the response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: String,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/v1/audio/transcriptions", post(echo))
        .route("/v1/audio/translations", post(echo))
        .route("/v1/chat/completions", post(echo))
        .route("/v1/embeddings", post(echo))
        .route("/v1/fine_tuning/jobs", get(echo).post(echo))
        .route("/v1/fine_tuning/jobs/{job_id}", get(echo))
        .route("/v1/fine_tuning/jobs/{job_id}/cancel", post(echo))
        .route("/v1/fine_tuning/jobs/{job_id}/events", get(echo))
        .route("/v1/files", get(echo).post(echo))
        .route("/v1/files/{file_id}", get(echo).delete(echo))
        .route("/v1/files/{file_id}/content", get(echo))
        .route("/v1/images/generations", post(echo))
        .route("/v1/images/edits", post(echo))
        .route("/v1/images/variations", post(echo))
        .route("/v1/models", get(echo))
        .route("/v1/models/{model_id}", get(echo).delete(echo))
        .route("/v1/moderations", post(echo))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let request_id = Uuid::new_v4().to_string();
    tracing::info!(%method, %uri, %request_id, "received request");

    let Some(authorization) = bearer(&headers) else {
        return error(
            StatusCode::UNAUTHORIZED,
            "invalid_request_error",
            "You didn't provide an API key.",
        );
    };

    let body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                return error(
                    StatusCode::BAD_REQUEST,
                    "invalid_request_error",
                    &format!("We could not parse the JSON body of your request: {e}"),
                )
            }
        }
    };

    let echo = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization,
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    };
    (StatusCode::OK, [("x-request-id", request_id)], Json(echo)).into_response()
}

async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::warn!(%method, %uri, "no such route");
    error(
        StatusCode::NOT_FOUND,
        "invalid_request_error",
        &format!("Invalid URL ({method} {})", uri.path()),
    )
}

/// Returns the full header value when it is `Bearer <non-empty key>`.
fn bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let key = value.strip_prefix("Bearer ")?;
    if key.trim().is_empty() {
        return None;
    }
    Some(value.to_string())
}

fn error(status: StatusCode, kind: &str, message: &str) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            message: message.to_string(),
            kind: kind.to_string(),
        },
    };
    (status, Json(body)).into_response()
}
