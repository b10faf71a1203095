//! Response construction and upstream result translation.
//!
//! # Responsibilities
//! - Build the short-circuit responses (preflight, 404, 401, 405)
//! - Translate an [`UpstreamResult`] into the client response
//! - Attach CORS headers to every response without exception
//!
//! # Design Decisions
//! - Success bodies are relayed as raw bytes, never re-encoded
//! - Every error body is a JSON envelope with an `error` field

use axum::body::Body;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::security::headers::{cors_headers, ALLOWED_METHODS};
use crate::upstream::UpstreamResult;

/// JSON error envelope returned to the frontend.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    fn new(error: &'static str) -> Self {
        Self {
            error,
            status: None,
            message: None,
        }
    }
}

/// 200 with only the CORS headers and no body.
pub fn preflight() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}

pub fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, ErrorBody::new("Not found"))
}

pub fn unauthorized() -> Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        ErrorBody::new("Authorization header required"),
    )
}

pub fn method_not_allowed() -> Response {
    let mut response = json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorBody::new("Method not allowed"),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

/// Map a dispatch outcome onto the response sent to the client.
pub fn translate(result: UpstreamResult) -> Response {
    match result {
        UpstreamResult::Success {
            status,
            content_type,
            body,
        } => {
            let mut headers = cors_headers();
            headers.insert(
                CONTENT_TYPE,
                content_type.unwrap_or_else(|| HeaderValue::from_static("application/json")),
            );
            (status, headers, Body::from(body)).into_response()
        }
        UpstreamResult::HttpFailure { status, reason } => json_error(
            status,
            ErrorBody {
                error: "API request failed",
                status: Some(status.as_u16()),
                message: Some(reason),
            },
        ),
        UpstreamResult::TransportFailure { message } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                error: "Proxy error",
                status: None,
                message: Some(message),
            },
        ),
        UpstreamResult::UnknownFailure { message } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                error: "Internal proxy error",
                status: None,
                message: Some(message),
            },
        ),
    }
}

fn json_error(status: StatusCode, body: ErrorBody) -> Response {
    (status, cors_headers(), Json(body)).into_response()
}
