//! Header manipulation: CORS response headers and outbound narrowing.
//!
//! # Responsibilities
//! - Attach the CORS header set to every response
//! - Build the outbound header set from an allow-list, never a deny-list
//!
//! # Design Decisions
//! - Only Authorization crosses from the client to the upstream
//! - Cookies, Host and any other client header are dropped

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use axum::http::{HeaderMap, HeaderValue};

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// The CORS header set attached to every response.
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOWED_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers
}

/// Returns the Authorization value, treating an empty header as absent.
pub fn authorization(headers: &HeaderMap) -> Option<&HeaderValue> {
    headers.get(AUTHORIZATION).filter(|value| !value.is_empty())
}

/// Build the exact header set sent upstream.
pub fn outbound_headers(authorization: HeaderValue, user_agent: HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, user_agent);
    headers
}
