//! Outbound request and dispatch result types.

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};

/// A fully rewritten request, ready to send upstream.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    /// Narrowed header set; see [`crate::security::headers::outbound_headers`].
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Outcome of one upstream round trip.
///
/// Every dispatch ends in exactly one of these; the translate step matches
/// on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResult {
    /// The upstream answered with a non-error status.
    Success {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },

    /// The upstream answered with status >= 400.
    HttpFailure { status: StatusCode, reason: String },

    /// The upstream could not be reached (DNS, refused, reset, deadline).
    TransportFailure { message: String },

    /// Anything else: malformed response, unreadable body, bad URL.
    UnknownFailure { message: String },
}

impl UpstreamResult {
    /// Short label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamResult::Success { .. } => "success",
            UpstreamResult::HttpFailure { .. } => "upstream_error",
            UpstreamResult::TransportFailure { .. } => "transport_error",
            UpstreamResult::UnknownFailure { .. } => "internal_error",
        }
    }
}
