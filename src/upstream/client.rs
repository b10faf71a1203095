//! Upstream HTTP client with error classification.
//!
//! # Responsibilities
//! - Issue one request per inbound call (no retries)
//! - Buffer the upstream body in full
//! - Classify every outcome into an [`UpstreamResult`]
//! - Apply the optional round-trip deadline

use std::error::Error as StdError;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;

use crate::config::UpstreamConfig;
use crate::upstream::types::{OutboundRequest, UpstreamResult};

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Send the request and classify the outcome.
    pub async fn dispatch(&self, request: OutboundRequest) -> UpstreamResult {
        let mut builder = self
            .http
            .request(request.method, request.url.as_str())
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return classify_error(&e),
        };

        let status = response.status();
        if status.as_u16() >= 400 {
            return UpstreamResult::HttpFailure {
                status,
                reason: reason_phrase(&response),
            };
        }

        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        match response.bytes().await {
            Ok(body) => UpstreamResult::Success {
                status,
                content_type,
                body,
            },
            Err(e) => classify_error(&e),
        }
    }
}

/// Map a reqwest error onto the transport/unknown split.
///
/// A reply that is not valid HTTP, or a connection closed before the reply
/// completed, is a malformed response rather than a reachability problem.
fn classify_error(error: &reqwest::Error) -> UpstreamResult {
    let message = describe(error);
    if is_malformed_response(error) {
        UpstreamResult::UnknownFailure { message }
    } else if error.is_connect() || error.is_timeout() || error.is_request() {
        UpstreamResult::TransportFailure { message }
    } else {
        UpstreamResult::UnknownFailure { message }
    }
}

/// Walk the source chain down to hyper and check for a parse-level failure.
fn is_malformed_response(error: &(dyn StdError + 'static)) -> bool {
    let mut source = Some(error);
    while let Some(cause) = source {
        if let Some(e) = cause.downcast_ref::<hyper::Error>() {
            return e.is_parse() || e.is_parse_status() || e.is_incomplete_message();
        }
        source = cause.source();
    }
    false
}

/// Flatten an error and its sources into one line.
fn describe(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// The upstream's own reason phrase if it sent a non-canonical one,
/// otherwise the canonical phrase for the status code.
fn reason_phrase(response: &reqwest::Response) -> String {
    if let Some(reason) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    canonical_reason(response.status())
}

fn canonical_reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_reason() {
        assert_eq!(canonical_reason(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(canonical_reason(StatusCode::TOO_MANY_REQUESTS), "Too Many Requests");
        assert_eq!(canonical_reason(StatusCode::from_u16(599).unwrap()), "");
    }

    #[test]
    fn test_describe_walks_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert_eq!(describe(&Wrapper(inner)), "wrapped: connection refused");
    }

    #[derive(Debug)]
    struct Wrapper(std::io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_non_hyper_error_is_not_malformed() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert!(!is_malformed_response(&Wrapper(inner)));
    }

    #[tokio::test]
    async fn test_invalid_url_is_unknown_failure() {
        let client = UpstreamClient::new(&UpstreamConfig::default()).unwrap();
        let result = client
            .dispatch(OutboundRequest {
                method: axum::http::Method::GET,
                url: "not a url".into(),
                headers: Default::default(),
                body: None,
            })
            .await;
        assert!(matches!(result, UpstreamResult::UnknownFailure { .. }));
    }
}
