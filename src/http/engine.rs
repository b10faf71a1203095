//! The forwarding engine.
//!
//! Runs the per-request pipeline:
//!
//! ```text
//! Preflight? → Validate-path → Validate-auth → Rewrite → Dispatch → Translate
//! ```
//!
//! Each stage either hands off to the next or short-circuits with a complete
//! response, so every request ends in exactly one response. The engine holds
//! only immutable configuration and a client handle; nothing is shared
//! mutably between requests.

use std::time::Instant;

use axum::body::Body;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use thiserror::Error;

use crate::config::ProxyConfig;
use crate::http::request::{request_id, ProxyMethod};
use crate::http::response;
use crate::observability::metrics;
use crate::routing::Router;
use crate::security::headers::{authorization, outbound_headers};
use crate::security::limits::read_body;
use crate::upstream::{OutboundRequest, UpstreamClient, UpstreamResult};

/// Errors building the engine at startup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid user agent: {0}")]
    UserAgent(#[from] InvalidHeaderValue),
}

/// Stateless request-forwarding engine.
#[derive(Debug, Clone)]
pub struct ForwardingEngine {
    router: Router,
    client: UpstreamClient,
    user_agent: HeaderValue,
    max_body_size: usize,
}

impl ForwardingEngine {
    pub fn new(config: &ProxyConfig) -> Result<Self, EngineError> {
        Ok(Self {
            router: Router::from_config(&config.upstream),
            client: UpstreamClient::new(&config.upstream)?,
            user_agent: HeaderValue::from_str(&config.upstream.user_agent)?,
            max_body_size: config.limits.max_body_size,
        })
    }

    /// Handle one inbound request end to end.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let start_time = Instant::now();
        let request_id = request_id(&request);
        let method = request.method().clone();

        let (response, outcome) = self.run_pipeline(&request_id, request).await;

        metrics::record_request(method.as_str(), response.status().as_u16(), outcome, start_time);
        response
    }

    async fn run_pipeline(
        &self,
        request_id: &str,
        request: Request<Body>,
    ) -> (Response, &'static str) {
        let (parts, body) = request.into_parts();

        if parts.method == Method::OPTIONS {
            return (response::preflight(), "preflight");
        }

        let Some(url) = self.router.rewrite(&parts.uri) else {
            tracing::debug!(request_id = %request_id, path = %parts.uri.path(), "No route matched");
            return (response::not_found(), "not_found");
        };

        let Some(method) = ProxyMethod::from_method(&parts.method) else {
            tracing::debug!(request_id = %request_id, method = %parts.method, "Unsupported method");
            return (response::method_not_allowed(), "method_not_allowed");
        };

        let Some(authorization) = authorization(&parts.headers).cloned() else {
            tracing::debug!(request_id = %request_id, path = %parts.uri.path(), "Missing Authorization header");
            return (response::unauthorized(), "unauthorized");
        };

        let body = match read_body(&parts.headers, body, self.max_body_size).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Failed to read request body");
                let result = UpstreamResult::UnknownFailure {
                    message: e.to_string(),
                };
                let outcome = result.outcome();
                return (response::translate(result), outcome);
            }
        };

        let outbound = OutboundRequest {
            method: Method::from(method),
            url,
            headers: outbound_headers(authorization, self.user_agent.clone()),
            body,
        };

        tracing::info!(
            request_id = %request_id,
            method = %outbound.method,
            url = %outbound.url,
            "Proxying request"
        );

        let result = self.client.dispatch(outbound).await;
        log_result(request_id, &result);

        let outcome = result.outcome();
        (response::translate(result), outcome)
    }
}

fn log_result(request_id: &str, result: &UpstreamResult) {
    match result {
        UpstreamResult::Success { status, body, .. } => {
            tracing::info!(request_id = %request_id, status = %status, bytes = body.len(), "Upstream responded");
        }
        UpstreamResult::HttpFailure { status, reason } => {
            tracing::warn!(request_id = %request_id, status = %status, reason = %reason, "Upstream rejected request");
        }
        UpstreamResult::TransportFailure { message } => {
            tracing::error!(request_id = %request_id, error = %message, "Upstream unreachable");
        }
        UpstreamResult::UnknownFailure { message } => {
            tracing::error!(request_id = %request_id, error = %message, "Error proxying request");
        }
    }
}
