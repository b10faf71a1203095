//! Request body limits.
//!
//! # Responsibilities
//! - Decide from Content-Length whether a body is present
//! - Enforce maximum request body size while buffering
//!
//! # Design Decisions
//! - A missing, zero or negative Content-Length means "no body"
//! - Declared length checked before reading (early rejection)

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_LENGTH;
use axum::http::HeaderMap;
use thiserror::Error;

/// Errors raised while reading an inbound body.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("invalid Content-Length header: {0:?}")]
    InvalidLength(String),

    #[error("request body of {declared} bytes exceeds limit of {limit} bytes")]
    TooLarge { declared: u64, limit: usize },

    #[error("failed to read request body: {0}")]
    Read(#[from] axum::Error),
}

/// Positive declared body length, if any.
pub fn declared_length(headers: &HeaderMap) -> Result<Option<u64>, BodyError> {
    let Some(value) = headers.get(CONTENT_LENGTH) else {
        return Ok(None);
    };
    let raw = String::from_utf8_lossy(value.as_bytes());
    let length: i64 = raw
        .trim()
        .parse()
        .map_err(|_| BodyError::InvalidLength(raw.to_string()))?;
    Ok(u64::try_from(length).ok().filter(|&n| n > 0))
}

/// Buffer the body in full when a positive length was declared.
pub async fn read_body(
    headers: &HeaderMap,
    body: Body,
    limit: usize,
) -> Result<Option<Bytes>, BodyError> {
    let Some(declared) = declared_length(headers)? else {
        return Ok(None);
    };
    if declared > limit as u64 {
        return Err(BodyError::TooLarge { declared, limit });
    }
    let bytes = axum::body::to_bytes(body, limit).await?;
    Ok(Some(bytes))
}
