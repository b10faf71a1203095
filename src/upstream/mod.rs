//! Upstream dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! OutboundRequest (method, rewritten URL, narrowed headers, body)
//!     → client.rs (one reqwest round trip, optional deadline)
//!     → types.rs UpstreamResult
//!         Success | HttpFailure | TransportFailure | UnknownFailure
//! ```
//!
//! # Design Decisions
//! - No retries, no caching: one inbound request, one upstream call
//! - Errors are values, never panics; classification happens here once

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{OutboundRequest, UpstreamResult};
