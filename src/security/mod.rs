//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → headers.rs (Authorization presence, outbound allow-list)
//!     → limits.rs (body size cap while buffering)
//! Outbound response
//!     → headers.rs (CORS header set)
//! ```
//!
//! # Design Decisions
//! - Credentials are passed through, never inspected or rewritten
//! - Header forwarding is allow-list only

pub mod headers;
pub mod limits;
