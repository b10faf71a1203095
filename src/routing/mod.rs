//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → matcher.rs (routing prefix check, strip)
//!     → router.rs (append remainder + query to upstream base)
//!     → Return: upstream URL or NoMatch
//! ```
//!
//! # Design Decisions
//! - Single upstream, single prefix, fixed at startup
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always maps to the same URL

pub mod matcher;
pub mod router;

pub use router::Router;
