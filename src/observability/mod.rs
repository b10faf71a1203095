//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarding engine produces:
//!     → logging.rs (structured log events, keyed by request ID)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
