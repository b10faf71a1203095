//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → engine.rs (preflight, routing, auth, rewrite, dispatch)
//!     → response.rs (translate result, attach CORS headers)
//!     → Send to client
//! ```

pub mod engine;
pub mod request;
pub mod response;
pub mod server;

pub use engine::{EngineError, ForwardingEngine};
pub use request::{ProxyMethod, UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
