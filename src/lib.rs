//! Pricempire CORS proxy library.
//!
//! Forwards `/api/pricempire/*` requests to the Pricempire API, passing the
//! caller's Authorization header through and adding CORS headers to every
//! response.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
