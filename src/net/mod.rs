//! Network layer.
//!
//! Binds the single listening socket the HTTP server is driven from.

pub mod listener;

pub use listener::{bind, ListenerError};
