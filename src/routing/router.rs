//! Upstream URL rewriting.

use axum::http::Uri;

use crate::config::UpstreamConfig;
use crate::routing::matcher::PathPrefixMatcher;

/// Maps inbound URIs under the routing prefix onto the upstream base URL.
#[derive(Debug, Clone)]
pub struct Router {
    matcher: PathPrefixMatcher,
    base_url: String,
}

impl Router {
    /// Create a router for a base URL and prefix.
    pub fn new(base_url: impl Into<String>, prefix: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            matcher: PathPrefixMatcher::new(prefix),
            base_url,
        }
    }

    /// Build the router from upstream configuration.
    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.base_url.clone(), config.route_prefix.clone())
    }

    /// Rewrite an inbound URI into the upstream URL, keeping the query string.
    ///
    /// Returns `None` if the path is outside the routing prefix.
    pub fn rewrite(&self, uri: &Uri) -> Option<String> {
        let remainder = self.matcher.strip(uri.path())?;
        Some(match uri.query() {
            Some(query) => format!("{}{}?{}", self.base_url, remainder, query),
            None => format!("{}{}", self.base_url, remainder),
        })
    }
}
