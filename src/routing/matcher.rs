//! Route matching logic.
//!
//! # Responsibilities
//! - Match the inbound path against the routing prefix
//! - Return the remainder left after stripping the prefix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - The prefix must end on a segment boundary ("/api/pricempirex" is a miss)
//! - No regex to guarantee O(n) matching

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the part of `path` following the prefix, or `None` on a miss.
    ///
    /// The remainder is either empty or starts with `/`.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}
