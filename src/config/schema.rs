//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the CORS proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The single upstream API requests are forwarded to.
    pub upstream: UpstreamConfig,

    /// Inbound request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every stripped path is appended to.
    pub base_url: String,

    /// Inbound path prefix that marks a request as proxied.
    pub route_prefix: String,

    /// User-Agent sent on every upstream call.
    pub user_agent: String,

    /// Deadline for one upstream round trip. Unset means no deadline.
    pub timeout_secs: Option<u64>,

    /// Honor HTTP(S)_PROXY environment variables for upstream calls.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pricempire.com".to_string(),
            route_prefix: "/api/pricempire".to_string(),
            user_agent: "AssetFlow/1.0".to_string(),
            timeout_secs: None,
            use_system_proxy: true,
        }
    }
}

/// Limits applied to inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [upstream]
            timeout_secs = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.timeout_secs, Some(15));
        assert_eq!(config.upstream.route_prefix, "/api/pricempire");
        assert_eq!(config.upstream.base_url, "https://api.pricempire.com");
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ProxyConfig = toml::from_str("").unwrap();
        assert_eq!(config.upstream.user_agent, "AssetFlow/1.0");
        assert_eq!(config.upstream.timeout_secs, None);
        assert_eq!(config.limits.max_body_size, 2 * 1024 * 1024);
    }
}
