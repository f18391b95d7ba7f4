//! Common types used throughout sepm-machines
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One machine entry as returned by the server.
///
/// Records are opaque: the client passes them through verbatim and never
/// interprets their schema.
pub type Record = JsonObject;

// ============================================================================
// Proxy Configuration
// ============================================================================

/// Proxy routing for outbound requests.
///
/// Matches the CLI's `--proxies` JSON value:
/// `{"http": "http://proxy:3128", "https": "http://proxy:3128"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy URL for http:// destinations
    #[serde(default)]
    pub http: Option<String>,
    /// Proxy URL for https:// destinations
    #[serde(default)]
    pub https: Option<String>,
}

impl ProxyConfig {
    /// True when no proxy URL is configured at all
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_config_deserialize() {
        let config: ProxyConfig =
            serde_json::from_str(r#"{"http": "http://proxy:3128", "https": "http://proxy:3129"}"#)
                .unwrap();
        assert_eq!(config.http, Some("http://proxy:3128".to_string()));
        assert_eq!(config.https, Some("http://proxy:3129".to_string()));
        assert!(!config.is_empty());
    }

    #[test]
    fn test_proxy_config_partial() {
        let config: ProxyConfig = serde_json::from_str(r#"{"https": "http://proxy:3128"}"#).unwrap();
        assert!(config.http.is_none());
        assert_eq!(config.https, Some("http://proxy:3128".to_string()));
    }

    #[test]
    fn test_proxy_config_empty() {
        let config = ProxyConfig::default();
        assert!(config.is_empty());
    }
}
