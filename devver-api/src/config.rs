//! Client configuration.
//!
//! Every request targets one backend origin with one base path prefix, and
//! tokens are requested for one fixed resource indicator. Configuration is
//! loaded from environment variables with defaults for local development.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Devver API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the API prefix (e.g. "https://api.devver.dev/api/v1").
    pub base_url: String,

    /// Resource indicator passed to the token provider (the API audience,
    /// distinct from any tenant id).
    pub resource_indicator: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/v1".to_string(),
            resource_indicator: "http://localhost:3000/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEVVER_API_BASE_URL`: Backend base URL (default: http://localhost:3000/api/v1)
    /// - `DEVVER_API_RESOURCE`: Token resource indicator (default: the base URL)
    /// - `DEVVER_API_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let default = Self::default();

        let base_url = std::env::var("DEVVER_API_BASE_URL").unwrap_or(default.base_url);
        let resource_indicator =
            std::env::var("DEVVER_API_RESOURCE").unwrap_or_else(|_| base_url.clone());

        Self {
            base_url,
            resource_indicator,
            timeout_secs: std::env::var("DEVVER_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
        }
    }

    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, config.resource_indicator);
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig {
            base_url: "https://api.devver.dev/api/v1".to_string(),
            ..ApiConfig::default()
        };

        assert_eq!(
            config.url("/projects"),
            "https://api.devver.dev/api/v1/projects"
        );
        assert_eq!(
            config.url("projects"),
            "https://api.devver.dev/api/v1/projects"
        );
    }

    #[test]
    fn test_url_join_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.devver.dev/api/v1/".to_string(),
            ..ApiConfig::default()
        };

        assert_eq!(
            config.url("/organizations/members"),
            "https://api.devver.dev/api/v1/organizations/members"
        );
    }
}
