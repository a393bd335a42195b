//! Gateway configuration.
//!
//! All configuration is passed programmatically at construction time; the
//! SDK reads no environment variables and keeps no global state.

use serde::{Deserialize, Serialize};

/// Default root URL of the O2Pay HTTP API.
pub const BASE_URL: &str = "https://api.o2pay.co/api";

/// Versioned path segment of the gateway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "v1")]
    V1,
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
        }
    }
}

/// Merchant configuration for API access.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unique merchant identifier.
    pub merchant_id: String,
    /// Static API token sent in the `X-O2PAY-TOKEN` header.
    pub token: String,
    /// API version used in endpoint paths.
    pub version: ApiVersion,
    /// Root URL of the gateway API, [`BASE_URL`] unless overridden.
    pub base_url: String,
}

impl Config {
    /// Create a new `Config` with the default API version and base URL.
    pub fn new(merchant_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            token: token.into(),
            version: ApiVersion::default(),
            base_url: BASE_URL.to_owned(),
        }
    }

    /// Select a specific API version.
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Point the SDK at a different gateway host (e.g. a staging
    /// deployment).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_renders_path_segment() {
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert_eq!(
            serde_json::to_string(&ApiVersion::V1).unwrap(),
            "\"v1\""
        );
    }

    #[test]
    fn config_defaults() {
        let config = Config::new("M1", "T1");
        assert_eq!(config.version, ApiVersion::V1);
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn config_overrides() {
        let config = Config::new("M1", "T1").with_base_url("http://localhost:8080/api");
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }
}
