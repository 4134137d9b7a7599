//! Client configuration
//!
//! Configuration can be built in code or loaded from YAML. Every field has a
//! serde default so a partial file only overrides what it names.

use crate::error::{Error, Result};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the current XML API
    #[serde(default = "default_xml2_base_url")]
    pub xml2_base_url: String,

    /// Base URL of the legacy XML API (geeklists)
    #[serde(default = "default_xml1_base_url")]
    pub xml1_base_url: String,

    /// Site root, where the sitemap index lives
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// How unrecognized enumeration values are mapped
    #[serde(default)]
    pub enum_policy: EnumPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            xml2_base_url: default_xml2_base_url(),
            xml1_base_url: default_xml1_base_url(),
            site_base_url: default_site_base_url(),
            http: HttpConfig::default(),
            enum_policy: EnumPolicy::default(),
        }
    }
}

fn default_xml2_base_url() -> String {
    "https://boardgamegeek.com/xmlapi2".to_string()
}

fn default_xml1_base_url() -> String {
    "https://boardgamegeek.com/xmlapi".to_string()
}

fn default_site_base_url() -> String {
    "https://boardgamegeek.com".to_string()
}

impl ClientConfig {
    /// Parse a configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Point all three base URLs at one host, e.g. a mock server
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/');
        self.xml2_base_url = format!("{base}/xmlapi2");
        self.xml1_base_url = format!("{base}/xmlapi");
        self.site_base_url = base.to_string();
        self
    }

    /// Set the enum policy
    #[must_use]
    pub fn with_enum_policy(mut self, policy: EnumPolicy) -> Self {
        self.enum_policy = policy;
        self
    }

    /// Check the base URLs parse
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("xml2_base_url", &self.xml2_base_url),
            ("xml1_base_url", &self.xml1_base_url),
            ("site_base_url", &self.site_base_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| Error::config(format!("{field} '{value}' is not a valid URL: {e}")))?;
        }
        if self.http.max_concurrent_requests == 0 {
            return Err(Error::config("http.max_concurrent_requests must be at least 1"));
        }
        if self.http.rate_limit.enabled && self.http.rate_limit.requests == 0 {
            return Err(Error::config("rate_limit.requests must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Enum Policy
// ============================================================================

/// Policy applied when a document carries an enumeration value the client
/// does not recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumPolicy {
    /// Keep the raw value in the `Unknown` variant
    #[default]
    Tolerant,
    /// Fail mapping with `UnknownEnumValue`
    Strict,
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// HTTP status codes to retry on
    #[serde(default = "default_retry_statuses")]
    pub retry_statuses: Vec<u16>,

    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Requests allowed in flight at once; further fetches queue
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_statuses: default_retry_statuses(),
            user_agent: default_user_agent(),
            max_concurrent_requests: default_max_concurrent_requests(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_statuses() -> Vec<u16> {
    vec![202, 429, 500, 502, 503, 504]
}

fn default_user_agent() -> String {
    format!("bgg-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_concurrent_requests() -> usize {
    10
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    60_000
}

/// Request-window rate limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether requests are throttled at all
    #[serde(default = "default_rate_limit_enabled")]
    pub enabled: bool,

    /// Requests allowed per window
    #[serde(default = "default_rate_limit_requests")]
    pub requests: u32,

    /// Window length in seconds
    #[serde(default = "default_rate_limit_window")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_rate_limit_enabled(),
            requests: default_rate_limit_requests(),
            window_seconds: default_rate_limit_window(),
        }
    }
}

fn default_rate_limit_enabled() -> bool {
    true
}

fn default_rate_limit_requests() -> u32 {
    60
}

fn default_rate_limit_window() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.xml2_base_url, "https://boardgamegeek.com/xmlapi2");
        assert_eq!(config.xml1_base_url, "https://boardgamegeek.com/xmlapi");
        assert_eq!(config.enum_policy, EnumPolicy::Tolerant);
        assert_eq!(config.http.max_retries, 5);
        assert!(config.http.retry_statuses.contains(&202));
        assert!(config.http.rate_limit.enabled);
        assert_eq!(config.http.max_concurrent_requests, 10);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = ClientConfig::from_yaml_str("http:\n  max_concurrent_requests: 0").unwrap_err();
        assert!(err.to_string().contains("max_concurrent_requests"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r"
enum_policy: strict
http:
  timeout_seconds: 5
  retry_backoff:
    type: linear
    initial_ms: 10
  rate_limit:
    enabled: false
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.enum_policy, EnumPolicy::Strict);
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.http.max_retries, 5);
        assert_eq!(config.http.retry_backoff.backoff_type, BackoffType::Linear);
        assert_eq!(config.http.retry_backoff.initial_ms, 10);
        assert_eq!(config.http.retry_backoff.max_ms, 60_000);
        assert!(!config.http.rate_limit.enabled);
        assert_eq!(config.xml2_base_url, "https://boardgamegeek.com/xmlapi2");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ClientConfig::from_yaml_str("xml2_base_url: not a url").unwrap_err();
        assert!(err.to_string().contains("xml2_base_url"));
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.xml2_base_url, "http://127.0.0.1:8080/xmlapi2");
        assert_eq!(config.xml1_base_url, "http://127.0.0.1:8080/xmlapi");
        assert_eq!(config.site_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http:\n  max_retries: 1").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.http.max_retries, 1);

        assert!(ClientConfig::from_file("/definitely/not/here.yaml").is_err());
    }
}
