//! Backend endpoint configuration.
//!
//! The base URL is resolved once at process start and shared by all three
//! endpoints; there is no per-call override.

/// Environment variable for the backend base URL
pub const API_URL_ENV: &str = "SHELFLIFE_API_URL";

/// Environment variable for the request timeout in seconds
pub const API_TIMEOUT_ENV: &str = "SHELFLIFE_API_TIMEOUT_SECS";

/// Default backend when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request time ceiling in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved backend configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Build from explicit values, normalizing the URL
    pub fn from_parts(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self {
            base_url: url,
            timeout_secs,
        }
    }

    /// Resolve from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = std::env::var(API_TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::from_parts(base_url, timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_parts(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::from_parts("http://backend:9000///", 10);
        assert_eq!(config.base_url, "http://backend:9000");
        assert_eq!(config.timeout_secs, 10);
    }
}
