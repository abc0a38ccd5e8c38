//! API client configuration.
//!
//! Configuration values should be provided by the embedding application,
//! not hardcoded. `from_env` exists for shells that configure through the
//! environment.

use std::time::Duration;

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the StudyHub API (e.g., "https://api.studyhub.example").
    ///
    /// Request paths are appended to this, so it must not end with `/`.
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl ApiConfig {
    /// Environment variable holding the API base URL.
    pub const ENV_BASE_URL: &'static str = "STUDYHUB_API_URL";

    /// Environment variable holding the request timeout in seconds.
    pub const ENV_TIMEOUT_SECS: &'static str = "STUDYHUB_API_TIMEOUT_SECS";

    /// Create a new configuration for the given base URL.
    ///
    /// A trailing slash is stripped so callers can pass either form.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build configuration from the environment.
    ///
    /// Reads [`Self::ENV_BASE_URL`] (required) and
    /// [`Self::ENV_TIMEOUT_SECS`] (optional, default 30).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`](crate::ApiError::Config) if the base URL
    /// variable is unset.
    pub fn from_env() -> crate::Result<Self> {
        let base_url = std::env::var(Self::ENV_BASE_URL).map_err(|_| {
            crate::ApiError::Config(format!("{} environment variable not set", Self::ENV_BASE_URL))
        })?;

        let timeout_secs = std::env::var(Self::ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        Ok(Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs)))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = ApiConfig::new("https://api.studyhub.example/");
        assert_eq!(config.base_url, "https://api.studyhub.example");

        let config = ApiConfig::new("https://api.studyhub.example");
        assert_eq!(config.base_url, "https://api.studyhub.example");
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ApiConfig::new("http://localhost:4000").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
