//! Client configuration: base URL and request timeout.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Root of the public NoasaCrypto deployment.
pub const DEFAULT_BASE_URL: &str = "https://noasacrypto.vercel.app";

/// Timeout applied to each request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Settings fixed at client construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint root. Trailing slashes are stripped when the client is built.
    pub base_url: String,
    /// Per-request timeout. Must be non-zero.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Overrides the endpoint root.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the request timeout, in milliseconds.
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Returns a copy with the base URL normalized, or an error if the
    /// configuration cannot be used.
    pub(crate) fn validated(&self) -> Result<Self, Error> {
        let base_url = self.base_url.trim_end_matches('/');
        let parsed = Url::parse(base_url).map_err(|e| {
            Error::InvalidConfig(format!("base URL {:?} is not a valid URL: {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "base URL {:?} must use http or https",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be positive".to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://noasacrypto.vercel.app");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientConfig::default()
            .with_base_url("https://example.com//")
            .validated()
            .unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn path_prefix_is_kept() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/proxy/")
            .validated()
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/proxy");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ClientConfig::default().with_timeout_ms(0).validated();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let result = ClientConfig::default().with_base_url("not a url").validated();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = ClientConfig::default()
            .with_base_url("ftp://example.com")
            .validated();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
