//! Where the prediction service lives and how long to wait for it.
//!
//! Values come from the process environment, falling back to the value baked
//! in at compile time (useful for web builds), then to the local dev server.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const API_URL_ENV: &str = "WINDBREAKER_API_URL";
pub const API_TIMEOUT_ENV: &str = "WINDBREAKER_API_TIMEOUT_SECS";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid API URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API URL '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("invalid timeout '{0}', expected whole seconds")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("WINDBREAKER_API_URL").map(str::to_string));
        let timeout = std::env::var(API_TIMEOUT_ENV).ok();
        Self::from_values(url.as_deref(), timeout.as_deref())
    }

    pub fn from_values(url: Option<&str>, timeout: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match url.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::with_base_url(value)?,
            None => Self::default(),
        };
        if let Some(raw) = timeout.map(str::trim).filter(|value| !value.is_empty()) {
            let secs = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Parses `base` and ensures a trailing slash so relative joins keep any path prefix.
fn normalize_base_url(base: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(base).map_err(|source| ConfigError::InvalidUrl {
        value: base.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(base.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_dev_server() {
        let config = ClientConfig::from_values(None, None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = ClientConfig::from_values(Some("  "), Some("")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn path_prefix_gets_trailing_slash() {
        let config = ClientConfig::with_base_url("https://example.com/windbreaker").unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.com/windbreaker/");
        assert_eq!(
            config.base_url.join("api/login").unwrap().as_str(),
            "https://example.com/windbreaker/api/login"
        );
    }

    #[test]
    fn rejects_bad_urls_and_timeouts() {
        assert!(matches!(
            ClientConfig::with_base_url("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::with_base_url("ftp://example.com/"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert_eq!(
            ClientConfig::from_values(None, Some("soon")),
            Err(ConfigError::InvalidTimeout("soon".into()))
        );
    }

    #[test]
    fn timeout_in_seconds() {
        let config = ClientConfig::from_values(Some("http://localhost:9000"), Some("5")).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/");
    }
}
