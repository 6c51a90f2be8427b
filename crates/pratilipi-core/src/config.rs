//! Location of the translation service.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable holding the API base URL.
///
/// The web build reads it at compile time, the CLI at run time.
pub const API_URL_ENV: &str = "PRATILIPI_API_URL";

/// Errors from parsing a configured base URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The URL does not use `http` or `https`.
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),

    /// Nothing follows the scheme.
    #[error("API base URL has no host: {0:?}")]
    MissingHost(String),
}

/// Where to send translation requests.
///
/// The base URL is stored without trailing slashes so endpoint paths
/// can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Parse a base URL such as `https://api.example.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedScheme`] for anything other than
    /// `http://` or `https://`, and [`ConfigError::MissingHost`] when the
    /// scheme is all there is.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let raw = base_url.trim();
        let rest = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::UnsupportedScheme(base_url.to_owned()))?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::MissingHost(base_url.to_owned()));
        }
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_owned(),
        })
    }

    /// Build from an optional environment value.
    ///
    /// An unset or blank value yields [`DEFAULT_API_BASE`].
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new) for a non-blank value.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Ok(Self::default()),
        }
    }

    /// The base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` endpoint that translates an uploaded PDF.
    #[must_use]
    pub fn translate_url(&self) -> String {
        format!("{}/translate-pdf/", self.base_url)
    }

    /// `GET` endpoint reporting service health.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl TryFrom<String> for ApiConfig {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ApiConfig> for String {
    fn from(config: ApiConfig) -> Self {
        config.base_url
    }
}
