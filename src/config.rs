//! API client configuration.
//!
//! Use the builder methods to customize a config, or [`ApiConfig::from_env`]
//! to read the `CAMPUSBOARD_*` environment variables.
//!
//! # Example
//!
//! ```
//! use campusboard::config::ApiConfig;
//!
//! let config = ApiConfig::default()
//!     .with_base_url("https://dashboard.example.edu/api")
//!     .with_default_page_size(10);
//! assert_eq!(config.default_page_size, 10);
//! ```

use std::str::FromStr;
use std::time::Duration;

use crate::api::PageParams;
use crate::error::ConfigError;
use crate::pagination::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "CAMPUSBOARD_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "CAMPUSBOARD_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "CAMPUSBOARD_PAGE_SIZE";
pub const ENV_PAGE_PARAM: &str = "CAMPUSBOARD_PAGE_PARAM";
pub const ENV_PAGE_SIZE_PARAM: &str = "CAMPUSBOARD_PAGE_SIZE_PARAM";
pub const ENV_ZERO_BASED_PAGES: &str = "CAMPUSBOARD_ZERO_BASED_PAGES";
pub const ENV_TOKEN: &str = "CAMPUSBOARD_TOKEN";

/// Settings for talking to the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every relative request path is joined to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Page size new list views start with
    pub default_page_size: u64,
    /// Paging query-parameter names
    pub page_params: PageParams,
    /// Bearer token, if one was configured
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_params: PageParams::default(),
            access_token: None,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_page_params(mut self, params: PageParams) -> Self {
        self.page_params = params;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset and blank values keep
    /// their defaults; values that fail to parse are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_value(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = get(ENV_PAGE_SIZE) {
            config.default_page_size = parse_value(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(key) = get(ENV_PAGE_PARAM) {
            config.page_params.page_key = key;
        }
        if let Some(key) = get(ENV_PAGE_SIZE_PARAM) {
            config.page_params.page_size_key = key;
        }
        if let Some(raw) = get(ENV_ZERO_BASED_PAGES) {
            config.page_params.zero_based = parse_bool(ENV_ZERO_BASED_PAGES, &raw)?;
        }
        config.access_token = get(ENV_TOKEN);

        config.validate()?;
        Ok(config)
    }

    /// Check the values a client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lower = self.base_url.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::NotPositive(ENV_TIMEOUT_SECS.to_string()));
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::NotPositive(ENV_PAGE_SIZE.to_string()));
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| ConfigError::invalid_value(key, raw, e))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_value(key, raw, "expected true or false")),
    }
}
