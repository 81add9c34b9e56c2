//! Configuration error types.

use thiserror::Error;

/// Errors raised while building [`ApiConfig`](crate::config::ApiConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("{0} must be at least 1")]
    NotPositive(String),
}

impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::InvalidBaseUrl(_) => "E_CFG_URL",
            ConfigError::NotPositive(_) => "E_CFG_RANGE",
        }
    }
}
