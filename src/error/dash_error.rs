//! Unified error type for the dashboard client.
//!
//! `DashError` unifies the domain-specific error types so callers get one
//! error to categorize, log and show.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::network::NetworkError;
use crate::traits::CredentialsError;

/// Unified error type for API and configuration failures.
#[derive(Debug, Clone)]
pub enum DashError {
    /// Transport, HTTP status and decoding errors.
    Network(NetworkError),

    /// Authentication/authorization errors.
    Auth(AuthError),

    /// Invalid configuration.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<DashError>,
        context: ErrorContext,
    },
}

impl DashError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::Network(err) => match err {
                NetworkError::HttpStatus { status, .. } => ErrorCategory::for_status(*status),
                NetworkError::RateLimited { .. } => ErrorCategory::Unavailable,
                NetworkError::InvalidResponse { .. } => ErrorCategory::MalformedResponse,
                NetworkError::InvalidUrl { .. } => ErrorCategory::Configuration,
                _ => ErrorCategory::Connectivity,
            },
            DashError::Auth(AuthError::AccessDenied { .. }) => ErrorCategory::Forbidden,
            DashError::Auth(_) => ErrorCategory::Session,
            DashError::Config(_) => ErrorCategory::Configuration,
            DashError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DashError::Network(err) => err.is_retryable(),
            DashError::Auth(_) => false,
            DashError::Config(_) => false,
            DashError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DashError::Network(err) => err.user_message(),
            DashError::Auth(err) => err.user_message(),
            DashError::Config(err) => format!("Configuration error: {}", err),
            DashError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DashError::Network(err) => err.error_code(),
            DashError::Auth(err) => err.error_code(),
            DashError::Config(err) => err.error_code(),
            DashError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        DashError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the outermost context, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DashError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &DashError {
        match self {
            DashError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Check if this error requires signing in again.
    pub fn requires_reauth(&self) -> bool {
        match self.inner() {
            DashError::Auth(err) => err.requires_reauth(),
            _ => false,
        }
    }

    /// Check if the request was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.inner(), DashError::Network(NetworkError::Cancelled))
    }

    /// HTTP status behind this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self.inner() {
            DashError::Network(NetworkError::HttpStatus { status, .. }) => Some(*status),
            DashError::Network(NetworkError::RateLimited { .. }) => Some(429),
            DashError::Auth(AuthError::Unauthorized { .. }) => Some(401),
            DashError::Auth(AuthError::AccessDenied { .. }) => Some(403),
            _ => None,
        }
    }
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Network(err) => write!(f, "{}", err),
            DashError::Auth(err) => write!(f, "{}", err),
            DashError::Config(err) => write!(f, "{}", err),
            DashError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Network(err) => Some(err),
            DashError::Auth(err) => Some(err),
            DashError::Config(err) => Some(err),
            DashError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for DashError {
    fn from(err: NetworkError) -> Self {
        DashError::Network(err)
    }
}

impl From<AuthError> for DashError {
    fn from(err: AuthError) -> Self {
        DashError::Auth(err)
    }
}

impl From<ConfigError> for DashError {
    fn from(err: ConfigError) -> Self {
        DashError::Config(err)
    }
}

impl From<CredentialsError> for DashError {
    fn from(err: CredentialsError) -> Self {
        DashError::Auth(AuthError::CredentialsUnavailable {
            message: err.to_string(),
        })
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
