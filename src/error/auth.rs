//! Authentication-related error types.
//!
//! Errors for missing or rejected credentials and role-based access checks.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// No token available (user not logged in).
    NotAuthenticated,

    /// The stored access token is past its expiry.
    TokenExpired,

    /// The server rejected the token (HTTP 401).
    Unauthorized { message: String },

    /// The user's role may not access the resource (HTTP 403).
    AccessDenied { resource: Option<String> },

    /// The credentials store could not be read or written.
    CredentialsUnavailable { message: String },
}

impl AuthError {
    /// Check if this error might be resolved by signing in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::TokenExpired | AuthError::Unauthorized { .. }
        )
    }

    /// Check if this error is recoverable (can retry or re-auth).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AuthError::AccessDenied { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotAuthenticated => "You are not signed in. Please sign in.".to_string(),
            AuthError::TokenExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AuthError::Unauthorized { .. } => {
                "Your session is no longer valid. Please sign in again.".to_string()
            }
            AuthError::AccessDenied { resource } => match resource {
                Some(res) => format!("Your role does not have access to {}.", res),
                None => "Your role does not have access to this page.".to_string(),
            },
            AuthError::CredentialsUnavailable { .. } => {
                "Could not read your saved sign-in. Please sign in again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::TokenExpired => "E_AUTH_TOKEN_EXP",
            AuthError::Unauthorized { .. } => "E_AUTH_UNAUTHORIZED",
            AuthError::AccessDenied { .. } => "E_AUTH_DENIED",
            AuthError::CredentialsUnavailable { .. } => "E_AUTH_CREDS",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::TokenExpired => write!(f, "Access token expired"),
            AuthError::Unauthorized { message } => {
                if message.is_empty() {
                    write!(f, "Unauthorized")
                } else {
                    write!(f, "Unauthorized: {}", message)
                }
            }
            AuthError::AccessDenied { resource } => match resource {
                Some(res) => write!(f, "Access denied to {}", res),
                None => write!(f, "Access denied"),
            },
            AuthError::CredentialsUnavailable { message } => {
                write!(f, "Credentials unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for AuthError {}
