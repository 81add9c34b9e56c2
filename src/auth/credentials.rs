//! Session credentials for the dashboard API.
//!
//! Only the token needed for bearer authentication and the signed-in user's
//! identity are modelled here; obtaining and persisting them is left to the
//! [`CredentialsProvider`](crate::traits::CredentialsProvider) in use.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Authentication credentials for the dashboard API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    /// Access token sent as `Authorization: Bearer <token>`.
    pub access_token: Option<String>,
    /// Token expiration time as Unix timestamp (seconds since epoch).
    pub expires_at: Option<i64>,
    /// The authenticated user's ID.
    pub user_id: Option<String>,
    /// The authenticated user's dashboard role.
    pub role: Option<Role>,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials holding only an access token that never expires.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Check if the credentials have a non-blank access token.
    pub fn has_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Check if the token is expired.
    ///
    /// A token without an expiration time is treated as non-expiring; the
    /// server has the final word through a 401.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => chrono::Utc::now().timestamp() >= expires_at,
            None => false,
        }
    }

    /// The token to send, if there is a usable one.
    pub fn bearer_token(&self) -> Option<&str> {
        if self.has_token() && !self.is_expired() {
            self.access_token.as_deref().map(str::trim)
        } else {
            None
        }
    }
}
