//! Fixed-token credentials provider.

use async_trait::async_trait;

use crate::auth::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// Serves one set of credentials for the lifetime of the process.
///
/// Used by the command line, where the token comes from configuration.
/// Writes are rejected with [`CredentialsError::ReadOnly`].
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    credentials: Option<Credentials>,
}

impl StaticCredentials {
    /// A provider that never has a token.
    pub fn anonymous() -> Self {
        Self { credentials: None }
    }

    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// Build from an optional token, treating a blank token as absent.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => Self::new(Credentials::with_token(token)),
            None => Self::anonymous(),
        }
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        Ok(self.credentials.clone())
    }

    async fn save(&self, _creds: &Credentials) -> Result<(), CredentialsError> {
        Err(CredentialsError::ReadOnly)
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        Err(CredentialsError::ReadOnly)
    }
}
