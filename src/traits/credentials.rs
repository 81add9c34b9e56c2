//! Credentials provider trait abstraction.
//!
//! Provides a trait-based abstraction over where the bearer token comes from,
//! enabling dependency injection and mocking in tests.

use async_trait::async_trait;

use crate::auth::Credentials;

/// Credentials operation errors.
#[derive(Debug, Clone)]
pub enum CredentialsError {
    /// Failed to load credentials
    LoadFailed(String),
    /// Failed to save credentials
    SaveFailed(String),
    /// Failed to clear credentials
    ClearFailed(String),
    /// Credentials not found
    NotFound,
    /// The provider does not accept writes
    ReadOnly,
    /// Other error
    Other(String),
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsError::LoadFailed(msg) => write!(f, "Failed to load credentials: {}", msg),
            CredentialsError::SaveFailed(msg) => write!(f, "Failed to save credentials: {}", msg),
            CredentialsError::ClearFailed(msg) => {
                write!(f, "Failed to clear credentials: {}", msg)
            }
            CredentialsError::NotFound => write!(f, "Credentials not found"),
            CredentialsError::ReadOnly => write!(f, "Credentials provider is read-only"),
            CredentialsError::Other(msg) => write!(f, "Credentials error: {}", msg),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Trait for credentials storage and retrieval.
///
/// The API mutator asks its provider for the current token before every
/// request. Implementations include a fixed token from configuration and an
/// in-memory store that a login screen can update.
///
/// # Example
///
/// ```ignore
/// use campusboard::traits::{CredentialsError, CredentialsProvider};
///
/// async fn current_token<P: CredentialsProvider>(
///     provider: &P,
/// ) -> Result<Option<String>, CredentialsError> {
///     Ok(provider
///         .load()
///         .await?
///         .and_then(|creds| creds.bearer_token().map(str::to_string)))
/// }
/// ```
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load credentials from storage.
    ///
    /// # Returns
    /// - `Ok(Some(credentials))` if credentials exist and were loaded successfully
    /// - `Ok(None)` if no credentials are stored
    /// - `Err(error)` if loading failed
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;

    /// Save credentials to storage.
    ///
    /// # Arguments
    /// * `creds` - The credentials to save
    ///
    /// # Returns
    /// Ok(()) on success, or an error if saving failed
    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError>;

    /// Clear all stored credentials.
    ///
    /// # Returns
    /// Ok(()) on success, or an error if clearing failed
    async fn clear(&self) -> Result<(), CredentialsError>;
}

#[async_trait]
impl<P: CredentialsProvider + ?Sized> CredentialsProvider for std::sync::Arc<P> {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        (**self).load().await
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        (**self).save(creds).await
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        (**self).clear().await
    }
}
