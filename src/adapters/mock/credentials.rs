//! In-memory credentials provider.
//!
//! Holds the session in memory only. Tests use the failure switches to
//! exercise error paths; front ends can use it as the live session store a
//! login screen writes into.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

/// In-memory credentials provider.
///
/// Clones share the same storage, so a clone handed to an
/// [`ApiClient`](crate::api::ApiClient) sees tokens saved through the
/// original.
///
/// # Example
///
/// ```ignore
/// use campusboard::adapters::InMemoryCredentials;
/// use campusboard::auth::Credentials;
/// use campusboard::traits::CredentialsProvider;
///
/// let provider = InMemoryCredentials::new();
/// assert!(provider.load().await?.is_none());
///
/// provider.save(&Credentials::with_token("t0k3n")).await?;
/// let loaded = provider.load().await?.unwrap();
/// assert_eq!(loaded.bearer_token(), Some("t0k3n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    /// Stored credentials
    credentials: Arc<Mutex<Option<Credentials>>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentials {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with initial credentials.
    pub fn with_credentials(creds: Credentials) -> Self {
        let provider = Self::new();
        provider.set_credentials(Some(creds));
        provider
    }

    /// Create a provider holding a bare access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::with_token(token))
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *lock(&self.load_should_fail) = should_fail;
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *lock(&self.save_should_fail) = should_fail;
    }

    /// Get the current credentials synchronously.
    pub fn get_credentials(&self) -> Option<Credentials> {
        lock(&self.credentials).clone()
    }

    /// Set credentials synchronously.
    pub fn set_credentials(&self, creds: Option<Credentials>) {
        *lock(&self.credentials) = creds;
    }
}

/// Lock a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        if *lock(&self.load_should_fail) {
            return Err(CredentialsError::LoadFailed("Mock load failure".to_string()));
        }

        Ok(lock(&self.credentials).clone())
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        if *lock(&self.save_should_fail) {
            return Err(CredentialsError::SaveFailed("Mock save failure".to_string()));
        }

        *lock(&self.credentials) = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        *lock(&self.credentials) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_new_is_empty() {
        let provider = InMemoryCredentials::new();
        assert!(provider.get_credentials().is_none());
    }

    #[test]
    fn test_with_token() {
        let provider = InMemoryCredentials::with_token("initial-token");
        let loaded = provider.get_credentials().unwrap();
        assert_eq!(loaded.bearer_token(), Some("initial-token"));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let provider = InMemoryCredentials::new();

        let creds = Credentials {
            access_token: Some("test-token".to_string()),
            expires_at: Some(9999999999),
            user_id: Some("user-123".to_string()),
            role: Some(Role::Student),
        };

        provider.save(&creds).await.unwrap();

        let loaded = provider.load().await.unwrap().unwrap();
        assert_eq!(loaded, creds);
    }

    #[tokio::test]
    async fn test_clear() {
        let provider = InMemoryCredentials::with_token("test-token");
        assert!(provider.load().await.unwrap().is_some());

        provider.clear().await.unwrap();
        assert!(provider.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_failure() {
        let provider = InMemoryCredentials::new();
        provider.set_load_should_fail(true);

        let result = provider.load().await;
        assert!(matches!(result, Err(CredentialsError::LoadFailed(_))));
    }

    #[tokio::test]
    async fn test_save_failure() {
        let provider = InMemoryCredentials::new();
        provider.set_save_should_fail(true);

        let result = provider.save(&Credentials::default()).await;
        assert!(matches!(result, Err(CredentialsError::SaveFailed(_))));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let provider = InMemoryCredentials::new();
        let cloned = provider.clone();

        provider
            .save(&Credentials::with_token("shared-token"))
            .await
            .unwrap();

        let loaded = cloned.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token.as_deref(), Some("shared-token"));
    }
}
