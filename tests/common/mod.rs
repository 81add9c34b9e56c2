//! Common test utilities for integration tests.
//!
//! Fixtures for credentials and list payloads, plus a client pointed at a
//! wiremock server.
//!
//! ```ignore
//! let server = MockServer::start().await;
//! mount_page(&server, "/projects", 1, 5, page_body(projects(1..=5), 12)).await;
//! let client = api_client(&server, Some(TEST_TOKEN));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use campusboard::adapters::mock::InMemoryCredentials;
use campusboard::adapters::ReqwestHttpClient;
use campusboard::api::ApiClient;
use campusboard::auth::Credentials;
use campusboard::models::Role;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token-12345";

/// Credentials that won't expire during test execution.
pub fn test_credentials() -> Credentials {
    Credentials {
        access_token: Some(TEST_TOKEN.to_string()),
        expires_at: Some(i64::MAX),
        user_id: Some("test-user-id".to_string()),
        role: Some(Role::Mentor),
    }
}

/// Credentials whose token expired at the epoch.
pub fn expired_credentials() -> Credentials {
    Credentials {
        access_token: Some("expired-access-token".to_string()),
        expires_at: Some(0),
        user_id: Some("test-user-id".to_string()),
        role: Some(Role::Student),
    }
}

pub type TestClient = ApiClient<ReqwestHttpClient, InMemoryCredentials>;

/// A reqwest-backed client for `server`'s `/api` prefix.
pub fn api_client(server: &MockServer, token: Option<&str>) -> TestClient {
    let credentials = match token {
        Some(token) => InMemoryCredentials::with_token(token),
        None => InMemoryCredentials::new(),
    };
    api_client_with(server, credentials)
}

pub fn api_client_with(server: &MockServer, credentials: InMemoryCredentials) -> TestClient {
    ApiClient::new(
        ReqwestHttpClient::new(),
        credentials,
        format!("{}/api", server.uri()),
    )
}

/// A client whose base URL points at a local port with nothing listening.
///
/// The port is taken from a listener that is closed again before returning.
pub fn unreachable_client() -> TestClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    ApiClient::new(
        ReqwestHttpClient::new(),
        InMemoryCredentials::new(),
        format!("http://127.0.0.1:{}/api", port),
    )
}
