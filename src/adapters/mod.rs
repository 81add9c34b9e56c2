//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`StaticCredentials`] - Fixed token, typically from configuration
//!
//! # Mock and in-memory implementations
//!
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryCredentials`] - In-memory credential storage

pub mod mock;
pub mod reqwest_http;
pub mod static_credentials;

pub use mock::{InMemoryCredentials, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
pub use static_credentials::StaticCredentials;
