//! Mock and in-memory implementations of the trait abstractions.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryCredentials`] - In-memory credential storage

pub mod credentials;
pub mod http;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse};
