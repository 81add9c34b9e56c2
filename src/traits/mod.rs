//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - Sends resolved HTTP requests
//! - [`CredentialsProvider`] - Supplies the session credentials

pub mod credentials;
pub mod http;

pub use credentials::{CredentialsError, CredentialsProvider};
pub use http::{Headers, HttpClient, HttpError, HttpRequest, Response};
