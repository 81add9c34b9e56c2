//! Authentication state for API calls.
//!
//! The dashboard authenticates every request with a bearer token. This
//! module holds the [`Credentials`] shape; providers live behind
//! [`crate::traits::CredentialsProvider`].

pub mod credentials;

pub use credentials::Credentials;
