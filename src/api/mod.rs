//! Client for the dashboard REST API.
//!
//! - [`ApiClient`] - sends a [`RequestConfig`](crate::request::RequestConfig)
//!   with the bearer token attached and classifies failures
//! - [`ListQuery`] / [`PaginatedList`] - paged list endpoints driven by a
//!   [`PaginationState`](crate::pagination::PaginationState)

mod client;
mod list;

pub use client::ApiClient;
pub use list::{ListQuery, PageParams, PageResponse, PaginatedList};
