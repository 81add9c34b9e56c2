//! Error handling for the dashboard client.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: network, auth and configuration errors
//! - **Unified Error Type**: [`DashError`] consolidates them
//! - **Error Context**: which call failed, attached with [`ResultExt`]
//!
//! # Example
//!
//! ```ignore
//! use campusboard::error::{DashResult, ErrorContext, ResultExt};
//!
//! async fn load(list: &mut PaginatedList<Project>) -> DashResult<()> {
//!     list.refresh(&client)
//!         .await
//!         .context(ErrorContext::new("load_projects").with_resource("projects"))
//! }
//! ```
//!
//! | Category | Raised for | Retryable |
//! |----------|------------|-----------|
//! | Connectivity | Connection refused, timeout, 408 | Yes |
//! | Session | Missing, expired or rejected token (401) | No |
//! | Forbidden | Role lacks access (403) | No |
//! | NotFound | 404, 410 | No |
//! | Validation | Other 4xx | No |
//! | Unavailable | 5xx, 429 | Yes |
//! | MalformedResponse | Undecodable body | No |
//! | Configuration | Bad base URL or env values | No |

mod auth;
mod category;
mod config;
mod context;
mod dash_error;
mod network;
mod result;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use dash_error::DashError;
pub use network::NetworkError;
pub use result::{DashResult, ResultExt};
