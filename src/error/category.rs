//! What a list view should do about a failed request.
//!
//! [`DashError::category`](super::DashError::category) maps every failure
//! onto one of these. Table views branch on the category: retry, send the
//! user back to sign-in, or show a message and leave the page as it was.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The API could not be reached, or the request timed out.
    Connectivity,
    /// No session, an expired one, or a token the server rejected.
    Session,
    /// The signed-in role may not see this resource.
    Forbidden,
    /// The endpoint or record does not exist.
    NotFound,
    /// The server rejected the request's parameters or filters.
    Validation,
    /// The backend is failing or throttling.
    Unavailable,
    /// The server answered with a body that does not decode.
    MalformedResponse,
    /// Local settings cannot work (base URL, env values).
    Configuration,
}

impl ErrorCategory {
    /// Category for a non-2xx HTTP status.
    ///
    /// ```
    /// use campusboard::error::ErrorCategory;
    ///
    /// assert_eq!(ErrorCategory::for_status(404), ErrorCategory::NotFound);
    /// assert_eq!(ErrorCategory::for_status(429), ErrorCategory::Unavailable);
    /// assert_eq!(ErrorCategory::for_status(422), ErrorCategory::Validation);
    /// ```
    pub fn for_status(status: u16) -> Self {
        match status {
            401 => ErrorCategory::Session,
            403 => ErrorCategory::Forbidden,
            404 | 410 => ErrorCategory::NotFound,
            408 => ErrorCategory::Connectivity,
            429 | 500..=599 => ErrorCategory::Unavailable,
            _ => ErrorCategory::Validation,
        }
    }

    /// Whether repeating the same request later can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Connectivity | ErrorCategory::Unavailable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Connectivity => "connectivity",
            ErrorCategory::Session => "session",
            ErrorCategory::Forbidden => "forbidden",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Unavailable => "unavailable",
            ErrorCategory::MalformedResponse => "malformed_response",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// One-line hint shown under the error toast or CLI message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Connectivity => {
                "Check that the dashboard API is reachable and try again"
            }
            ErrorCategory::Session => "Sign in again to continue",
            ErrorCategory::Forbidden => {
                "Your role cannot open this list. Ask an administrator for access"
            }
            ErrorCategory::NotFound => "The record may have been removed. Reload the list",
            ErrorCategory::Validation => "Adjust the filters or page size and try again",
            ErrorCategory::Unavailable => "The dashboard is busy or down. Try again in a moment",
            ErrorCategory::MalformedResponse => {
                "The server sent an unexpected response. Report this if it keeps happening"
            }
            ErrorCategory::Configuration => "Check the CAMPUSBOARD_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
