//! Result type alias for dashboard operations.

use super::context::ErrorContext;
use super::dash_error::DashError;

/// Type alias for Results using DashError.
pub type DashResult<T> = Result<T, DashError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> DashResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> DashResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<DashError>,
{
    fn context(self, ctx: ErrorContext) -> DashResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> DashResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, NetworkError};

    #[test]
    fn test_context_extension() {
        let result: DashResult<i32> = Err(DashError::Network(NetworkError::Cancelled));

        let err = result
            .context(ErrorContext::new("test_operation"))
            .unwrap_err();
        assert_eq!(err.context().unwrap().operation, "test_operation");
    }

    #[test]
    fn test_context_extension_preserves_ok() {
        let result: DashResult<i32> = Ok(42);
        assert_eq!(result.context(ErrorContext::new("op")).unwrap(), 42);
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let result: DashResult<i32> = Ok(42);
        let mut called = false;

        let with_ctx = result.with_context(|| {
            called = true;
            ErrorContext::new("test")
        });

        assert!(with_ctx.is_ok());
        assert!(!called);
    }

    #[test]
    fn test_with_context_on_error() {
        let result: DashResult<i32> = Err(DashError::Network(NetworkError::Cancelled));
        let mut called = false;

        let err = result
            .with_context(|| {
                called = true;
                ErrorContext::new("lazy_context")
            })
            .unwrap_err();

        assert!(called);
        assert_eq!(err.context().unwrap().operation, "lazy_context");
    }

    #[test]
    fn test_context_converts_domain_errors() {
        let result: Result<(), ConfigError> = Err(ConfigError::NotPositive("page size".into()));
        let err = result.context(ErrorContext::new("load_config")).unwrap_err();
        assert!(matches!(err.inner(), DashError::Config(_)));

        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("[");
        let err = result.context(ErrorContext::new("decode")).unwrap_err();
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }
}
