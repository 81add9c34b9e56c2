//! Error context for enriched error information.
//!
//! Context records which API call failed so logs and the CLI can point at it.

use chrono::{DateTime, Utc};

use crate::request::Method;

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// `METHOD url` of the request, if the error came from an API call.
    pub endpoint: Option<String>,

    /// Resource name (`projects`, `tasks`, ...) the call targeted.
    pub resource: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Number of retry attempts made before this error.
    pub retry_count: u32,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            endpoint: None,
            resource: None,
            timestamp: Utc::now(),
            retry_count: 0,
        }
    }

    /// Record the request that failed.
    pub fn with_endpoint(mut self, method: Method, url: impl AsRef<str>) -> Self {
        self.endpoint = Some(format!("{} {}", method, url.as_ref()));
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    /// Increment the retry count and return a new context.
    pub fn next_retry(&self) -> Self {
        Self {
            timestamp: Utc::now(),
            retry_count: self.retry_count + 1,
            ..self.clone()
        }
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }

        if let Some(ref endpoint) = self.endpoint {
            parts.push(format!("endpoint=\"{}\"", endpoint));
        }

        if self.retry_count > 0 {
            parts.push(format!("retry_count={}", self.retry_count));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref endpoint) = self.endpoint {
            write!(f, " {}", endpoint)?;
        }

        if self.retry_count > 0 {
            write!(f, " retry={}", self.retry_count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = ErrorContext::new("list_projects");

        assert_eq!(ctx.operation, "list_projects");
        assert!(ctx.endpoint.is_none());
        assert!(ctx.resource.is_none());
        assert_eq!(ctx.retry_count, 0);
    }

    #[test]
    fn test_context_builder_pattern() {
        let ctx = ErrorContext::new("fetch_page")
            .with_endpoint(Method::Get, "http://h/api/tasks?page=2")
            .with_resource("tasks")
            .with_retry_count(2);

        assert_eq!(
            ctx.endpoint.as_deref(),
            Some("GET http://h/api/tasks?page=2")
        );
        assert_eq!(ctx.resource.as_deref(), Some("tasks"));
        assert_eq!(ctx.retry_count, 2);
    }

    #[test]
    fn test_context_next_retry() {
        let ctx = ErrorContext::new("connect").with_resource("scores");

        let retry1 = ctx.next_retry();
        assert_eq!(retry1.retry_count, 1);
        assert_eq!(retry1.operation, "connect");
        assert_eq!(retry1.resource.as_deref(), Some("scores"));
        assert_eq!(retry1.next_retry().retry_count, 2);
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("delete_task")
            .with_endpoint(Method::Delete, "/tasks/4")
            .with_retry_count(1);

        assert_eq!(ctx.to_string(), "[delete_task] DELETE /tasks/4 retry=1");
        assert_eq!(ErrorContext::new("simple_op").to_string(), "[simple_op]");
    }

    #[test]
    fn test_context_to_log_string() {
        let ctx = ErrorContext::new("fetch_page")
            .with_resource("projects")
            .with_endpoint(Method::Get, "/projects");

        let log_str = ctx.to_log_string();
        assert!(log_str.contains("operation=fetch_page"));
        assert!(log_str.contains("resource=projects"));
        assert!(log_str.contains("endpoint=\"GET /projects\""));
        assert!(!log_str.contains("retry_count"));
        assert!(log_str.contains("timestamp="));
    }

    #[test]
    fn test_context_default() {
        assert_eq!(ErrorContext::default().operation, "unknown");
    }
}
