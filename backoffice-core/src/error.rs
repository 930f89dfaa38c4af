//! Unified error handling system
//!
//! Provides structured error types with context, recovery suggestions, and proper error chaining

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type BackofficeResult<T> = Result<T, BackofficeError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the Backoffice system
#[derive(Error, Debug)]
pub enum BackofficeError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Resource not found: {resource}")]
    NotFound {
        resource: String,
        context: ErrorContext,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackofficeError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            BackofficeError::Config { context, .. } => Some(context),
            BackofficeError::Validation { context, .. } => Some(context),
            BackofficeError::NotFound { context, .. } => Some(context),
            BackofficeError::Internal { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        tracing::error!(
            error_id = ?self.context().map(|c| &c.error_id),
            error = %self,
            "Error occurred"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_builder() {
        let context = ErrorContext::new("config")
            .with_operation("read_file")
            .with_suggestion("Check if the config file exists");

        assert_eq!(context.component, "config");
        assert_eq!(context.operation.as_deref(), Some("read_file"));
        assert_eq!(context.recovery_suggestions.len(), 1);
        assert!(!context.error_id.is_empty());
    }

    #[test]
    fn test_error_exposes_context() {
        let error = BackofficeError::NotFound {
            resource: "info/42".to_string(),
            context: ErrorContext::new("web"),
        };

        assert_eq!(error.context().map(|c| c.component.as_str()), Some("web"));
        assert!(error.to_string().contains("info/42"));
    }

    #[test]
    fn test_io_error_has_no_context() {
        let error = BackofficeError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        assert!(error.context().is_none());
    }
}
