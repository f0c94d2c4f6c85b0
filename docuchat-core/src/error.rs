//! Unified error handling
//!
//! Structured error types with context and proper error chaining. Errors
//! surfaced to the user go through [`DocuChatError::user_message`], which
//! prefers the backend-reported message, then the transport message, then a
//! generic fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type DocuChatResult<T> = Result<T, DocuChatError>;

/// Additional information attached to an error for debugging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where the error originated
    pub component: String,
    /// Operation being performed when the error occurred
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

/// Main error type for the DocuChat client
#[derive(Error, Debug)]
pub enum DocuChatError {
    /// The backend answered with a non-2xx status and (where available) a
    /// structured error payload
    #[error("Backend error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    /// The request never produced a response (unreachable host, timeout)
    #[error("Network error: {message}")]
    Network {
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

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Resource not found: {resource}")]
    NotFound {
        resource: String,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocuChatError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DocuChatError::Api { context, .. } => Some(context),
            DocuChatError::Network { context, .. } => Some(context),
            DocuChatError::Validation { context, .. } => Some(context),
            DocuChatError::Config { context, .. } => Some(context),
            DocuChatError::NotFound { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Check if error is recoverable by retrying later
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocuChatError::Network { .. })
    }

    /// Human-readable message suitable for showing in the conversation.
    ///
    /// Ladder: backend-provided message, else transport-level message, else
    /// a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            DocuChatError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            DocuChatError::Network { message, .. } if !message.trim().is_empty() => message.clone(),
            DocuChatError::Validation { message, .. } => message.clone(),
            _ => "Failed to get response from server".to_string(),
        }
    }

    /// Log the error with the appropriate level
    pub fn log(&self) {
        match self {
            DocuChatError::Network { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Network error (may be recoverable)"
                );
            }
            _ => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Error occurred"
                );
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::DocuChatError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file")
                .with_suggestion("Run 'docuchat config --init' to create a default config"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::DocuChatError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check the field value and format"),
        }
    };
}
