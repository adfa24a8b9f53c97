//! Unified error type for specdeck.

use std::fmt;

use super::assistant::AssistantError;
use super::category::ErrorCategory;
use super::document::DocumentError;
use super::system::SystemError;

/// Unified error type for the application.
///
/// Every action boundary (a key handler, a finished assistant task) turns a
/// `StudioError` into local UI state; nothing propagates past the event loop.
#[derive(Debug)]
pub enum StudioError {
    /// Specification parse/shape/serialize errors.
    Document(DocumentError),

    /// Language-model call errors.
    Assistant(AssistantError),

    /// System/filesystem errors.
    System(SystemError),

    /// A configuration value could not be interpreted.
    Config { key: String, message: String },
}

impl StudioError {
    /// Build a configuration error.
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        StudioError::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::Document(err) => {
                if err.is_rejection() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::Client
                }
            }
            StudioError::Assistant(err) => {
                if err.requires_credential() {
                    return ErrorCategory::Auth;
                }
                match err {
                    AssistantError::Connection(_) | AssistantError::Timeout(_) => {
                        ErrorCategory::Network
                    }
                    _ => ErrorCategory::Server,
                }
            }
            StudioError::System(_) => ErrorCategory::System,
            StudioError::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Check if this error is worth trying again.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StudioError::Document(err) => err.user_message(),
            StudioError::Assistant(err) => err.user_message().to_string(),
            StudioError::System(err) => err.user_message(),
            StudioError::Config { key, message } => {
                format!("Invalid configuration for {}: {}", key, message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StudioError::Document(err) => err.error_code(),
            StudioError::Assistant(err) => err.error_code(),
            StudioError::System(err) => err.error_code(),
            StudioError::Config { .. } => "CONFIG",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::Document(err) => write!(f, "{}", err),
            StudioError::Assistant(err) => write!(f, "{}", err),
            StudioError::System(err) => write!(f, "{}", err),
            StudioError::Config { key, message } => write!(f, "config {}: {}", key, message),
        }
    }
}

impl std::error::Error for StudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudioError::Document(err) => Some(err),
            StudioError::Assistant(err) => Some(err),
            StudioError::System(err) => Some(err),
            StudioError::Config { .. } => None,
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<DocumentError> for StudioError {
    fn from(err: DocumentError) -> Self {
        StudioError::Document(err)
    }
}

impl From<AssistantError> for StudioError {
    fn from(err: AssistantError) -> Self {
        StudioError::Assistant(err)
    }
}

impl From<SystemError> for StudioError {
    fn from(err: SystemError) -> Self {
        StudioError::System(err)
    }
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        StudioError::System(err.into())
    }
}
