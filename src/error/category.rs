//! Error category classification for unified error handling.
//!
//! Categories give every error a coarse label that drives how the UI reacts:
//! whether the credential prompt should reopen, whether the user should just
//! fix their input, or whether something outside the editor is broken.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection refused, DNS, timeout).
    Network,

    /// The language-model provider rejected or never received a credential.
    Auth,

    /// Provider-side errors (HTTP 5xx, unexpected response bodies).
    Server,

    /// Programming errors (serialization of an in-memory value failed).
    Client,

    /// User input that cannot be accepted (bad YAML/JSON, missing fields).
    User,

    /// OS errors (log directory, terminal I/O).
    System,

    /// Invalid configuration values.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    ///
    /// Nothing is retried automatically; this only decides whether the
    /// message suggests trying again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Auth => "Authentication problem",
            ErrorCategory::Server => "Provider-side issue",
            ErrorCategory::Client => "Application error",
            ErrorCategory::User => "Input could not be accepted",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Enter a valid API key with Ctrl+K",
            ErrorCategory::Server => {
                "The provider may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
            ErrorCategory::User => "Fix the highlighted input; the previous document is kept",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your SPECDECK_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
