//! Errors from the language-model call.
//!
//! These cover the outbound request only. A reply that arrives but cannot be
//! applied to the store is not an error of this kind; see
//! [`crate::assistant::MergeOutcome`].

use thiserror::Error;

use crate::traits::HttpError;

/// Message shown whenever the failure is about the API key.
pub const CREDENTIAL_MESSAGE: &str =
    "Invalid or missing OpenAI API key. Please provide a valid API key.";

/// Message shown when a submission is attempted without any API key.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "Please provide an OpenAI API key to use the LLM assistant.";

/// Message shown for every other failed call.
pub const GENERIC_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Language-model call failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// No key from the build, the environment, or the session.
    #[error("no API key configured")]
    MissingCredential,

    /// TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The provider did not answer in time.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// HTTP 401 from the provider.
    #[error("provider rejected the API key: {0}")]
    Unauthorized(String),

    /// Any other non-2xx status.
    #[error("provider error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body is not a chat completion.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl AssistantError {
    /// True when the credential entry should be reopened.
    ///
    /// Providers report some key problems with statuses other than 401, so a
    /// message mentioning the API key counts as well.
    pub fn requires_credential(&self) -> bool {
        match self {
            AssistantError::MissingCredential | AssistantError::Unauthorized(_) => true,
            AssistantError::Server { message, .. } => message.contains("API key"),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            err if err.requires_credential() => CREDENTIAL_MESSAGE,
            _ => GENERIC_MESSAGE,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AssistantError::MissingCredential => "LLM_NO_KEY",
            AssistantError::Connection(_) => "LLM_CONNECT",
            AssistantError::Timeout(_) => "LLM_TIMEOUT",
            AssistantError::Unauthorized(_) => "LLM_UNAUTHORIZED",
            AssistantError::Server { .. } => "LLM_SERVER",
            AssistantError::MalformedResponse(_) => "LLM_MALFORMED",
        }
    }
}

impl From<HttpError> for AssistantError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(msg) => AssistantError::Connection(msg),
            HttpError::Timeout(msg) => AssistantError::Timeout(msg),
            HttpError::ServerError { status: 401, message } => {
                AssistantError::Unauthorized(message)
            }
            HttpError::ServerError { status, message } => {
                AssistantError::Server { status, message }
            }
            other => AssistantError::Connection(other.to_string()),
        }
    }
}
