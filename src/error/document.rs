//! Errors raised while parsing, validating, or serializing a specification.

use thiserror::Error;

use crate::spec::SpecFormat;

/// Which part of the minimal shape contract a document failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    /// The top-level value is a scalar or a sequence.
    #[error("document root is not a mapping")]
    NotAMapping,

    /// `openapi` is absent or not a string.
    #[error("`openapi` is missing or is not a string")]
    VersionTag,

    /// `info` is absent or not a mapping.
    #[error("`info` is missing or is not a mapping")]
    Info,

    /// `paths` is absent or not a mapping.
    #[error("`paths` is missing or is not a mapping")]
    Paths,
}

/// Specification document errors.
///
/// Callers of the store's boolean mutators never see these; they exist for
/// logging and for the `try_*` variants used in diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Text does not conform to the grammar of the active format.
    #[error("invalid {format}: {message}")]
    Parse { format: SpecFormat, message: String },

    /// Text parsed, but the value fails the minimal shape contract.
    #[error("document rejected: {0}")]
    Shape(#[from] ShapeViolation),

    /// An in-memory document could not be rendered to text.
    #[error("failed to serialize as {format}: {message}")]
    Serialize { format: SpecFormat, message: String },
}

impl DocumentError {
    /// Build a parse error for `format` from any displayable parser error.
    pub fn parse(format: SpecFormat, err: impl std::fmt::Display) -> Self {
        DocumentError::Parse {
            format,
            message: err.to_string(),
        }
    }

    /// Build a serialization error for `format`.
    pub fn serialize(format: SpecFormat, err: impl std::fmt::Display) -> Self {
        DocumentError::Serialize {
            format,
            message: err.to_string(),
        }
    }

    /// True for the two rejection causes the store treats identically.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DocumentError::Parse { .. } | DocumentError::Shape(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DocumentError::Parse { format, .. } => format.invalid_message(),
            DocumentError::Shape(violation) => {
                format!("The document is not an OpenAPI specification: {}", violation)
            }
            DocumentError::Serialize { format, .. } => {
                format!("Could not display the document as {}", format)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DocumentError::Parse { .. } => "DOC_PARSE",
            DocumentError::Shape(_) => "DOC_SHAPE",
            DocumentError::Serialize { .. } => "DOC_SERIALIZE",
        }
    }
}
