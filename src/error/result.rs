//! Result type aliases.

use super::document::DocumentError;
use super::studio_error::StudioError;

/// Type alias for Results using StudioError.
pub type StudioResult<T> = Result<T, StudioError>;

/// Type alias for store and codec operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
