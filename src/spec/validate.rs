//! The minimal shape contract.
//!
//! Deliberately shallow: a root mapping with a string `openapi`, and `info`
//! and `paths` mappings. Operation, response, and schema structure are never
//! inspected.

use serde_json::Value;

use crate::error::ShapeViolation;

/// Key holding the OpenAPI version tag.
pub const VERSION_TAG: &str = "openapi";

/// Check `doc` against the minimal shape contract.
pub fn check_minimal_shape(doc: &Value) -> Result<(), ShapeViolation> {
    let root = doc.as_object().ok_or(ShapeViolation::NotAMapping)?;

    if !root.get(VERSION_TAG).is_some_and(Value::is_string) {
        return Err(ShapeViolation::VersionTag);
    }
    if !root.get("info").is_some_and(Value::is_object) {
        return Err(ShapeViolation::Info);
    }
    if !root.get("paths").is_some_and(Value::is_object) {
        return Err(ShapeViolation::Paths);
    }
    Ok(())
}

/// Boolean form of [`check_minimal_shape`].
pub fn is_minimal_shape(doc: &Value) -> bool {
    check_minimal_shape(doc).is_ok()
}
