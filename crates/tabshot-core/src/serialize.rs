//! Row serialization
//!
//! One materialized row becomes one canonical JSON line.

use crate::errors::{serialization_error, Result};
use serde::Serialize;

/// Serialize one row to a single line of canonical JSON
///
/// Field order follows the projection type's declared field order. The
/// encoder escapes control characters, so the output never contains an
/// embedded newline. Pure transformation, no side effects.
///
/// # Errors
///
/// `SnapError::Serialization` when the row cannot be encoded; the enclosing
/// operation must abort, since a partial snapshot line is worse than none.
pub fn serialize_row<R: Serialize>(row: &R) -> Result<String> {
    serde_json::to_string(row).map_err(serialization_error)
}
