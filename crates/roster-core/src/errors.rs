//! Cross-cutting error types for the roster crates.
//!
//! Domain-specific errors (e.g. `AirtableError`, `ConfigError`) live in their
//! own crates. The CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting user-supplied values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with the given id exists in the loaded collection.
    #[error("Record not found: {kind} {id}")]
    NotFound { kind: String, id: String },

    /// A date argument could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date for '{field}': '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
