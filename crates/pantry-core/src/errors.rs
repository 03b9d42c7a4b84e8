//! Cross-cutting error types for Pantry.
//!
//! Transport failures live in `pantry-client` as `ApiError`; configuration
//! failures in `pantry-config`. Everything converges on `anyhow` in the CLI.

use thiserror::Error;

/// Errors that can be raised by any Pantry crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A unit id was not present in the loaded unit catalog.
    #[error("Unit with id {id} not found")]
    UnitNotFound { id: i64 },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
