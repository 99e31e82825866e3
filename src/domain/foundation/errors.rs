//! Error types for value object and aggregate construction.

use thiserror::Error;

/// Errors that occur while constructing domain values.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    /// Creates an invalid field validation error.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
