//! Error types for meterbill.

use std::fmt;

use crate::ids::IdError;

/// Result type for meterbill operations.
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur while computing a statement.
///
/// The taxonomy distinguishes requests that could not be parsed at all
/// (`Malformed`), requests with a present-but-invalid field (`Validation`),
/// and internal failures not attributable to caller input (`Calculation`).
/// All are detected synchronously; nothing is ever retried.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// The request body could not be parsed into the expected shape.
    #[error("malformed request: {reason}")]
    Malformed {
        /// Parser diagnostic for the caller.
        reason: String,
    },

    /// A field is present but its value violates a constraint.
    #[error("invalid value for `{field}`: {value} (expected {constraint})")]
    Validation {
        /// Name of the offending wire field.
        field: String,
        /// The value received, rendered for display.
        value: String,
        /// The constraint the value failed.
        constraint: String,
    },

    /// Unexpected internal failure; reported without leaking state.
    #[error("calculation error: {reason}")]
    Calculation {
        /// Internal diagnostic.
        reason: String,
    },

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl BillingError {
    /// Build a `Validation` error naming the offending field, the value
    /// received, and the constraint it failed.
    #[must_use]
    pub fn validation(
        field: impl Into<String>,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}
