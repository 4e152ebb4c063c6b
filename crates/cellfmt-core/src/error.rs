//! Error types for cellfmt-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellfmt-core
///
/// Style setters never fail; errors only come out of the registry.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A numeric style field is outside the range spreadsheet applications accept.
    /// Only raised when the registry runs with [`Validation::Strict`](crate::Validation::Strict).
    #[error("Value {value} out of range for {field}")]
    InvalidRange { field: &'static str, value: String },

    /// A cell style was handed to the differential table or vice versa
    #[error("Style kind mismatch: expected {expected} style, got {actual} style")]
    StyleKindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Invalid style index
    #[error("Invalid style index: {0}")]
    InvalidStyleIndex(u32),
}

impl Error {
    pub(crate) fn invalid_range<V: std::fmt::Display>(field: &'static str, value: V) -> Self {
        Error::InvalidRange {
            field,
            value: value.to_string(),
        }
    }
}
