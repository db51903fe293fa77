//! Caller-contract errors for the form core
//!
//! These are programmer errors from the input-binding layer. An invalid form is not an
//! error here; it is reported through [`crate::validation::ErrorMap`].

use thiserror::Error;

/// Errors raised when a caller addresses the form incorrectly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The path names no field, no known skill, or is malformed
    #[error("unknown field path `{0}`")]
    UnknownFieldPath(String),

    /// A position selector produced a value outside the known set
    #[error("unknown position `{0}`")]
    UnknownPosition(String),

    /// The value's shape does not fit the addressed field
    #[error("field `{path}` expects a {expected} value")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FormError>;
