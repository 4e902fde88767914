//! Error handling and error types for the gesture metrics engine.
//!
//! This module provides error handling using Rust's Result type system,
//! ensuring clear error propagation throughout metric computation. The only
//! recoverable failure in the engine is malformed input; division by zero
//! inside metric ratios is never an error and is resolved by the
//! [`ZeroDivision`](crate::core::types::ZeroDivision) policy instead.

use thiserror::Error;

/// Main error type for the gesture metrics library.
///
/// This enum covers all possible error conditions that can occur while
/// building label vocabularies, confusion matrices, and metric results.
#[derive(Error, Debug)]
pub enum EvalError {
    /// A true or predicted label falls outside the canonical label set.
    #[error("Unknown label: {label:?} is not in the label set")]
    UnknownLabel { label: String },

    /// The canonical label set contains a repeated entry.
    #[error("Duplicate label: {label:?} appears more than once in the label set")]
    DuplicateLabel { label: String },

    /// Input sequence or matrix dimensions disagree.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Configuration and validation errors.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Type alias for Results using EvalError.
pub type Result<T> = std::result::Result<T, EvalError>;

impl EvalError {
    /// Create an unknown-label error.
    pub fn unknown_label<S: Into<String>>(label: S) -> Self {
        EvalError::UnknownLabel {
            label: label.into(),
        }
    }

    /// Create a duplicate-label error.
    pub fn duplicate_label<S: Into<String>>(label: S) -> Self {
        EvalError::DuplicateLabel {
            label: label.into(),
        }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        EvalError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        EvalError::Config {
            message: message.into(),
        }
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            EvalError::UnknownLabel { .. } => "unknown_label",
            EvalError::DuplicateLabel { .. } => "duplicate_label",
            EvalError::DimensionMismatch { .. } => "dimension_mismatch",
            EvalError::Config { .. } => "config",
        }
    }
}

/// Return early with the given error when a condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
