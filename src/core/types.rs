//! Core data types for the gesture metrics engine.
//!
//! This module defines the fundamental types shared across the metrics
//! modules: numeric aliases for scores and indices, and the policy enum
//! governing zero-denominator ratios.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted confidence value type for one class of one sample.
/// 32-bit float, matching the precision classifiers typically emit.
pub type Score = f32;

/// Index of a class within the canonical label order.
pub type ClassIndex = usize;

/// Policy for resolving metric ratios whose denominator is zero.
///
/// Precision is undefined when a class is never predicted, and recall is
/// undefined when a class has no true samples. Rather than failing, the
/// engine substitutes the policy's fallback value and flags the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroDivision {
    /// Substitute 0.0 for undefined ratios.
    Zero,
    /// Substitute 1.0 for undefined ratios.
    One,
}

impl ZeroDivision {
    /// The substituted value for an undefined ratio.
    pub fn fallback(self) -> f64 {
        match self {
            ZeroDivision::Zero => 0.0,
            ZeroDivision::One => 1.0,
        }
    }
}

impl Default for ZeroDivision {
    fn default() -> Self {
        ZeroDivision::Zero
    }
}

impl fmt::Display for ZeroDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroDivision::Zero => write!(f, "zero"),
            ZeroDivision::One => write!(f, "one"),
        }
    }
}
