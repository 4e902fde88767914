//! Core infrastructure for the gesture metrics engine.
//!
//! This module provides the foundational components shared by every metrics
//! module: fundamental data types and error handling.
//!
//! # Organization
//!
//! - [`types`]: Fundamental data types and the zero-division policy
//! - [`error`]: Error handling and error types

pub mod error;
pub mod types;

pub use error::{EvalError, Result};
pub use types::{ClassIndex, Score, ZeroDivision};
