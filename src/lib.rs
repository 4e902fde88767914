//! # Gesture Metrics
//!
//! Multi-class evaluation metrics for gesture recognition classifiers:
//! confusion matrices, per-class precision/recall/F1/support, macro and
//! weighted aggregates, and per-class precision-recall curves with average
//! precision.
//!
//! The engine is deliberately narrow. It consumes ground-truth labels plus
//! predictions — discrete labels or an `n_samples × n_classes` score matrix
//! — and emits plain numeric structures. Sampling predictions, rendering
//! charts, and writing files are the caller's concern.
//!
//! ## Quick Start
//!
//! ```rust
//! use gesture_metrics::{LabelSet, MulticlassEvaluator};
//!
//! # fn main() -> gesture_metrics::Result<()> {
//! let labels = LabelSet::new(["Hello", "Thankyou", "Yes", "No"])?;
//! let y_true = ["Hello", "Hello", "Thankyou", "Yes", "No"];
//! let y_pred = ["Hello", "Yes", "Thankyou", "Yes", "No"];
//!
//! let result = MulticlassEvaluator::default().evaluate(&y_true, &y_pred, &labels)?;
//! println!("accuracy: {:.4}", result.accuracy);
//! println!("macro F1: {:.4}", result.macro_avg.f1);
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types, the zero-division policy, and error
//!   handling
//! - [`metrics`]: the engine — label vocabulary, confusion matrix,
//!   per-class and aggregate metrics, PR curves
//!
//! ## Behavior notes
//!
//! - Every operation is a pure function of its inputs; identical inputs
//!   produce identical outputs.
//! - A label outside the canonical set is the only fatal input error.
//!   Zero-denominator ratios resolve through
//!   [`ZeroDivision`](core::types::ZeroDivision) and are flagged on the
//!   record; a class with no positive samples has an undefined average
//!   precision (`None`), excluded from the macro mean.
//! - Per-class PR curves are independent and computed in parallel.

#![doc(html_root_url = "https://docs.rs/gesture-metrics/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module
pub mod core;

// Metrics engine module
pub mod metrics;

// Re-export core functionality for convenience
pub use crate::core::{
    error::{EvalError, Result},
    types::{ClassIndex, Score, ZeroDivision},
};

// Re-export the metrics engine surface
pub use crate::metrics::{
    average_precision, macro_average, macro_average_precision, per_class_metrics,
    weighted_average, AverageMetrics, ClassMetrics, ConfusionMatrix, EvaluationConfig,
    EvaluationConfigBuilder, EvaluationResult, LabelSet, MulticlassEvaluator, PrCurve, PrPoint,
};
