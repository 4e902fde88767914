//! Evaluation metrics for multi-class gesture classifiers.
//!
//! This module is the metrics engine: pure functions transforming ground
//! truth and predictions into a confusion matrix, per-class
//! precision/recall/F1/support records, macro and weighted aggregates, and
//! (for score predictions) per-class precision-recall curves with average
//! precision.
//!
//! # Examples
//!
//! ## Discrete label predictions
//!
//! ```rust
//! use gesture_metrics::metrics::{LabelSet, MulticlassEvaluator};
//!
//! # fn example() -> gesture_metrics::Result<()> {
//! let labels = LabelSet::new(["A", "B", "C"])?;
//! let y_true = ["A", "A", "B", "B", "C", "C"];
//! let y_pred = ["A", "B", "B", "B", "C", "A"];
//!
//! let result = MulticlassEvaluator::default().evaluate(&y_true, &y_pred, &labels)?;
//! for record in &result.per_class {
//!     println!("{}: F1 {:.4}", record.label, record.f1);
//! }
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Score predictions with PR curves
//!
//! ```rust
//! use gesture_metrics::metrics::{LabelSet, MulticlassEvaluator};
//! use ndarray::array;
//!
//! # fn example() -> gesture_metrics::Result<()> {
//! let labels = LabelSet::new(["Hello", "Bye"])?;
//! let y_true = ["Hello", "Bye", "Hello"];
//! let scores = array![[0.9, 0.1], [0.2, 0.8], [0.6, 0.4]];
//!
//! let result =
//!     MulticlassEvaluator::default().evaluate_scores(&y_true, &scores.view(), &labels)?;
//! if let Some(map) = result.macro_average_precision {
//!     println!("mAP: {:.4}", map);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classification;
pub mod confusion;
pub mod curve;
pub mod labels;

// Re-export main types for convenience
pub use classification::{
    macro_average, per_class_metrics, weighted_average, AverageMetrics, ClassMetrics,
    EvaluationConfig, EvaluationConfigBuilder, EvaluationResult, MulticlassEvaluator,
};
pub use confusion::ConfusionMatrix;
pub use curve::{average_precision, macro_average_precision, PrCurve, PrPoint};
pub use labels::LabelSet;
