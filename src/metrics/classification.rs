//! Per-class and aggregate classification metrics.
//!
//! This module derives precision, recall, F1, and support for every class
//! of a [`ConfusionMatrix`], aggregates them into macro and weighted means,
//! and exposes the [`MulticlassEvaluator`] front-end that runs the whole
//! pipeline from raw labels or a score matrix.
//!
//! # Examples
//!
//! ```rust
//! use gesture_metrics::metrics::{LabelSet, MulticlassEvaluator};
//!
//! # fn example() -> gesture_metrics::Result<()> {
//! let labels = LabelSet::new(["Hello", "Thankyou", "Yes"])?;
//! let y_true = ["Hello", "Hello", "Thankyou", "Yes"];
//! let y_pred = ["Hello", "Yes", "Thankyou", "Yes"];
//!
//! let evaluator = MulticlassEvaluator::default();
//! let result = evaluator.evaluate(&y_true, &y_pred, &labels)?;
//! println!("accuracy: {:.4}", result.accuracy);
//! println!("macro F1: {:.4}", result.macro_avg.f1);
//! # Ok(())
//! # }
//! ```

use crate::core::error::{EvalError, Result};
use crate::core::types::{Score, ZeroDivision};
use crate::ensure;
use crate::metrics::confusion::ConfusionMatrix;
use crate::metrics::curve::{macro_average_precision, PrCurve};
use crate::metrics::labels::LabelSet;
use ndarray::{Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Precision, recall, F1, and support for a single class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// The class this record describes.
    pub label: String,
    /// TP / (TP + FP), or the zero-division fallback when the class was
    /// never predicted.
    pub precision: f64,
    /// TP / (TP + FN), or the zero-division fallback when the class has no
    /// true samples.
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0.0 when both are 0.
    pub f1: f64,
    /// Number of ground-truth samples belonging to the class.
    pub support: usize,
    /// Precision was resolved by the zero-division policy, not computed.
    pub undefined_precision: bool,
    /// Recall was resolved by the zero-division policy, not computed.
    pub undefined_recall: bool,
}

/// Aggregate of per-class metrics across all classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Mean per-class precision.
    pub precision: f64,
    /// Mean per-class recall.
    pub recall: f64,
    /// Mean per-class F1.
    pub f1: f64,
    /// Total support across all classes (summed, not averaged).
    pub support: usize,
}

/// Compute per-class precision, recall, F1, and support from a confusion
/// matrix.
///
/// Produces exactly one record per class, in canonical label order; classes
/// with zero support still appear, with recall resolved by `zero_division`
/// and flagged on the record.
pub fn per_class_metrics(
    matrix: &ConfusionMatrix,
    labels: &LabelSet,
    zero_division: ZeroDivision,
) -> Vec<ClassMetrics> {
    labels
        .iter()
        .enumerate()
        .map(|(class, label)| {
            let tp = matrix.count(class, class);
            let fp = matrix.predicted_count(class) - tp;
            let fn_ = matrix.support(class) - tp;
            let support = matrix.support(class);

            let undefined_precision = tp + fp == 0;
            let precision = if undefined_precision {
                log::warn!(
                    "class {:?} was never predicted; precision set to {}",
                    label,
                    zero_division.fallback()
                );
                zero_division.fallback()
            } else {
                tp as f64 / (tp + fp) as f64
            };

            let undefined_recall = support == 0;
            let recall = if undefined_recall {
                log::warn!(
                    "class {:?} has no true samples; recall set to {}",
                    label,
                    zero_division.fallback()
                );
                zero_division.fallback()
            } else {
                tp as f64 / (tp + fn_) as f64
            };

            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            ClassMetrics {
                label: label.to_string(),
                precision,
                recall,
                f1,
                support,
                undefined_precision,
                undefined_recall,
            }
        })
        .collect()
}

/// Unweighted arithmetic mean of each metric across all classes, with
/// supports summed.
pub fn macro_average(records: &[ClassMetrics]) -> AverageMetrics {
    if records.is_empty() {
        return AverageMetrics {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            support: 0,
        };
    }
    let n = records.len() as f64;
    AverageMetrics {
        precision: records.iter().map(|r| r.precision).sum::<f64>() / n,
        recall: records.iter().map(|r| r.recall).sum::<f64>() / n,
        f1: records.iter().map(|r| r.f1).sum::<f64>() / n,
        support: records.iter().map(|r| r.support).sum(),
    }
}

/// Support-weighted mean of each metric across all classes; zero when no
/// class has any support.
pub fn weighted_average(records: &[ClassMetrics]) -> AverageMetrics {
    let total: usize = records.iter().map(|r| r.support).sum();
    if total == 0 {
        return AverageMetrics {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            support: 0,
        };
    }
    let weight = |r: &ClassMetrics| r.support as f64 / total as f64;
    AverageMetrics {
        precision: records.iter().map(|r| r.precision * weight(r)).sum(),
        recall: records.iter().map(|r| r.recall * weight(r)).sum(),
        f1: records.iter().map(|r| r.f1 * weight(r)).sum(),
        support: total,
    }
}

/// Configuration for the multiclass evaluation pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Policy for zero-denominator precision and recall.
    pub zero_division: ZeroDivision,
    /// Whether score-based evaluation also traces per-class PR curves.
    pub compute_curves: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            zero_division: ZeroDivision::Zero,
            compute_curves: true,
        }
    }
}

/// Builder for [`EvaluationConfig`].
#[derive(Debug, Default)]
pub struct EvaluationConfigBuilder {
    config: EvaluationConfig,
}

impl EvaluationConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-division policy.
    pub fn zero_division(mut self, policy: ZeroDivision) -> Self {
        self.config.zero_division = policy;
        self
    }

    /// Set whether PR curves are traced in score-based evaluation.
    pub fn compute_curves(mut self, compute: bool) -> Self {
        self.config.compute_curves = compute;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EvaluationConfig {
        self.config
    }
}

/// Stateless evaluator transforming ground truth and predictions into a
/// complete [`EvaluationResult`].
#[derive(Debug, Clone, Default)]
pub struct MulticlassEvaluator {
    config: EvaluationConfig,
}

impl MulticlassEvaluator {
    /// Create an evaluator with the given configuration.
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate discrete label predictions.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] for unequal sequence lengths
    /// and [`EvalError::UnknownLabel`] for out-of-vocabulary entries.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        y_true: &[S],
        y_pred: &[S],
        labels: &LabelSet,
    ) -> Result<EvaluationResult> {
        let confusion = ConfusionMatrix::from_labels(y_true, y_pred, labels)?;
        Ok(self.result_from_matrix(confusion, labels, None, None))
    }

    /// Evaluate per-class score predictions, one row per sample and one
    /// column per class in canonical label order.
    ///
    /// Rows are argmaxed into discrete predictions (first maximum wins) for
    /// the confusion matrix and per-class records. When
    /// [`compute_curves`](EvaluationConfig::compute_curves) is set, rows are
    /// L1-normalized and each class's PR curve and average precision are
    /// traced one-vs-rest, in parallel across classes.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] when the matrix shape does
    /// not match the inputs and [`EvalError::UnknownLabel`] for
    /// out-of-vocabulary true labels.
    pub fn evaluate_scores<S: AsRef<str>>(
        &self,
        y_true: &[S],
        scores: &ArrayView2<'_, Score>,
        labels: &LabelSet,
    ) -> Result<EvaluationResult> {
        ensure!(
            scores.nrows() == y_true.len(),
            EvalError::dimension_mismatch(
                format!("{} score rows", y_true.len()),
                format!("{} score rows", scores.nrows()),
            )
        );
        ensure!(
            scores.ncols() == labels.len(),
            EvalError::dimension_mismatch(
                format!("{} score columns", labels.len()),
                format!("{} score columns", scores.ncols()),
            )
        );

        let true_indices = labels.indices_of(y_true)?;
        let pred_indices: Vec<usize> = scores.rows().into_iter().map(argmax).collect();
        let confusion = ConfusionMatrix::from_indices(&true_indices, &pred_indices, labels.len());

        let (curves, macro_ap) = if self.config.compute_curves {
            let normalized = normalize_rows(scores);
            let curves: Vec<PrCurve> = labels
                .names()
                .par_iter()
                .enumerate()
                .map(|(class, name)| {
                    let truth: Vec<bool> =
                        true_indices.iter().map(|&t| t == class).collect();
                    let column: Vec<Score> = normalized.column(class).to_vec();
                    PrCurve::from_scores(name.clone(), &truth, &column)
                })
                .collect::<Result<Vec<_>>>()?;
            let macro_ap = macro_average_precision(curves.iter());
            (Some(curves), macro_ap)
        } else {
            (None, None)
        };

        Ok(self.result_from_matrix(confusion, labels, curves, macro_ap))
    }

    fn result_from_matrix(
        &self,
        confusion: ConfusionMatrix,
        labels: &LabelSet,
        pr_curves: Option<Vec<PrCurve>>,
        macro_average_precision: Option<f64>,
    ) -> EvaluationResult {
        let per_class = per_class_metrics(&confusion, labels, self.config.zero_division);
        let macro_avg = macro_average(&per_class);
        let weighted_avg = weighted_average(&per_class);
        let accuracy = confusion.accuracy();
        let sample_count = confusion.total();

        EvaluationResult {
            confusion,
            per_class,
            macro_avg,
            weighted_avg,
            accuracy,
            sample_count,
            pr_curves,
            macro_average_precision,
        }
    }
}

/// Complete evaluation of one (ground truth, predictions) snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// True-vs-predicted count matrix.
    pub confusion: ConfusionMatrix,
    /// One record per class, in canonical label order.
    pub per_class: Vec<ClassMetrics>,
    /// Unweighted mean of the per-class metrics.
    pub macro_avg: AverageMetrics,
    /// Support-weighted mean of the per-class metrics.
    pub weighted_avg: AverageMetrics,
    /// Fraction of correctly predicted samples.
    pub accuracy: f64,
    /// Number of evaluated samples.
    pub sample_count: usize,
    /// Per-class PR curves, present for score-based evaluation with curves
    /// enabled.
    pub pr_curves: Option<Vec<PrCurve>>,
    /// Mean of the defined per-class average precisions; `None` when curves
    /// were not traced or no class has positive samples.
    pub macro_average_precision: Option<f64>,
}

impl EvaluationResult {
    /// Render a classification-report-style text table of the per-class and
    /// aggregate metrics.
    pub fn summary(&self) -> String {
        let width = self
            .per_class
            .iter()
            .map(|r| r.label.len())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!(
            "{:>w$}  {:>9}  {:>9}  {:>9}  {:>9}\n\n",
            "",
            "precision",
            "recall",
            "f1-score",
            "support",
            w = width
        ));
        for r in &self.per_class {
            out.push_str(&format!(
                "{:>w$}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9}\n",
                r.label,
                r.precision,
                r.recall,
                r.f1,
                r.support,
                w = width
            ));
        }
        out.push('\n');
        out.push_str(&format!(
            "{:>w$}  {:>9}  {:>9}  {:>9.4}  {:>9}\n",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.sample_count,
            w = width
        ));
        for (name, avg) in [
            ("macro avg", &self.macro_avg),
            ("weighted avg", &self.weighted_avg),
        ] {
            out.push_str(&format!(
                "{:>w$}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9}\n",
                name,
                avg.precision,
                avg.recall,
                avg.f1,
                avg.support,
                w = width
            ));
        }
        if let Some(map) = self.macro_average_precision {
            out.push_str(&format!("\nmean average precision (mAP): {:.4}\n", map));
        }
        out
    }
}

/// Index of the first maximal entry of a score row.
fn argmax(row: ArrayView1<'_, Score>) -> usize {
    let mut best = 0;
    let mut best_score = row[0];
    for (i, &score) in row.iter().enumerate().skip(1) {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

/// L1-normalize each row; rows summing to zero are left unchanged.
fn normalize_rows(scores: &ArrayView2<'_, Score>) -> Array2<Score> {
    let mut normalized = scores.to_owned();
    for mut row in normalized.rows_mut() {
        let sum: Score = row.sum();
        if sum > 0.0 {
            row.mapv_inplace(|v| v / sum);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn abc() -> LabelSet {
        LabelSet::new(["A", "B", "C"]).unwrap()
    }

    #[test]
    fn test_per_class_metrics_worked_example() {
        let labels = abc();
        let y_true = ["A", "A", "B", "B", "C", "C"];
        let y_pred = ["A", "B", "B", "B", "C", "A"];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, &labels).unwrap();
        let records = per_class_metrics(&cm, &labels, ZeroDivision::Zero);

        assert_eq!(records.len(), 3);
        assert_relative_eq!(records[0].precision, 0.5, epsilon = 1e-12);
        assert_relative_eq!(records[0].recall, 0.5, epsilon = 1e-12);
        assert_relative_eq!(records[1].precision, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(records[1].recall, 1.0, epsilon = 1e-12);
        assert_relative_eq!(records[2].precision, 1.0, epsilon = 1e-12);
        assert_relative_eq!(records[2].recall, 0.5, epsilon = 1e-12);
        assert!(records.iter().all(|r| !r.undefined_recall));
    }

    #[test]
    fn test_zero_support_class_is_flagged() {
        let labels = abc();
        let y_true = ["A", "A", "B"];
        let y_pred = ["A", "B", "B"];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, &labels).unwrap();
        let records = per_class_metrics(&cm, &labels, ZeroDivision::Zero);

        let c = &records[2];
        assert_eq!(c.support, 0);
        assert_eq!(c.precision, 0.0);
        assert_eq!(c.recall, 0.0);
        assert!(c.undefined_precision);
        assert!(c.undefined_recall);

        // The macro average still covers all three classes.
        let avg = macro_average(&records);
        assert_relative_eq!(avg.recall, (0.5 + 1.0 + 0.0) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_division_one_policy() {
        let labels = abc();
        let y_true = ["A", "A", "B"];
        let y_pred = ["A", "B", "B"];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, &labels).unwrap();
        let records = per_class_metrics(&cm, &labels, ZeroDivision::One);

        assert_eq!(records[2].precision, 1.0);
        assert_eq!(records[2].recall, 1.0);
        assert!(records[2].undefined_precision);
    }

    #[test]
    fn test_weighted_average_equals_macro_for_balanced_supports() {
        let labels = abc();
        let y_true = ["A", "A", "B", "B", "C", "C"];
        let y_pred = ["A", "B", "B", "B", "C", "A"];
        let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, &labels).unwrap();
        let records = per_class_metrics(&cm, &labels, ZeroDivision::Zero);

        let macro_avg = macro_average(&records);
        let weighted = weighted_average(&records);
        assert_relative_eq!(macro_avg.precision, weighted.precision, epsilon = 1e-12);
        assert_relative_eq!(macro_avg.f1, weighted.f1, epsilon = 1e-12);
        assert_eq!(macro_avg.support, 6);
        assert_eq!(weighted.support, 6);
    }

    #[test]
    fn test_evaluator_perfect_predictions() {
        let labels = abc();
        let y = ["A", "B", "C", "A", "B", "C"];
        let result = MulticlassEvaluator::default()
            .evaluate(&y, &y, &labels)
            .unwrap();

        assert_eq!(result.accuracy, 1.0);
        assert_eq!(result.sample_count, 6);
        for r in &result.per_class {
            assert_eq!(r.precision, 1.0);
            assert_eq!(r.recall, 1.0);
            assert_eq!(r.f1, 1.0);
        }
        assert_eq!(result.macro_avg.f1, 1.0);
        assert!(result.pr_curves.is_none());
    }

    #[test]
    fn test_evaluate_scores_argmax_and_curves() {
        let labels = abc();
        let y_true = ["A", "B", "C", "B"];
        let scores = array![
            [0.7, 0.2, 0.1],
            [0.1, 0.8, 0.1],
            [0.1, 0.1, 0.8],
            [0.3, 0.6, 0.1],
        ];
        let result = MulticlassEvaluator::default()
            .evaluate_scores(&y_true, &scores.view(), &labels)
            .unwrap();

        assert_eq!(result.accuracy, 1.0);
        let curves = result.pr_curves.as_ref().unwrap();
        assert_eq!(curves.len(), 3);
        for curve in curves {
            assert_relative_eq!(
                curve.average_precision.unwrap(),
                1.0,
                epsilon = 1e-12
            );
        }
        assert_relative_eq!(
            result.macro_average_precision.unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_evaluate_scores_shape_validation() {
        let labels = abc();
        let scores = array![[0.5, 0.5], [0.2, 0.8]];
        let err = MulticlassEvaluator::default()
            .evaluate_scores(&["A", "B"], &scores.view(), &labels)
            .unwrap_err();
        assert!(matches!(err, EvalError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_argmax_first_maximum_wins() {
        let row = array![0.4, 0.4, 0.2];
        assert_eq!(argmax(row.view()), 0);
        let row = array![0.1, 0.4, 0.5];
        assert_eq!(argmax(row.view()), 2);
    }

    #[test]
    fn test_normalize_rows_keeps_zero_rows() {
        let scores = array![[2.0, 2.0], [0.0, 0.0]];
        let normalized = normalize_rows(&scores.view());
        assert_eq!(normalized[[0, 0]], 0.5);
        assert_eq!(normalized[[1, 0]], 0.0);
        assert_eq!(normalized[[1, 1]], 0.0);
    }

    #[test]
    fn test_config_builder() {
        let config = EvaluationConfigBuilder::new()
            .zero_division(ZeroDivision::One)
            .compute_curves(false)
            .build();
        assert_eq!(config.zero_division, ZeroDivision::One);
        assert!(!config.compute_curves);

        let evaluator = MulticlassEvaluator::new(config);
        assert!(!evaluator.config().compute_curves);
    }

    #[test]
    fn test_summary_contains_all_rows() {
        let labels = abc();
        let y_true = ["A", "A", "B", "B", "C", "C"];
        let y_pred = ["A", "B", "B", "B", "C", "A"];
        let result = MulticlassEvaluator::default()
            .evaluate(&y_true, &y_pred, &labels)
            .unwrap();

        let summary = result.summary();
        for label in ["A", "B", "C"] {
            assert!(summary.contains(label));
        }
        assert!(summary.contains("accuracy"));
        assert!(summary.contains("macro avg"));
        assert!(summary.contains("weighted avg"));
    }
}
