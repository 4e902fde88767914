//! Precision-recall curves and average precision.
//!
//! Each curve is computed one-vs-rest for a single class: a binary
//! indicator marks which samples truly belong to the class, and the class's
//! score column orders them from most to least confident. Sweeping the
//! decision threshold from high to low traces the `(recall, precision)`
//! points; average precision is the step-function area under that trace.

use crate::core::error::{EvalError, Result};
use crate::core::types::Score;
use crate::ensure;
use serde::{Deserialize, Serialize};

/// One point of a precision-recall curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrPoint {
    /// Fraction of true positives recovered at this threshold.
    pub recall: f64,
    /// Fraction of predictions above this threshold that are correct.
    pub precision: f64,
}

/// Precision-recall curve for one class, with its average precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrCurve {
    /// The class this curve describes.
    pub label: String,
    /// `(recall, precision)` points in descending-threshold order, starting
    /// from the conventional `(0, 1)` point. Empty when the class has no
    /// positive samples.
    pub points: Vec<PrPoint>,
    /// Number of samples truly belonging to the class.
    pub positives: usize,
    /// Step-function area under the curve, in [0, 1]. `None` when the class
    /// has no positive samples: the recall axis is undefined, and reporting
    /// 0 here would corrupt the macro mean.
    pub average_precision: Option<f64>,
}

impl PrCurve {
    /// Trace the curve for one class from a binary truth indicator and the
    /// class's score column.
    ///
    /// Tied scores are processed as a single threshold step and share one
    /// point. A class with zero positives yields an empty curve and an
    /// undefined average precision.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] when the indicator and score
    /// vectors differ in length.
    pub fn from_scores<L: Into<String>>(
        label: L,
        truth: &[bool],
        scores: &[Score],
    ) -> Result<Self> {
        let label = label.into();
        ensure!(
            truth.len() == scores.len(),
            EvalError::dimension_mismatch(
                format!("{} truth indicators", truth.len()),
                format!("{} scores", scores.len()),
            )
        );

        let positives = truth.iter().filter(|&&t| t).count();
        if positives == 0 {
            log::warn!(
                "class {:?} has no positive samples; average precision is undefined",
                label
            );
            return Ok(PrCurve {
                label,
                points: Vec::new(),
                positives: 0,
                average_precision: None,
            });
        }

        let mut ranked: Vec<(Score, bool)> = scores
            .iter()
            .copied()
            .zip(truth.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut points = vec![PrPoint {
            recall: 0.0,
            precision: 1.0,
        }];
        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut i = 0;
        while i < ranked.len() {
            // Consume the whole run of tied scores before emitting a point.
            let threshold = ranked[i].0;
            while i < ranked.len() && ranked[i].0 == threshold {
                if ranked[i].1 {
                    tp += 1;
                } else {
                    fp += 1;
                }
                i += 1;
            }
            points.push(PrPoint {
                recall: tp as f64 / positives as f64,
                precision: tp as f64 / (tp + fp) as f64,
            });
        }

        let ap = average_precision(&points);
        Ok(PrCurve {
            label,
            points,
            positives,
            average_precision: Some(ap),
        })
    }
}

/// Step-function area under a precision-recall curve:
/// Σ (recall_k − recall_{k−1}) · precision_k, using the precision at the
/// later (lower-threshold) point for each recall increment.
pub fn average_precision(points: &[PrPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].recall - w[0].recall) * w[1].precision)
        .sum()
}

/// Unweighted mean of the defined per-class average precisions.
///
/// Classes with undefined average precision are excluded from both the sum
/// and the denominator; `None` when every class is undefined.
pub fn macro_average_precision<'a, I>(curves: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a PrCurve>,
{
    let defined: Vec<f64> = curves
        .into_iter()
        .filter_map(|c| c.average_precision)
        .collect();
    if defined.is_empty() {
        None
    } else {
        Some(defined.iter().sum::<f64>() / defined.len() as f64)
    }
}
