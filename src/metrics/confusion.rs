//! Confusion matrix construction and accessors.
//!
//! The confusion matrix is the anchor structure of the engine: every
//! per-class and aggregate metric in
//! [`classification`](crate::metrics::classification) is derived from its
//! row and column sums. Cell `(i, j)` counts samples whose true label is
//! class `i` and whose predicted label is class `j`, both in the canonical
//! order of a [`LabelSet`].

use crate::core::error::{EvalError, Result};
use crate::core::types::ClassIndex;
use crate::ensure;
use crate::metrics::labels::LabelSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// N×N matrix of true-vs-predicted label counts.
///
/// Invariants: row `i` sums to the support of class `i`, and the total sum
/// equals the number of samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: Array2<usize>,
}

impl ConfusionMatrix {
    /// Build a confusion matrix from parallel sequences of true and
    /// predicted labels, indexed by the canonical label order.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] when the sequences differ in
    /// length and [`EvalError::UnknownLabel`] when any entry falls outside
    /// the label set.
    pub fn from_labels<S: AsRef<str>>(
        y_true: &[S],
        y_pred: &[S],
        labels: &LabelSet,
    ) -> Result<Self> {
        ensure!(
            y_true.len() == y_pred.len(),
            EvalError::dimension_mismatch(
                format!("{} true labels", y_true.len()),
                format!("{} predictions", y_pred.len()),
            )
        );

        let true_indices = labels.indices_of(y_true)?;
        let pred_indices = labels.indices_of(y_pred)?;
        Ok(Self::from_indices(&true_indices, &pred_indices, labels.len()))
    }

    /// Build a confusion matrix from pre-resolved class indices.
    ///
    /// Callers are responsible for indices being below `num_classes`;
    /// [`from_labels`](Self::from_labels) is the validated entry point.
    pub fn from_indices(
        true_indices: &[ClassIndex],
        pred_indices: &[ClassIndex],
        num_classes: usize,
    ) -> Self {
        let mut counts = Array2::zeros((num_classes, num_classes));
        for (&t, &p) in true_indices.iter().zip(pred_indices.iter()) {
            counts[[t, p]] += 1;
        }
        log::debug!(
            "built {}x{} confusion matrix from {} samples",
            num_classes,
            num_classes,
            true_indices.len()
        );
        ConfusionMatrix { counts }
    }

    /// Number of classes (matrix side length).
    pub fn num_classes(&self) -> usize {
        self.counts.nrows()
    }

    /// Count of samples with true class `true_class` predicted as
    /// `pred_class`.
    pub fn count(&self, true_class: ClassIndex, pred_class: ClassIndex) -> usize {
        self.counts[[true_class, pred_class]]
    }

    /// Support of `class`: number of samples truly belonging to it
    /// (row sum).
    pub fn support(&self, class: ClassIndex) -> usize {
        self.counts.row(class).sum()
    }

    /// Number of samples predicted as `class` (column sum).
    pub fn predicted_count(&self, class: ClassIndex) -> usize {
        self.counts.column(class).sum()
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    /// Fraction of samples on the diagonal; 0.0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = self.counts.diag().sum();
        correct as f64 / total as f64
    }

    /// The raw count matrix, row = true class, column = predicted class.
    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }
}
