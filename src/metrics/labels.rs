//! Canonical label vocabulary for multi-class evaluation.
//!
//! Every matrix and per-class vector produced by the engine is indexed by a
//! [`LabelSet`]: an ordered sequence of unique category names. Order matters
//! only for display and indexing, not semantics.

use crate::core::error::{EvalError, Result};
use crate::core::types::ClassIndex;
use crate::ensure;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered set of unique class labels defining the index space for all
/// confusion matrices, per-class records, and curve vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSet {
    names: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, ClassIndex>,
}

impl LabelSet {
    /// Create a label set from an ordered sequence of unique names.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Config`] for an empty sequence and
    /// [`EvalError::DuplicateLabel`] for a repeated name.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = labels.into_iter().map(Into::into).collect();
        ensure!(!names.is_empty(), EvalError::config("empty label set"));

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(EvalError::duplicate_label(name.clone()));
            }
        }

        Ok(LabelSet { names, index })
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty. Construction rejects empty sets, so this
    /// only returns true for a deserialized default.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the class at `index`, if in range.
    pub fn get(&self, index: ClassIndex) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of `label` within the canonical order.
    pub fn index_of(&self, label: &str) -> Option<ClassIndex> {
        self.index.get(label).copied()
    }

    /// Map a sequence of labels into index space.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownLabel`] for the first entry that is not a
    /// member of this set.
    pub fn indices_of<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<ClassIndex>> {
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.index_of(label)
                    .ok_or_else(|| EvalError::unknown_label(label))
            })
            .collect()
    }

    /// Iterate over the class names in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The class names in canonical order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Rebuild the reverse index after deserialization.
    pub fn reindex(&mut self) {
        self.index = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gestures() -> LabelSet {
        LabelSet::new(["Hello", "Thankyou", "Yes", "No"]).unwrap()
    }

    #[test]
    fn test_label_set_order_and_lookup() {
        let labels = gestures();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.get(0), Some("Hello"));
        assert_eq!(labels.get(3), Some("No"));
        assert_eq!(labels.get(4), None);
        assert_eq!(labels.index_of("Thankyou"), Some(1));
        assert_eq!(labels.index_of("Bye"), None);
    }

    #[test]
    fn test_label_set_rejects_duplicates() {
        let err = LabelSet::new(["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, EvalError::DuplicateLabel { .. }));
    }

    #[test]
    fn test_label_set_rejects_empty() {
        let err = LabelSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, EvalError::Config { .. }));
    }

    #[test]
    fn test_indices_of() {
        let labels = gestures();
        let indices = labels.indices_of(&["No", "Hello", "Hello"]).unwrap();
        assert_eq!(indices, vec![3, 0, 0]);

        let err = labels.indices_of(&["Hello", "Welcome"]).unwrap_err();
        assert!(matches!(err, EvalError::UnknownLabel { ref label } if label == "Welcome"));
    }

    #[test]
    fn test_reindex_after_deserialization() {
        let labels = gestures();
        let json = serde_json::to_string(&labels).unwrap();
        let mut restored: LabelSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.index_of("Yes"), None);
        restored.reindex();
        assert_eq!(restored.index_of("Yes"), Some(2));
    }
}
