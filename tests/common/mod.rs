//! Common test utilities for gesture metrics integration tests.

use gesture_metrics::LabelSet;
use rand::prelude::*;

/// Initialize logging once for tests that exercise warning paths.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small gesture vocabulary in canonical order.
pub fn gesture_labels() -> LabelSet {
    LabelSet::new(["Hello", "Thankyou", "Yes", "No", "Please", "ILoveYou"]).unwrap()
}

/// Balanced ground truth: `samples_per_class` entries per label, in label
/// order.
pub fn balanced_truth(labels: &LabelSet, samples_per_class: usize) -> Vec<String> {
    labels
        .iter()
        .flat_map(|name| std::iter::repeat(name.to_string()).take(samples_per_class))
        .collect()
}

/// Predictions drawn independently and uniformly from the label set.
pub fn uniform_predictions(labels: &LabelSet, count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let names = labels.names();
    (0..count)
        .map(|_| names[rng.gen_range(0..names.len())].clone())
        .collect()
}
