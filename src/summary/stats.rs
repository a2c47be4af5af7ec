//! Numeric moments and frequency counting.

use super::types::{NumericStats, TopValues};
use indexmap::IndexMap;

/// Count, mean, sample standard deviation (N-1), min and max of `values`.
///
/// Non-finite values are ignored, like missing cells.
pub fn numeric_stats(values: &[f64]) -> NumericStats {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let count = values.len();
    if count == 0 {
        return NumericStats::default();
    }

    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (count > 1).then(|| {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (n - 1.0)).sqrt()
    });
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    NumericStats {
        count,
        mean: Some(mean),
        std,
        min: Some(min),
        max: Some(max),
    }
}

/// Counts each distinct value and keeps the `limit` most frequent.
///
/// Ties keep the order in which the values were first seen.
pub fn top_values<'a>(values: impl IntoIterator<Item = &'a str>, limit: usize) -> TopValues {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
        .into_iter()
        .take(limit)
        .map(|(value, count)| (value.to_owned(), count))
        .collect()
}
