/// One equal-width histogram bucket, `[start, end)` except for the last
/// bucket which also contains `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: u32,
}

/// Splits `[min, max]` of `values` into `bins` equal-width buckets.
///
/// A constant series is centred in `[v - 0.5, v + 0.5]`. Non-finite values
/// are ignored. Returns an empty vector when no finite value is left or
/// `bins` is zero.
pub fn compute_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0u32; bins];
    for &v in &values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        if let Some(slot) = counts.get_mut(idx) {
            *slot += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
