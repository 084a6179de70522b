//! Descriptive statistics over a rate sequence
//!
//! Every function returns `0.0` for an empty sequence. That includes
//! [`maximum`] and [`minimum`], which do not fall back to infinities.

use hashbrown::HashMap;
use statrs::statistics::Statistics;

/// Arithmetic mean
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Population standard deviation (divides by `n`, not `n - 1`)
pub fn deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().population_std_dev()
}

pub fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Middle value of the sorted sequence
///
/// For an even length `n` this is `(sorted[n / 2] + sorted[n / 2 - 1]) / 2`.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2] + sorted[n / 2 - 1]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value
///
/// Values are grouped by exact bit pattern, so `0.0` and `-0.0` count as
/// different values. When several values share the highest count, the one
/// that appears first in `values` wins.
pub fn mode(values: &[f64]) -> f64 {
    // bits -> (count, index of first occurrence)
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::with_capacity(values.len());
    for (idx, value) in values.iter().enumerate() {
        counts.entry(value.to_bits()).or_insert((0, idx)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(bits, _)| f64::from_bits(bits))
        .unwrap_or(0.0)
}
