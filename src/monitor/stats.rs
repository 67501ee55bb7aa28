//! Quantile and IQR fence computation.
//!
//! The quantile definition is pinned down here so outlier counts are
//! reproducible regardless of what any table library defaults to:
//! linear interpolation between closest ranks, the same definition as
//! numpy's default and R type 7.

/// Computes the `q`-quantile of a sorted, finite slice.
///
/// Uses linear interpolation between closest ranks: for `n` values the
/// rank position is `h = (n - 1) * q`, and the result interpolates
/// between `sorted[floor(h)]` and `sorted[floor(h) + 1]`.
///
/// Returns `None` for an empty slice, where the quantile is undefined.
/// `q` must be in `[0, 1]` and `sorted` must be ascending.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * q;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = h.floor() as usize;
    let frac = h - h.floor();

    if lo + 1 >= n {
        return Some(sorted[n - 1]);
    }

    Some(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}

/// Computes the Tukey outlier fences `(lower, upper)` of a sorted slice.
///
/// `lower = Q1 - 1.5 * IQR`, `upper = Q3 + 1.5 * IQR`. When the IQR is
/// zero (all values identical or heavily tied) both fences collapse to
/// the shared quartile value, and only values strictly outside that
/// point count as outliers.
///
/// Returns `None` for an empty slice.
pub(crate) fn iqr_fences(sorted: &[f64]) -> Option<(f64, f64)> {
    let q1 = quantile(sorted, 0.25)?;
    let q3 = quantile(sorted, 0.75)?;
    let iqr = q3 - q1;

    Some((q1 - 1.5 * iqr, q3 + 1.5 * iqr))
}
