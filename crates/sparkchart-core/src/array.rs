// File: crates/sparkchart-core/src/array.rs
// Summary: Extent and arithmetic range helpers over numeric sequences.

/// Minimum and maximum of `values` in one pass, skipping missing and NaN
/// entries. Returns `None` when nothing comparable was seen.
///
/// Accepts plain `f64` items as well as `Option<f64>` (gaps).
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    let mut out: Option<(f64, f64)> = None;
    for v in values.into_iter().filter_map(Into::into) {
        if v.is_nan() {
            continue;
        }
        out = Some(match out {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    out
}

/// `0, 1, .., stop - 1` as floats.
pub fn range(stop: f64) -> Vec<f64> {
    range_by(0.0, stop, 1.0)
}

/// Arithmetic sequence `start + i * step` for every `i` with the value still
/// short of `stop`. `step` may be negative; the result is empty when
/// `(stop - start) / step <= 0` or is not finite (zero step).
pub fn range_by(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !(n > 0.0 && n.is_finite()) {
        return Vec::new();
    }
    (0..n as usize).map(|i| start + i as f64 * step).collect()
}
