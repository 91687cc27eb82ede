// File: crates/sparkchart-core/src/bisect.rs
// Summary: Binary search over sorted slices (left/right insertion points, nearest neighbour).

use std::cmp::Ordering;
use std::ops::Range;

/// Leftmost insertion point for `x` in the non-decreasing slice `a`.
pub fn bisect_left<T: PartialOrd>(a: &[T], x: &T) -> usize {
    bisect_left_in(a, x, 0..a.len())
}

/// Rightmost insertion point for `x` in the non-decreasing slice `a`.
pub fn bisect_right<T: PartialOrd>(a: &[T], x: &T) -> usize {
    bisect_right_in(a, x, 0..a.len())
}

/// Index of the element nearest to `x`; equal distances resolve to the lower index.
pub fn bisect_center(a: &[f64], x: f64) -> usize {
    bisect_center_in(a, x, 0..a.len())
}

/// [`bisect_left`] restricted to `range`. Returns `range.end` when `x` is not
/// comparable with itself (NaN).
pub fn bisect_left_in<T: PartialOrd>(a: &[T], x: &T, range: Range<usize>) -> usize {
    search(a, x, range, |o| o == Some(Ordering::Less))
}

/// [`bisect_right`] restricted to `range`. Returns `range.end` when `x` is not
/// comparable with itself (NaN).
pub fn bisect_right_in<T: PartialOrd>(a: &[T], x: &T, range: Range<usize>) -> usize {
    search(a, x, range, |o| matches!(o, Some(Ordering::Less | Ordering::Equal)))
}

/// [`bisect_center`] restricted to `range`.
pub fn bisect_center_in(a: &[f64], x: f64, range: Range<usize>) -> usize {
    let Range { start: lo, end: hi } = range;
    if lo >= hi {
        return lo;
    }
    let i = bisect_left_in(a, &x, lo..hi - 1);
    if i > lo && x - a[i - 1] <= a[i] - x {
        i - 1
    } else {
        i
    }
}

// `go_right` decides, from the comparison of a[mid] against x, whether the
// insertion point lies strictly after mid.
fn search<T: PartialOrd>(
    a: &[T],
    x: &T,
    range: Range<usize>,
    go_right: impl Fn(Option<Ordering>) -> bool,
) -> usize {
    let Range { start: mut lo, end: mut hi } = range;
    if lo < hi {
        if x.partial_cmp(x) != Some(Ordering::Equal) {
            return hi;
        }
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if go_right(a[mid].partial_cmp(x)) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
    }
    lo
}
