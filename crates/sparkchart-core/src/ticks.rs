// File: crates/sparkchart-core/src/ticks.rs
// Summary: Human-friendly tick generation (1-2-5 steps per decade).

use std::f64::consts::SQRT_2;

const SQRT_50: f64 = 7.0710678118654755;
const SQRT_10: f64 = 3.1622776601683795;

/// Integer tick indices `i1..=i2` and the increment between them.
///
/// A positive `inc` is the step itself (tick `i` sits at `i * inc`). A negative
/// `inc` encodes a fractional step as its reciprocal (tick `i` sits at
/// `i / -inc`), which keeps values like `0.1` exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpec {
    pub i1: f64,
    pub i2: f64,
    pub inc: f64,
}

impl TickSpec {
    /// Number of ticks described; zero when the index range is empty.
    pub fn len(&self) -> usize {
        if self.i2 >= self.i1 {
            (self.i2 - self.i1 + 1.0) as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn value(&self, i: f64) -> f64 {
        if self.inc < 0.0 {
            i / -self.inc
        } else {
            i * self.inc
        }
    }
}

/// Tick indices for roughly `count` ticks over ascending `[start, stop]`.
pub fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * k);
        i2 = round_half_up(stop * k);
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = round_half_up(start / k);
        i2 = round_half_up(stop / k);
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }

    // near-degenerate spans can round every candidate tick away
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    TickSpec { i1, i2, inc }
}

/// Roughly `count` evenly spaced round values within `[start, stop]`, in the
/// order of the inputs (descending when `stop < start`).
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let n = spec.len();
    if reverse {
        (0..n).map(|i| spec.value(spec.i2 - i as f64)).collect()
    } else {
        (0..n).map(|i| spec.value(spec.i1 + i as f64)).collect()
    }
}

/// Increment for ticks over `[start, stop]`, encoded as in [`TickSpec::inc`].
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).inc
}

/// Signed distance between adjacent ticks; negative for descending input.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Rounds to the nearest integer with halves going towards positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}
