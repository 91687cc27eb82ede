// File: crates/sparkchart-core/src/scale/linear.rs
// Summary: Continuous linear scale (normalize + interpolate), piecewise domains, clamping and nice().

use tracing::trace;

use crate::bisect::bisect_right_in;
use crate::ticks::{round_half_up, tick_increment, ticks};

/// How range values are blended once an input has been normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interpolate {
    #[default]
    Number,
    /// Number interpolation rounded to integers (pixel snapping).
    Round,
}

impl Interpolate {
    #[inline]
    fn apply(self, a: f64, b: f64, t: f64) -> f64 {
        let v = a * (1.0 - t) + b * t;
        match self {
            Interpolate::Number => v,
            Interpolate::Round => round_half_up(v),
        }
    }
}

/// Linear scale configuration. Domain and range hold at least two stops
/// each for a meaningful mapping; with more than two the scale is piecewise.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSpec {
    domain: Vec<f64>,
    range: Vec<f64>,
    clamp: bool,
    interpolate: Interpolate,
    unknown: f64,
}

impl Default for LinearSpec {
    fn default() -> Self {
        Self {
            domain: vec![0.0, 1.0],
            range: vec![0.0, 1.0],
            clamp: false,
            interpolate: Interpolate::Number,
            unknown: f64::NAN,
        }
    }
}

impl LinearSpec {
    pub fn new(domain: impl Into<Vec<f64>>, range: impl Into<Vec<f64>>) -> Self {
        Self { domain: domain.into(), range: range.into(), ..Self::default() }
    }

    pub fn with_domain(mut self, domain: impl Into<Vec<f64>>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_range(mut self, range: impl Into<Vec<f64>>) -> Self {
        self.range = range.into();
        self
    }

    /// Sets the range and switches to rounding interpolation.
    pub fn with_range_round(mut self, range: impl Into<Vec<f64>>) -> Self {
        self.range = range.into();
        self.interpolate = Interpolate::Round;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_interpolate(mut self, interpolate: Interpolate) -> Self {
        self.interpolate = interpolate;
        self
    }

    /// Output for NaN inputs.
    pub fn with_unknown(mut self, unknown: f64) -> Self {
        self.unknown = unknown;
        self
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn range(&self) -> &[f64] {
        &self.range
    }

    pub fn clamp(&self) -> bool {
        self.clamp
    }

    pub fn interpolate(&self) -> Interpolate {
        self.interpolate
    }

    pub fn unknown(&self) -> f64 {
        self.unknown
    }

    /// Roughly `count` round values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match (self.domain.first(), self.domain.last()) {
            (Some(&a), Some(&b)) => ticks(a, b, count as f64),
            _ => Vec::new(),
        }
    }

    /// Extends the domain ends outward to multiples of the tick increment
    /// for `count` ticks. Repeats until the increment stops changing, at
    /// most ten times; if it never settles the domain is left as it was.
    pub fn nice(mut self, count: usize) -> Self {
        let len = self.domain.len();
        if len < 2 {
            return self;
        }
        let count = count as f64;
        let (mut i0, mut i1) = (0, len - 1);
        let (mut start, mut stop) = (self.domain[i0], self.domain[i1]);
        if stop < start {
            std::mem::swap(&mut start, &mut stop);
            std::mem::swap(&mut i0, &mut i1);
        }

        let mut prestep: Option<f64> = None;
        for iteration in 0..10 {
            let step = tick_increment(start, stop, count);
            trace!(iteration, start, stop, step, "nice");
            if prestep == Some(step) {
                self.domain[i0] = start;
                self.domain[i1] = stop;
                return self;
            } else if step > 0.0 && step.is_finite() {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 && step.is_finite() {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    pub fn build(&self) -> LinearScale {
        let n = self.domain.len().min(self.range.len());
        let clamp = self.clamp.then(|| {
            let a = self.domain.first().copied().unwrap_or(f64::NAN);
            let b = n.checked_sub(1).map_or(f64::NAN, |last| self.domain[last]);
            if a > b {
                (b, a)
            } else {
                (a, b)
            }
        });
        LinearScale {
            output: Piecewise::new(&self.domain, &self.range, self.interpolate),
            input: Piecewise::new(&self.range, &self.domain, Interpolate::Number),
            clamp,
            spec: self.clone(),
        }
    }
}

/// Built linear scale: `map` goes from domain to range, `invert` back.
#[derive(Clone, Debug)]
pub struct LinearScale {
    spec: LinearSpec,
    output: Piecewise,
    input: Piecewise,
    clamp: Option<(f64, f64)>,
}

impl LinearScale {
    pub fn map(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.spec.unknown;
        }
        self.output.apply(self.clamp_input(x))
    }

    /// Domain value for range value `y`, clamped to the domain when clamping
    /// is enabled.
    pub fn invert(&self, y: f64) -> f64 {
        self.clamp_input(self.input.apply(y))
    }

    pub fn domain(&self) -> &[f64] {
        self.spec.domain()
    }

    pub fn range(&self) -> &[f64] {
        self.spec.range()
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.spec.ticks(count)
    }

    /// Configuration this scale was built from.
    pub fn spec(&self) -> &LinearSpec {
        &self.spec
    }

    #[inline]
    fn clamp_input(&self, x: f64) -> f64 {
        match self.clamp {
            Some((lo, _)) if x < lo => lo,
            Some((_, hi)) if x > hi => hi,
            _ => x,
        }
    }
}

/// Maps `a -> 0` and `b -> 1`.
#[derive(Clone, Copy, Debug)]
enum Normalize {
    Linear { a: f64, span: f64 },
    /// Degenerate interval: 0.5 when `a == b`, NaN when undefined.
    Constant(f64),
}

impl Normalize {
    fn new(a: f64, b: f64) -> Self {
        let span = b - a;
        if span.is_nan() {
            Normalize::Constant(f64::NAN)
        } else if span == 0.0 {
            Normalize::Constant(0.5)
        } else {
            Normalize::Linear { a, span }
        }
    }

    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            Normalize::Linear { a, span } => (x - a) / span,
            Normalize::Constant(t) => t,
        }
    }
}

/// One domain interval paired with its range interval.
#[derive(Clone, Copy, Debug)]
struct Segment {
    normalize: Normalize,
    r0: f64,
    r1: f64,
    interpolate: Interpolate,
}

impl Segment {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        self.interpolate.apply(self.r0, self.r1, self.normalize.apply(x))
    }
}

#[derive(Clone, Debug)]
enum Piecewise {
    Bimap(Segment),
    /// `breaks` is ascending; segment `i` covers `breaks[i]..breaks[i + 1]`.
    Polymap { breaks: Vec<f64>, segments: Vec<Segment> },
}

impl Piecewise {
    fn new(domain: &[f64], range: &[f64], interpolate: Interpolate) -> Self {
        let n = domain.len().min(range.len());
        if n > 2 {
            return Self::polymap(&domain[..n], &range[..n], interpolate);
        }
        let at = |v: &[f64], i: usize| v.get(i).copied().unwrap_or(f64::NAN);
        let (d0, d1, r0, r1) = (at(domain, 0), at(domain, 1), at(range, 0), at(range, 1));
        let segment = if d1 < d0 {
            Segment { normalize: Normalize::new(d1, d0), r0: r1, r1: r0, interpolate }
        } else {
            Segment { normalize: Normalize::new(d0, d1), r0, r1, interpolate }
        };
        Piecewise::Bimap(segment)
    }

    fn polymap(domain: &[f64], range: &[f64], interpolate: Interpolate) -> Self {
        let mut breaks = domain.to_vec();
        let mut outputs = range.to_vec();
        let j = breaks.len() - 1;
        if breaks[j] < breaks[0] {
            breaks.reverse();
            outputs.reverse();
        }
        let segments = (0..j)
            .map(|i| Segment {
                normalize: Normalize::new(breaks[i], breaks[i + 1]),
                r0: outputs[i],
                r1: outputs[i + 1],
                interpolate,
            })
            .collect();
        Piecewise::Polymap { breaks, segments }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Piecewise::Bimap(segment) => segment.apply(x),
            Piecewise::Polymap { breaks, segments } => {
                let i = bisect_right_in(breaks, &x, 1..segments.len()) - 1;
                segments[i].apply(x)
            }
        }
    }
}
