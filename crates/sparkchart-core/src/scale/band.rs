// File: crates/sparkchart-core/src/scale/band.rs
// Summary: Band scale splitting a pixel interval into equal slots for discrete inputs.

use std::hash::Hash;

use crate::scale::ordinal::{OrdinalScale, Unknown};
use crate::ticks::round_half_up;

/// Band scale configuration (domain + output interval + layout options).
///
/// Padding is expressed as a fraction of the step: `padding_inner` is the
/// gap between bands, `padding_outer` the space before the first and after
/// the last band. `align` places the leftover space (0 = packed at the
/// start, 1 = packed at the end).
#[derive(Clone, Debug, PartialEq)]
pub struct BandSpec<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

impl<K> Default for BandSpec<K> {
    fn default() -> Self {
        Self {
            domain: Vec::new(),
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }
}

impl<K: Clone> BandSpec<K> {
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        Self { domain: domain.into_iter().collect(), range, ..Self::default() }
    }

    pub fn with_domain(mut self, domain: impl IntoIterator<Item = K>) -> Self {
        self.domain = domain.into_iter().collect();
        self
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self
    }

    /// Sets the range and enables rounding in one step.
    pub fn with_range_round(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self.round = true;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Sets outer padding to `padding` and inner padding to `min(1, padding)`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_outer = padding;
        self.padding_inner = padding.min(1.0);
        self
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.min(1.0);
        self
    }

    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding;
        self
    }

    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    pub fn padding_outer(&self) -> f64 {
        self.padding_outer
    }

    pub fn align(&self) -> f64 {
        self.align
    }

    pub fn round(&self) -> bool {
        self.round
    }
}

impl<K: Hash + Eq + Clone> BandSpec<K> {
    pub fn build(&self) -> BandScale<K> {
        self.build_with_key(K::clone)
    }
}

impl<K: Clone> BandSpec<K> {
    /// Builds the scale with domain identity given by `key_fn`.
    pub fn build_with_key<Q: Hash + Eq>(&self, key_fn: fn(&K) -> Q) -> BandScale<K, Q> {
        let mut ordinal = OrdinalScale::with_key(key_fn)
            .with_domain(self.domain.iter().cloned())
            .with_unknown(Unknown::Undefined);

        let n = ordinal.domain().len() as f64;
        let (r0, r1) = self.range;
        let reverse = r1 < r0;
        let (mut start, stop) = if reverse { (r1, r0) } else { (r0, r1) };

        let mut step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (n - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = round_half_up(start);
            bandwidth = round_half_up(bandwidth);
        }

        let mut values: Vec<f64> = (0..ordinal.domain().len()).map(|i| start + step * i as f64).collect();
        if reverse {
            values.reverse();
        }
        ordinal.set_range(values);

        BandScale { ordinal, range: self.range, step, bandwidth }
    }
}

/// Built band scale: maps each domain value to the start of its band.
#[derive(Clone, Debug)]
pub struct BandScale<K, Q = K> {
    ordinal: OrdinalScale<K, f64, Q>,
    range: (f64, f64),
    step: f64,
    bandwidth: f64,
}

impl<K: Clone, Q: Hash + Eq> BandScale<K, Q> {
    /// Start coordinate of the band for `value`, or `None` outside the domain.
    pub fn map(&self, value: &K) -> Option<f64> {
        self.ordinal.get(value)
    }

    /// Centre coordinate of the band for `value`.
    pub fn center(&self, value: &K) -> Option<f64> {
        self.map(value).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        self.ordinal.domain()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Band start coordinates in domain order.
    pub fn band_starts(&self) -> &[f64] {
        self.ordinal.range()
    }
}
