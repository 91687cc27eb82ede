// File: crates/sparkchart-core/src/shape.rs
// Summary: Line and area generators feeding optional points through a curve into a path string.

use crate::curve::{Curve, CurveKind};
use crate::error::Result;
use crate::path::{PathBuilder, DEFAULT_DIGITS};

/// Path builder for an optional precision (`None` = full precision).
pub(crate) fn path_for(digits: Option<f64>) -> Result<PathBuilder> {
    match digits {
        Some(d) => PathBuilder::with_digits(d),
        None => Ok(PathBuilder::unrounded()),
    }
}

/// Line generator. `None` entries are gaps: they end the current run and
/// the next defined point starts a new subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGenerator {
    curve: CurveKind,
    digits: Option<f64>,
}

impl Default for LineGenerator {
    fn default() -> Self {
        Self { curve: CurveKind::Linear, digits: Some(DEFAULT_DIGITS as f64) }
    }
}

impl LineGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_digits(mut self, digits: Option<f64>) -> Self {
        self.digits = digits;
        self
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    pub fn digits(&self) -> Option<f64> {
        self.digits
    }

    /// Path data for `points`, or `None` when nothing was drawn.
    pub fn generate<I>(&self, points: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = Option<(f64, f64)>>,
    {
        let mut path = path_for(self.digits)?;
        {
            let mut curve = self.curve.curve(&mut path);
            let mut defined = false;
            for p in points {
                match (p, defined) {
                    (Some((x, y)), false) => {
                        curve.line_start();
                        curve.point(x, y);
                        defined = true;
                    }
                    (Some((x, y)), true) => curve.point(x, y),
                    (None, true) => {
                        curve.line_end();
                        defined = false;
                    }
                    (None, false) => {}
                }
            }
            if defined {
                curve.line_end();
            }
        }
        Ok((!path.is_empty()).then(|| path.finish()))
    }
}

/// One column of an area: top `y1` and base `y0` at `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaPoint {
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Area generator: each defined run is outlined along `y1` left to right,
/// then back along `y0`, and closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaGenerator {
    curve: CurveKind,
    digits: Option<f64>,
}

impl Default for AreaGenerator {
    fn default() -> Self {
        Self { curve: CurveKind::Linear, digits: Some(DEFAULT_DIGITS as f64) }
    }
}

impl AreaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_digits(mut self, digits: Option<f64>) -> Self {
        self.digits = digits;
        self
    }

    pub fn generate<I>(&self, points: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = Option<AreaPoint>>,
    {
        let mut path = path_for(self.digits)?;
        {
            let mut curve = self.curve.curve(&mut path);
            let mut base: Vec<(f64, f64)> = Vec::new();
            let mut defined = false;
            for p in points {
                match p {
                    Some(p) => {
                        if !defined {
                            defined = true;
                            base.clear();
                            curve.area_start();
                            curve.line_start();
                        }
                        base.push((p.x, p.y0));
                        curve.point(p.x, p.y1);
                    }
                    None if defined => {
                        close_run(curve.as_mut(), &base);
                        defined = false;
                    }
                    None => {}
                }
            }
            if defined {
                close_run(curve.as_mut(), &base);
            }
        }
        Ok((!path.is_empty()).then(|| path.finish()))
    }
}

fn close_run<C: Curve + ?Sized>(curve: &mut C, base: &[(f64, f64)]) {
    curve.line_end();
    curve.line_start();
    for &(x, y) in base.iter().rev() {
        curve.point(x, y);
    }
    curve.line_end();
    curve.area_end();
}
