// File: crates/sparkchart-core/src/path.rs
// Summary: Path accumulator serializing drawing primitives into SVG path data.

use std::f64::consts::{PI, TAU};
use std::fmt::{self, Write as _};

use crate::error::{Error, Result};
use crate::ticks::round_half_up;

const EPSILON: f64 = 1e-6;
const TAU_EPSILON: f64 = TAU - EPSILON;

/// Default number of fractional digits kept when formatting coordinates.
pub const DEFAULT_DIGITS: u32 = 3;

/// Receiver of the primitives a curve emits.
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    fn close_path(&mut self);
}

/// Growing SVG path string plus the current point and subpath start.
///
/// Coordinates are rounded when written, never when stored, so repeated
/// relative computations do not accumulate rounding error.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    buf: String,
    // 10^digits; None writes full precision
    scale: Option<f64>,
    start: Option<(f64, f64)>,
    current: Option<(f64, f64)>,
}

impl PathBuilder {
    /// Builder rounding to [`DEFAULT_DIGITS`] fractional digits.
    pub fn new() -> Self {
        Self { scale: Some(10f64.powi(DEFAULT_DIGITS as i32)), ..Self::default() }
    }

    /// Builder rounding to `floor(digits)` fractional digits. More than 15
    /// digits means no rounding at all.
    pub fn with_digits(digits: f64) -> Result<Self> {
        let d = digits.floor();
        if !(d >= 0.0) || d.is_infinite() {
            return Err(Error::InvalidDigits(digits));
        }
        let scale = (d <= 15.0).then(|| 10f64.powi(d as i32));
        Ok(Self { scale, ..Self::default() })
    }

    /// Builder writing coordinates at full precision.
    pub fn unrounded() -> Self {
        Self::default()
    }

    /// Current point, if any primitive has been drawn.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the builder, returning the path data.
    pub fn finish(self) -> String {
        self.buf
    }

    pub fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.current = Some((x, y));
        self.command('Q', &[x1, y1, x, y]);
    }

    /// Line towards the corner `(x1, y1)` rounded by a circular arc of
    /// radius `r` tangent to both `current -> (x1, y1)` and
    /// `(x1, y1) -> (x2, y2)`.
    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, r: f64) -> Result<()> {
        if r < 0.0 {
            return Err(Error::NegativeRadius(r));
        }

        let Some((x0, y0)) = self.current else {
            self.current = Some((x1, y1));
            self.command('M', &[x1, y1]);
            return Ok(());
        };

        let (x21, y21) = (x2 - x1, y2 - y1);
        let (x01, y01) = (x0 - x1, y0 - y1);
        let l01_2 = x01 * x01 + y01 * y01;

        // (x1, y1) coincides with the current point
        if !(l01_2 > EPSILON) {
            return Ok(());
        }

        // collinear control points, or no rounding requested
        if !((y01 * x21 - y21 * x01).abs() > EPSILON) || r == 0.0 {
            self.current = Some((x1, y1));
            self.command('L', &[x1, y1]);
            return Ok(());
        }

        let (x20, y20) = (x2 - x0, y2 - y0);
        let l21_2 = x21 * x21 + y21 * y21;
        let l20_2 = x20 * x20 + y20 * y20;
        let l21 = l21_2.sqrt();
        let l01 = l01_2.sqrt();
        let l = r * ((PI - ((l21_2 + l01_2 - l20_2) / (2.0 * l21 * l01)).acos()) / 2.0).tan();
        let t01 = l / l01;
        let t21 = l / l21;

        if (t01 - 1.0).abs() > EPSILON {
            self.command('L', &[x1 + t01 * x01, y1 + t01 * y01]);
        }

        let sweep = if y01 * x20 > x01 * y20 { 1.0 } else { 0.0 };
        let end = (x1 + t21 * x21, y1 + t21 * y21);
        self.current = Some(end);
        self.command('A', &[r, r, 0.0, 0.0, sweep, end.0, end.1]);
        Ok(())
    }

    /// Circular arc centred on `(x, y)` from angle `a0` to `a1` (radians),
    /// clockwise unless `ccw`. Connects to the current point with a line
    /// when the arc does not start there.
    pub fn arc(&mut self, x: f64, y: f64, r: f64, a0: f64, a1: f64, ccw: bool) -> Result<()> {
        if r < 0.0 {
            return Err(Error::NegativeRadius(r));
        }

        let (dx, dy) = (r * a0.cos(), r * a0.sin());
        let (x0, y0) = (x + dx, y + dy);
        let cw = if ccw { 0.0 } else { 1.0 };
        let mut da = if ccw { a0 - a1 } else { a1 - a0 };

        match self.current {
            None => {
                self.current = Some((x0, y0));
                self.command('M', &[x0, y0]);
            }
            Some((cx, cy)) if (cx - x0).abs() > EPSILON || (cy - y0).abs() > EPSILON => {
                self.current = Some((x0, y0));
                self.command('L', &[x0, y0]);
            }
            Some(_) => {}
        }

        if r == 0.0 {
            return Ok(());
        }

        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU_EPSILON {
            // a single arc command cannot draw a full circle
            self.command('A', &[r, r, 0.0, 1.0, cw, x - dx, y - dy]);
            self.current = Some((x0, y0));
            self.command('A', &[r, r, 0.0, 1.0, cw, x0, y0]);
        } else if da > EPSILON {
            let large = if da >= PI { 1.0 } else { 0.0 };
            let end = (x + r * a1.cos(), y + r * a1.sin());
            self.current = Some(end);
            self.command('A', &[r, r, 0.0, large, cw, end.0, end.1]);
        }
        Ok(())
    }

    /// Closed axis-aligned rectangle as its own subpath.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.start = Some((x, y));
        self.current = Some((x, y));
        self.command('M', &[x, y]);
        self.command('h', &[w]);
        self.command('v', &[h]);
        self.command('h', &[-w]);
        self.buf.push('Z');
    }

    fn command(&mut self, letter: char, args: &[f64]) {
        self.buf.push(letter);
        for (i, &v) in args.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.push_number(v);
        }
    }

    fn push_number(&mut self, v: f64) {
        let v = match self.scale {
            Some(k) => round_half_up(v * k) / k,
            None => v,
        };
        // -0 prints as 0
        let v = if v == 0.0 { 0.0 } else { v };
        let _ = write!(self.buf, "{v}");
    }
}

impl PathSink for PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.current = Some((x, y));
        self.command('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current = Some((x, y));
        self.command('L', &[x, y]);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.current = Some((x, y));
        self.command('C', &[x1, y1, x2, y2, x, y]);
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.current = self.start;
            self.buf.push('Z');
        }
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
