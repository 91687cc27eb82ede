// File: crates/sparkchart-core/src/curve.rs
// Summary: Curve engines turning a point stream into path primitives (linear, cardinal, Catmull-Rom).
//
// A curve is stateful over one stream: `line_start`, then `point` in order,
// then `line_end`. Call `line_start` again before feeding another stream.

use crate::path::PathSink;

const EPSILON: f64 = 1e-12;

/// Point-stream consumer emitting into a [`PathSink`].
pub trait Curve {
    /// Marks the start of an area outline: two lines follow, the second
    /// continuing the first and closing the shape.
    fn area_start(&mut self);
    fn area_end(&mut self);
    fn line_start(&mut self);
    fn line_end(&mut self);
    fn point(&mut self, x: f64, y: f64);
}

/// Which curve to build and its parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
    /// Straight segments between points.
    Linear,
    /// Cardinal spline; `tension` 0 is a uniform Catmull-Rom, 1 straight lines.
    Cardinal { tension: f64 },
    /// Catmull-Rom spline with chord lengths raised to `alpha` (0.5 is centripetal).
    CatmullRom { alpha: f64 },
}

impl Default for CurveKind {
    fn default() -> Self {
        CurveKind::CatmullRom { alpha: 0.5 }
    }
}

impl CurveKind {
    /// Fresh curve writing into `sink`.
    pub fn curve<'a, S: PathSink + 'a>(self, sink: &'a mut S) -> Box<dyn Curve + 'a> {
        match self {
            CurveKind::Linear => Box::new(Linear::new(sink)),
            CurveKind::Cardinal { tension } => Box::new(Cardinal::new(sink, tension)),
            // alpha 0 is the uniform parameterization
            CurveKind::CatmullRom { alpha } if alpha == 0.0 || alpha.is_nan() => {
                Box::new(Cardinal::new(sink, 0.0))
            }
            CurveKind::CatmullRom { alpha } => Box::new(CatmullRom::new(sink, alpha)),
        }
    }
}

/// How many points the current line has received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Empty,
    One,
    Two,
    /// Three or more points: every new point completes a segment.
    Streaming,
}

/// Whether lines stand alone or form the two halves of an area outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Contour {
    Line,
    AreaUpper,
    AreaLower,
}

impl Contour {
    fn begin<S: PathSink>(self, sink: &mut S, x: f64, y: f64) {
        match self {
            Contour::AreaLower => sink.line_to(x, y),
            Contour::Line | Contour::AreaUpper => sink.move_to(x, y),
        }
    }

    fn end<S: PathSink>(self, sink: &mut S, stage: Stage) -> Self {
        match self {
            Contour::AreaLower => {
                sink.close_path();
                Contour::AreaUpper
            }
            Contour::AreaUpper => Contour::AreaLower,
            Contour::Line => {
                // a lone point still yields a visible (closed) subpath
                if stage == Stage::One {
                    sink.close_path();
                }
                Contour::Line
            }
        }
    }
}

/// Polyline through the points.
pub struct Linear<'a, S: PathSink> {
    sink: &'a mut S,
    contour: Contour,
    stage: Stage,
}

impl<'a, S: PathSink> Linear<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, contour: Contour::Line, stage: Stage::Empty }
    }
}

impl<S: PathSink> Curve for Linear<'_, S> {
    fn area_start(&mut self) {
        self.contour = Contour::AreaUpper;
    }

    fn area_end(&mut self) {
        self.contour = Contour::Line;
    }

    fn line_start(&mut self) {
        self.stage = Stage::Empty;
    }

    fn line_end(&mut self) {
        self.contour = self.contour.end(&mut *self.sink, self.stage);
    }

    fn point(&mut self, x: f64, y: f64) {
        self.stage = match self.stage {
            Stage::Empty => {
                self.contour.begin(&mut *self.sink, x, y);
                Stage::One
            }
            Stage::One | Stage::Two | Stage::Streaming => {
                self.sink.line_to(x, y);
                Stage::Two
            }
        };
    }
}

/// Cardinal spline: the tangent at each point is parallel to the chord
/// between its neighbours, scaled by `(1 - tension)`.
pub struct Cardinal<'a, S: PathSink> {
    sink: &'a mut S,
    k: f64,
    contour: Contour,
    stage: Stage,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
}

impl<'a, S: PathSink> Cardinal<'a, S> {
    pub fn new(sink: &'a mut S, tension: f64) -> Self {
        Self {
            sink,
            k: (1.0 - tension) / 6.0,
            contour: Contour::Line,
            stage: Stage::Empty,
            p0: (f64::NAN, f64::NAN),
            p1: (f64::NAN, f64::NAN),
            p2: (f64::NAN, f64::NAN),
        }
    }

    fn first(&mut self, x: f64, y: f64) -> Stage {
        self.contour.begin(&mut *self.sink, x, y);
        Stage::One
    }

    fn second(&mut self, x: f64, y: f64) -> Stage {
        // mirrors the second point so the first segment starts flat
        self.p1 = (x, y);
        Stage::Two
    }

    fn next(&mut self, x: f64, y: f64) -> Stage {
        self.segment(x, y);
        Stage::Streaming
    }

    /// Bezier from `p1` to `p2`, with `(x, y)` the point after `p2`.
    fn segment(&mut self, x: f64, y: f64) {
        let (k, (x0, y0), (x1, y1), (x2, y2)) = (self.k, self.p0, self.p1, self.p2);
        self.sink.bezier_curve_to(
            x1 + k * (x2 - x0),
            y1 + k * (y2 - y0),
            x2 + k * (x1 - x),
            y2 + k * (y1 - y),
            x2,
            y2,
        );
    }
}

impl<S: PathSink> Curve for Cardinal<'_, S> {
    fn area_start(&mut self) {
        self.contour = Contour::AreaUpper;
    }

    fn area_end(&mut self) {
        self.contour = Contour::Line;
    }

    fn line_start(&mut self) {
        self.p0 = (f64::NAN, f64::NAN);
        self.p1 = (f64::NAN, f64::NAN);
        self.p2 = (f64::NAN, f64::NAN);
        self.stage = Stage::Empty;
    }

    fn line_end(&mut self) {
        match self.stage {
            Stage::Two => self.sink.line_to(self.p2.0, self.p2.1),
            Stage::Streaming => self.segment(self.p1.0, self.p1.1),
            Stage::Empty | Stage::One => {}
        }
        self.contour = self.contour.end(&mut *self.sink, self.stage);
    }

    fn point(&mut self, x: f64, y: f64) {
        self.stage = match self.stage {
            Stage::Empty => self.first(x, y),
            Stage::One => self.second(x, y),
            Stage::Two | Stage::Streaming => self.next(x, y),
        };
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = (x, y);
    }
}

/// Catmull-Rom spline parameterized by chord length raised to `alpha`.
///
/// Compared with the uniform variant, centripetal weighting (`alpha = 0.5`)
/// keeps segments between unevenly spaced samples free of cusps and loops.
pub struct CatmullRom<'a, S: PathSink> {
    sink: &'a mut S,
    alpha: f64,
    contour: Contour,
    stage: Stage,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    // chord lengths^alpha (l*_a) and ^(2 alpha) (l*_2a) between p0-p1, p1-p2, p2-next
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl<'a, S: PathSink> CatmullRom<'a, S> {
    pub fn new(sink: &'a mut S, alpha: f64) -> Self {
        Self {
            sink,
            alpha,
            contour: Contour::Line,
            stage: Stage::Empty,
            p0: (f64::NAN, f64::NAN),
            p1: (f64::NAN, f64::NAN),
            p2: (f64::NAN, f64::NAN),
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn first(&mut self, x: f64, y: f64) -> Stage {
        self.contour.begin(&mut *self.sink, x, y);
        Stage::One
    }

    fn second(&mut self) -> Stage {
        Stage::Two
    }

    fn next(&mut self, x: f64, y: f64) -> Stage {
        self.segment(x, y);
        Stage::Streaming
    }

    fn segment(&mut self, x: f64, y: f64) {
        let ((x0, y0), (mut x1, mut y1), (mut x2, mut y2)) = (self.p0, self.p1, self.p2);
        let (px2, py2) = self.p2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            x1 = (x1 * a - x0 * self.l12_2a + px2 * self.l01_2a) / n;
            y1 = (y1 * a - y0 * self.l12_2a + py2 * self.l01_2a) / n;
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            x2 = (x2 * b + self.p1.0 * self.l23_2a - x * self.l12_2a) / m;
            y2 = (y2 * b + self.p1.1 * self.l23_2a - y * self.l12_2a) / m;
        }

        self.sink.bezier_curve_to(x1, y1, x2, y2, px2, py2);
    }
}

impl<S: PathSink> Curve for CatmullRom<'_, S> {
    fn area_start(&mut self) {
        self.contour = Contour::AreaUpper;
    }

    fn area_end(&mut self) {
        self.contour = Contour::Line;
    }

    fn line_start(&mut self) {
        self.p0 = (f64::NAN, f64::NAN);
        self.p1 = (f64::NAN, f64::NAN);
        self.p2 = (f64::NAN, f64::NAN);
        self.l01_a = 0.0;
        self.l12_a = 0.0;
        self.l23_a = 0.0;
        self.l01_2a = 0.0;
        self.l12_2a = 0.0;
        self.l23_2a = 0.0;
        self.stage = Stage::Empty;
    }

    fn line_end(&mut self) {
        match self.stage {
            Stage::Two => self.sink.line_to(self.p2.0, self.p2.1),
            // repeating the last point flushes the final segment
            Stage::Streaming => self.point(self.p2.0, self.p2.1),
            Stage::Empty | Stage::One => {}
        }
        self.contour = self.contour.end(&mut *self.sink, self.stage);
    }

    fn point(&mut self, x: f64, y: f64) {
        if self.stage != Stage::Empty {
            let (dx, dy) = (self.p2.0 - x, self.p2.1 - y);
            self.l23_2a = (dx * dx + dy * dy).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }

        self.stage = match self.stage {
            Stage::Empty => self.first(x, y),
            Stage::One => self.second(),
            Stage::Two | Stage::Streaming => self.next(x, y),
        };

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = (x, y);
    }
}
