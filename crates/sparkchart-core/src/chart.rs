// File: crates/sparkchart-core/src/chart.rs
// Summary: Chart assembly: band x-scale over indices, niced linear y-scale, marks rendered as path data.

use std::f64::consts::TAU;

use tracing::debug;

use crate::array::extent;
use crate::curve::CurveKind;
use crate::error::Result;
use crate::path::{PathBuilder, PathSink, DEFAULT_DIGITS};
use crate::scale::{BandScale, BandSpec, LinearScale, LinearSpec};
use crate::shape::{path_for, AreaGenerator, AreaPoint, LineGenerator};

/// Default outer width in pixels.
pub const WIDTH: f64 = 500.0;
/// Default outer height in pixels.
pub const HEIGHT: f64 = 200.0;

/// Layout and styling knobs for one render.
///
/// The drawable viewport is the outer size minus `padding` on every side;
/// inside it, points sit `padding` away from each edge again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Gap between bands as a fraction of the band step.
    pub padding_inner: f64,
    pub padding_outer: f64,
    pub align: f64,
    /// Tick count driving `nice()` on the y-domain.
    pub tick_count: usize,
    pub curve: CurveKind,
    /// Fractional digits in path data; `None` keeps full precision.
    pub digits: Option<f64>,
    pub dot_radius: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: 10.0,
            padding_inner: 0.05,
            padding_outer: 0.0,
            align: 0.5,
            tick_count: 10,
            curve: CurveKind::default(),
            digits: Some(DEFAULT_DIGITS as f64),
            dot_radius: 5.0,
        }
    }
}

impl ChartOptions {
    /// Thumbnail preset: 250x100 with 5px padding.
    pub fn small() -> Self {
        Self { width: 250.0, height: 100.0, padding: 5.0, ..Self::default() }
    }

    /// Drawable width and height.
    pub fn viewport(&self) -> (f64, f64) {
        (self.width - self.padding * 2.0, self.height - self.padding * 2.0)
    }
}

/// Something a chart can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Curve through the values.
    Line,
    /// Curve filled down to the zero baseline.
    Area,
    /// One rectangle per value from the baseline.
    Bars,
    /// One circle per value.
    Dots,
}

/// Everything a caller needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Y coordinate of value zero.
    pub baseline_y: f64,
    /// Path data per requested mark; marks with nothing to draw are omitted.
    pub paths: Vec<(Mark, String)>,
}

/// A series bound to its scales. Index `i` owns band `i` on the x-axis,
/// including gaps (`None`), which simply draw nothing.
#[derive(Clone, Debug)]
pub struct Chart {
    values: Vec<Option<f64>>,
    x: BandScale<usize>,
    y: LinearScale,
    opts: ChartOptions,
}

impl Chart {
    pub fn new<I>(values: I, opts: &ChartOptions) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<f64>>,
    {
        let values: Vec<Option<f64>> = values.into_iter().map(Into::into).collect();
        let (w, h) = opts.viewport();
        let p = opts.padding;

        let x = BandSpec::new(0..values.len(), (p, w - p))
            .with_padding_inner(opts.padding_inner)
            .with_padding_outer(opts.padding_outer)
            .with_align(opts.align)
            .build();

        let (lo, hi) = extent(values.iter().copied()).unwrap_or((f64::NAN, f64::NAN));
        let y = LinearSpec::new([lo, hi], [h - p, p]).nice(opts.tick_count).build();

        debug!(
            points = values.len(),
            extent = ?(lo, hi),
            y_domain = ?y.domain(),
            step = x.step(),
            bandwidth = x.bandwidth(),
            "chart scales built"
        );

        Self { values, x, y, opts: *opts }
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn x_scale(&self) -> &BandScale<usize> {
        &self.x
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    pub fn options(&self) -> &ChartOptions {
        &self.opts
    }

    /// Y coordinate of value zero; may fall outside the viewport.
    pub fn baseline_y(&self) -> f64 {
        self.y.map(0.0)
    }

    /// Centre of band `i` and the scaled value there, for defined values.
    pub fn point(&self, i: usize) -> Option<(f64, f64)> {
        let v = self.values.get(i).copied().flatten()?;
        let x = self.x.center(&i)?;
        Some((x, self.y.map(v)))
    }

    fn points(&self) -> impl Iterator<Item = Option<(f64, f64)>> + '_ {
        (0..self.values.len()).map(|i| self.point(i))
    }

    pub fn line_path(&self) -> Result<Option<String>> {
        LineGenerator::new()
            .with_curve(self.opts.curve)
            .with_digits(self.opts.digits)
            .generate(self.points())
    }

    pub fn area_path(&self) -> Result<Option<String>> {
        let y0 = self.baseline_y();
        AreaGenerator::new()
            .with_curve(self.opts.curve)
            .with_digits(self.opts.digits)
            .generate(self.points().map(|p| p.map(|(x, y1)| AreaPoint { x, y0, y1 })))
    }

    pub fn bars_path(&self) -> Result<Option<String>> {
        let mut path = self.builder()?;
        let zero = self.baseline_y();
        let bw = self.x.bandwidth();
        for (i, v) in self.values.iter().enumerate() {
            let (Some(v), Some(x)) = (*v, self.x.map(&i)) else {
                continue;
            };
            let top = self.y.map(v.max(0.0));
            let height = (self.y.map(v) - zero).abs();
            path.rect(x, top, bw, height);
        }
        Ok((!path.is_empty()).then(|| path.finish()))
    }

    pub fn dots_path(&self) -> Result<Option<String>> {
        let mut path = self.builder()?;
        let r = self.opts.dot_radius;
        for (cx, cy) in self.points().flatten() {
            path.move_to(cx + r, cy);
            path.arc(cx, cy, r, 0.0, TAU, false)?;
        }
        Ok((!path.is_empty()).then(|| path.finish()))
    }

    pub fn mark_path(&self, mark: Mark) -> Result<Option<String>> {
        match mark {
            Mark::Line => self.line_path(),
            Mark::Area => self.area_path(),
            Mark::Bars => self.bars_path(),
            Mark::Dots => self.dots_path(),
        }
    }

    /// Renders `marks` in order alongside the viewport size and baseline.
    pub fn frame(&self, marks: &[Mark]) -> Result<ChartFrame> {
        let (width, height) = self.opts.viewport();
        let mut paths = Vec::with_capacity(marks.len());
        for &mark in marks {
            if let Some(d) = self.mark_path(mark)? {
                paths.push((mark, d));
            }
        }
        let baseline_y = self.baseline_y();
        debug!(marks = paths.len(), baseline_y, "chart frame rendered");
        Ok(ChartFrame { width, height, baseline_y, paths })
    }

    fn builder(&self) -> Result<PathBuilder> {
        path_for(self.opts.digits)
    }
}

/// Line path and baseline for `values`: the common single-mark render.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRender {
    pub path: Option<String>,
    pub baseline_y: f64,
}

pub fn render_line<I>(values: I, opts: &ChartOptions) -> Result<LineRender>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    let chart = Chart::new(values, opts);
    Ok(LineRender { path: chart.line_path()?, baseline_y: chart.baseline_y() })
}
