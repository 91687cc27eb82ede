// File: crates/demo/src/cli.rs
// Summary: Command-line and environment configuration for the demo, mapped onto ChartOptions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sparkchart_core::{ChartOptions, CurveKind, Mark};

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Render a CSV price series as an SVG sparkline", long_about = None)]
pub struct Cli {
    /// CSV file to read; `-` or nothing reads stdin
    #[arg(env = "SPARKCHART_INPUT")]
    pub input: Option<String>,

    /// Use the 250x100 thumbnail size instead of 500x200
    #[arg(long, env = "SPARKCHART_SMALL")]
    pub small: bool,

    /// Marks to draw, in order (repeatable)
    #[arg(long = "mark", value_enum, env = "SPARKCHART_MARKS", value_delimiter = ',', default_value = "line")]
    pub marks: Vec<MarkArg>,

    /// CSV header holding the values
    #[arg(long, env = "SPARKCHART_COLUMN", default_value = "price")]
    pub column: String,

    /// Fill/stroke colour for every mark
    #[arg(long, env = "SPARKCHART_COLOR", default_value = "#5f99d2")]
    pub color: String,

    #[arg(long, value_enum, env = "SPARKCHART_CURVE", default_value = "catmull-rom")]
    pub curve: CurveArg,

    /// Catmull-Rom chord exponent
    #[arg(long, env = "SPARKCHART_ALPHA", default_value = "0.5")]
    pub alpha: f64,

    /// Cardinal spline tension
    #[arg(long, env = "SPARKCHART_TENSION", default_value = "0")]
    pub tension: f64,

    /// Fractional digits in path data
    #[arg(long, env = "SPARKCHART_DIGITS", default_value = "3")]
    pub digits: f64,

    /// Output file; stdout when omitted
    #[arg(long, short, env = "SPARKCHART_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkArg {
    Line,
    Area,
    Bars,
    Dots,
}

impl From<MarkArg> for Mark {
    fn from(m: MarkArg) -> Self {
        match m {
            MarkArg::Line => Mark::Line,
            MarkArg::Area => Mark::Area,
            MarkArg::Bars => Mark::Bars,
            MarkArg::Dots => Mark::Dots,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveArg {
    Linear,
    Cardinal,
    CatmullRom,
}

impl Cli {
    pub fn chart_options(&self) -> ChartOptions {
        let base = if self.small { ChartOptions::small() } else { ChartOptions::default() };
        let curve = match self.curve {
            CurveArg::Linear => CurveKind::Linear,
            CurveArg::Cardinal => CurveKind::Cardinal { tension: self.tension },
            CurveArg::CatmullRom => CurveKind::CatmullRom { alpha: self.alpha },
        };
        ChartOptions { curve, digits: Some(self.digits), ..base }
    }

    pub fn marks(&self) -> Vec<Mark> {
        self.marks.iter().copied().map(Mark::from).collect()
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&str> {
        self.input.as_deref().filter(|p| *p != "-")
    }
}
