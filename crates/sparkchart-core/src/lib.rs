// File: crates/sparkchart-core/src/lib.rs
// Summary: Core library entry point; scales, curves and path building for sparkline charts.

pub mod array;
pub mod bisect;
pub mod chart;
pub mod curve;
pub mod error;
pub mod intern;
pub mod path;
pub mod scale;
pub mod shape;
pub mod ticks;

pub use array::{extent, range, range_by};
pub use bisect::{bisect_center, bisect_left, bisect_right};
pub use chart::{render_line, Chart, ChartFrame, ChartOptions, LineRender, Mark};
pub use curve::{Curve, CurveKind};
pub use error::{Error, Result};
pub use intern::InternMap;
pub use path::{PathBuilder, PathSink};
pub use scale::{BandScale, BandSpec, Interpolate, LinearScale, LinearSpec, OrdinalScale, Unknown};
pub use shape::{AreaGenerator, AreaPoint, LineGenerator};
pub use ticks::{tick_increment, tick_spec, tick_step, ticks, TickSpec};
