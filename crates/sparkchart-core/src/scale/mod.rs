// File: crates/sparkchart-core/src/scale/mod.rs
// Summary: Scales mapping data values to pixel coordinates (ordinal, band, linear).

pub mod band;
pub mod linear;
pub mod ordinal;

pub use band::{BandScale, BandSpec};
pub use linear::{Interpolate, LinearScale, LinearSpec};
pub use ordinal::{OrdinalScale, Unknown};
