// File: crates/sparkchart-core/src/error.rs
// Summary: Error type for fallible kernel operations (path primitives and precision setup).

use thiserror::Error;

/// Errors raised synchronously by path primitives. Degenerate input (empty
/// series, flat domains, single points) is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("negative radius: {0}")]
    NegativeRadius(f64),
    #[error("invalid digits: {0}")]
    InvalidDigits(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
