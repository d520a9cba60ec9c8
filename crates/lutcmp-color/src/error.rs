//! Error types for the comparison pipeline.

use lutcmp_primaries::UnsupportedColorSpace;
use thiserror::Error;

/// Comparison pipeline error.
///
/// Parser and interpolator failures pass through unchanged so callers can
/// still read line numbers and row counts.
#[derive(Debug, Error)]
pub enum ColorError {
    /// LUT parsing or sampling failed.
    #[error("LUT error: {0}")]
    Lut(#[from] lutcmp_lut::LutError),

    /// Color space tag not recognized.
    #[error(transparent)]
    UnsupportedColorSpace(#[from] UnsupportedColorSpace),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
