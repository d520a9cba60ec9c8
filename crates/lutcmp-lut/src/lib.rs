//! # lutcmp-lut
//!
//! `.cube` LUT parsing, validation and interpolation.
//!
//! A parsed [`CubeDocument`] carries a 1D table, a 3D cube, or both, and
//! is sampled statelessly with [`sample`].
//!
//! # Tables
//!
//! - [`Table1D`] - per-channel curve, linear interpolation, end-node clamping
//! - [`Table3D`] - RGB cube, trilinear interpolation with a configurable
//!   out-of-grid policy ([`Extrapolation`])
//!
//! # Usage
//!
//! ```rust
//! use lutcmp_lut::{cube, sample, TableKind};
//!
//! let text = "LUT_3D_SIZE 2\n\
//!             0 0 0\n1 0 0\n0 1 0\n1 1 0\n\
//!             0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
//! let doc = cube::parse(text)?;
//! let out = sample(&doc, TableKind::ThreeD, &[[0.5, 0.25, 1.0]])?;
//! assert!((out[0][1] - 0.25).abs() < 1e-12);
//! # Ok::<(), lutcmp_lut::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `lutcmp-color` - Comparison pipeline
//! - `lutcmp-cli` - LUT file loading

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod document;
mod error;
mod interp;
mod lut1d;
mod lut3d;
mod sample;
pub mod cube;

pub use cube::{ParseMode, ParseOptions, parse, parse_with, read_cube};
pub use document::{CubeDocument, TableKind, Tables};
pub use error::{LutError, LutResult};
pub use interp::{Extrapolation, SampleOptions};
pub use lut1d::Table1D;
pub use lut3d::Table3D;
pub use sample::{sample, sample_with};
