//! # lutcmp-color
//!
//! Comparison pipeline: runs an exposure sweep through a `.cube` LUT and
//! the reference tone curves, and reports both as display percentages.
//!
//! # Architecture
//!
//! ```text
//!                  lutcmp-color
//!                       |
//!     +-----------------+-----------------+
//!     |                 |                 |
//! lutcmp-transfer  lutcmp-primaries   lutcmp-lut
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lutcmp_color::build_comparison_table;
//! use lutcmp_color::lut::cube;
//!
//! let doc = cube::parse("LUT_1D_SIZE 2\n0 0 0\n1 1 1\n")?;
//! let table = build_comparison_table(&doc, "S-Gamut3.Cine")?;
//!
//! for row in &table {
//!     assert!((row.lut_pct - row.display_pct).abs() < 1e-6);
//! }
//! # Ok::<(), lutcmp_color::ColorError>(())
//! ```
//!
//! # Dependencies
//!
//! - `lutcmp-lut` - Parsing and sampling
//! - `lutcmp-transfer` - Log and display curves
//! - `lutcmp-primaries` - Gamut matrices and luminance
//! - [`serde`] - Result export
//!
//! # Used By
//!
//! - `lutcmp-cli` - `analyze` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod comparison;
mod error;
pub mod pipeline;

pub use comparison::{
    Comparison, ComparisonRow, ComparisonTable, EXPOSURES, LutStage, build_comparison_table,
};
pub use error::{ColorError, ColorResult};
pub use pipeline::{Pipeline, TransformOp};

// Re-export component crates.
pub use lutcmp_lut as lut;
pub use lutcmp_primaries as primaries;
pub use lutcmp_transfer as transfer;
