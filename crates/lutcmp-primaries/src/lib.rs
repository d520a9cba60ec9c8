//! # lutcmp-primaries
//!
//! Fixed gamut matrices from camera primaries to Rec.709, and the Rec.709
//! luminance weights.
//!
//! # Included Color Spaces
//!
//! | Tag | Source gamut | Target |
//! |-----|--------------|--------|
//! | `S-Gamut3` | Sony S-Gamut3 | Rec.709 |
//! | `S-Gamut3.Cine` | Sony S-Gamut3.Cine | Rec.709 |
//!
//! Matrices are row-major and applied to column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | r |
//! | m10 m11 m12 | * | g |
//! | m20 m21 m22 |   | b |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lutcmp_primaries::{ColorSpace, transform, transform_tagged};
//!
//! let rgb = transform([0.18, 0.18, 0.18], ColorSpace::SGamut3);
//! assert!((rgb[1] - 0.18).abs() < 1e-9);
//!
//! assert!(transform_tagged([0.5; 3], "Rec.2020").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix-vector products
//! - [`serde`] - Tag serialization
//!
//! # Used By
//!
//! - `lutcmp-color` - Comparison pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use glam::{DMat3, DVec3};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color space tag that names no known gamut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported color space: {0:?}")]
pub struct UnsupportedColorSpace(pub String);

/// Source gamut of the LUT output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorSpace {
    /// Sony S-Gamut3.
    #[serde(rename = "S-Gamut3")]
    SGamut3,
    /// Sony S-Gamut3.Cine.
    #[serde(rename = "S-Gamut3.Cine")]
    SGamut3Cine,
}

impl ColorSpace {
    /// All supported spaces.
    pub const ALL: [ColorSpace; 2] = [ColorSpace::SGamut3, ColorSpace::SGamut3Cine];

    /// Canonical tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SGamut3 => "S-Gamut3",
            Self::SGamut3Cine => "S-Gamut3.Cine",
        }
    }

    /// Row-major matrix to Rec.709 primaries.
    pub const fn to_rec709_rows(self) -> [[f64; 3]; 3] {
        match self {
            Self::SGamut3 => SGAMUT3_TO_REC709,
            Self::SGamut3Cine => SGAMUT3_CINE_TO_REC709,
        }
    }

    /// Matrix to Rec.709 primaries.
    pub fn to_rec709(self) -> DMat3 {
        // glam is column-major; transpose the row-major table.
        DMat3::from_cols_array_2d(&self.to_rec709_rows()).transpose()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = UnsupportedColorSpace;

    /// Parses a tag, ignoring case and `-`, `.`, `_` and spaces, so
    /// `"S-Gamut3.Cine"`, `"sgamut3cine"` and `"s_gamut3 cine"` agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '.' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "sgamut3" => Ok(Self::SGamut3),
            "sgamut3cine" => Ok(Self::SGamut3Cine),
            _ => Err(UnsupportedColorSpace(s.to_string())),
        }
    }
}

// ============================================================================
// Gamut matrices
// ============================================================================

/// S-Gamut3 to Rec.709, row-major.
pub const SGAMUT3_TO_REC709: [[f64; 3]; 3] = [
    [1.6410, -0.3245, -0.3165],
    [-0.6636, 1.6157, 0.0479],
    [0.0117, -0.0085, 0.9968],
];

/// S-Gamut3.Cine to Rec.709, row-major.
pub const SGAMUT3_CINE_TO_REC709: [[f64; 3]; 3] = [
    [1.5529, -0.2555, -0.2974],
    [-0.5428, 1.5027, 0.0401],
    [-0.0026, -0.0186, 1.0212],
];

/// Rec.709 luminance weights (R, G, B).
pub const REC709_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Applies the gamut matrix of `space`: `out = M · rgb`.
#[inline]
pub fn transform(rgb: [f64; 3], space: ColorSpace) -> [f64; 3] {
    (space.to_rec709() * DVec3::from_array(rgb)).to_array()
}

/// Parses `tag` and applies its gamut matrix.
///
/// Unknown tags are an error, never a pass-through.
pub fn transform_tagged(rgb: [f64; 3], tag: &str) -> Result<[f64; 3], UnsupportedColorSpace> {
    Ok(transform(rgb, tag.parse()?))
}

/// Rec.709 relative luminance `Y = 0.2126 R + 0.7152 G + 0.0722 B`.
#[inline]
pub fn luminance(rgb: [f64; 3]) -> f64 {
    DVec3::from_array(REC709_LUMA).dot(DVec3::from_array(rgb))
}
