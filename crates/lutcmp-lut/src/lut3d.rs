//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of color values
//! sampled on a uniform `size × size × size` grid over `[0, 1]³`.

use crate::interp::lerp;
use crate::{Extrapolation, LutError, LutResult};

/// A 3D cube table.
///
/// # Structure
///
/// - `size³` entries, each an RGB output triple
/// - Stored in `.cube` file order: R varies fastest, then G, then B,
///   so grid node `(r, g, b)` lives at `r + g·size + b·size²`
/// - Trilinear interpolation for lookup
///
/// # Example
///
/// ```rust
/// use lutcmp_lut::{Extrapolation, Table3D};
///
/// let lut = Table3D::identity(17);
/// let out = lut.apply([0.5, 0.25, 0.75], Extrapolation::Clamp);
/// assert!((out[0] - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table3D {
    data: Vec<[f64; 3]>,
    size: usize,
}

impl Table3D {
    /// Creates a cube from entries in file order.
    ///
    /// Data must hold exactly `size³` entries.
    pub fn from_data(data: Vec<[f64; 3]>, size: usize) -> LutResult<Self> {
        let expected = size * size * size;
        if size == 0 || data.len() != expected {
            return Err(LutError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Creates an identity (pass-through) cube.
    ///
    /// `size` is raised to 2 if smaller.
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let n = (size - 1) as f64;
        let mut data = Vec::with_capacity(size * size * size);

        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([r as f64 / n, g as f64 / n, b as f64 / n]);
                }
            }
        }

        Self { data, size }
    }

    /// Edge length of the cube.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stored entries in file order.
    #[inline]
    pub fn entries(&self) -> &[[f64; 3]] {
        &self.data
    }

    /// Value stored at grid node `(r, g, b)`.
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f64; 3] {
        self.data[r + g * self.size + b * self.size * self.size]
    }

    /// Applies the cube to an RGB triple with trilinear interpolation.
    pub fn apply(&self, rgb: [f64; 3], extrapolation: Extrapolation) -> [f64; 3] {
        if self.size == 1 {
            return self.data[0];
        }

        let n = (self.size - 1) as f64;
        let (ri, rf) = self.cell(rgb[0], n, extrapolation);
        let (gi, gf) = self.cell(rgb[1], n, extrapolation);
        let (bi, bf) = self.cell(rgb[2], n, extrapolation);

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0f64; 3];
        for i in 0..3 {
            let c00 = lerp(c000[i], c100[i], rf);
            let c01 = lerp(c001[i], c101[i], rf);
            let c10 = lerp(c010[i], c110[i], rf);
            let c11 = lerp(c011[i], c111[i], rf);

            let c0 = lerp(c00, c10, gf);
            let c1 = lerp(c01, c11, gf);

            result[i] = lerp(c0, c1, bf);
        }

        result
    }

    /// Lower cell index and fractional offset along one axis.
    ///
    /// The index is kept inside `[0, size - 2]`; with gradient
    /// extrapolation the fraction may leave `[0, 1]`, which extends the
    /// boundary cell's slope.
    #[inline]
    fn cell(&self, value: f64, n: f64, extrapolation: Extrapolation) -> (usize, f64) {
        let value = match extrapolation {
            Extrapolation::Clamp => value.clamp(0.0, 1.0),
            Extrapolation::Gradient => value,
        };
        let pos = value * n;
        let idx = pos.floor().clamp(0.0, n - 1.0) as usize;
        (idx, pos - idx as f64)
    }
}
