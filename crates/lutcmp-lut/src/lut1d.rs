//! 1-dimensional lookup table.
//!
//! A 1D LUT applies an independent curve to each color channel. In a
//! `.cube` file it is stored as `LUT_1D_SIZE` RGB rows, row `i` holding
//! the output for input `i / (size - 1)` on every channel.

use crate::interp::lerp;
use crate::{LutError, LutResult};

/// A per-channel 1D table sampled on a uniform grid over `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use lutcmp_lut::Table1D;
///
/// let lut = Table1D::identity(5);
/// assert_eq!(lut.apply([0.25, 0.5, 0.75]), [0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table1D {
    entries: Vec<[f64; 3]>,
}

impl Table1D {
    /// Creates a table from RGB rows.
    ///
    /// Fails with [`LutError::SizeMismatch`] when `entries` is empty.
    pub fn from_entries(entries: Vec<[f64; 3]>) -> LutResult<Self> {
        if entries.is_empty() {
            return Err(LutError::SizeMismatch { expected: 1, actual: 0 });
        }
        Ok(Self { entries })
    }

    /// Creates an identity (pass-through) table.
    ///
    /// `size` is raised to 2 if smaller.
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let entries = (0..size)
            .map(|i| {
                let t = i as f64 / (size - 1) as f64;
                [t, t, t]
            })
            .collect();
        Self { entries }
    }

    /// Number of grid nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Stored rows in file order.
    #[inline]
    pub fn entries(&self) -> &[[f64; 3]] {
        &self.entries
    }

    /// Applies the table to an RGB triple, each channel independently.
    ///
    /// Inputs outside `[0, 1]` take the value of the nearest end node.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.channel(0, rgb[0]),
            self.channel(1, rgb[1]),
            self.channel(2, rgb[2]),
        ]
    }

    /// Piecewise-linear lookup of one channel.
    fn channel(&self, c: usize, value: f64) -> f64 {
        let size = self.entries.len();
        if size == 1 {
            return self.entries[0][c];
        }

        let n = (size - 1) as f64;
        let pos = value.clamp(0.0, 1.0) * n;
        let idx0 = (pos.floor() as usize).min(size - 2);
        let frac = pos - idx0 as f64;

        lerp(self.entries[idx0][c], self.entries[idx0 + 1][c], frac)
    }
}
