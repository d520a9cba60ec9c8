//! Batch color transformation pipeline.
//!
//! A pipeline is a sequence of operations applied, in order, to a whole
//! batch of RGB triples. The comparison uses:
//!
//! 1. LUT lookup (log code values in, log code values out)
//! 2. Log decode (to linear)
//! 3. Gamut transform (camera primaries to Rec.709)
//! 4. Display encode (Rec.709 OETF)
//!
//! # Example
//!
//! ```rust
//! use lutcmp_color::Pipeline;
//! use lutcmp_color::lut::{cube, TableKind};
//! use lutcmp_color::transfer::{rec709, s_log3};
//!
//! let doc = cube::parse("LUT_1D_SIZE 2\n0 0 0\n1 1 1\n").unwrap();
//! let pipeline = Pipeline::new()
//!     .lut(TableKind::OneD)
//!     .transfer(s_log3::decode)
//!     .transfer(rec709::oetf);
//!
//! let out = pipeline.apply(&doc, &[[0.5; 3]]).unwrap();
//! assert_eq!(out.len(), 1);
//! ```

use crate::ColorResult;
use lutcmp_lut::{CubeDocument, SampleOptions, TableKind, sample_with};
use lutcmp_primaries::{ColorSpace, transform};

/// Transfer function type (scalar to scalar).
pub type TransferFn = fn(f64) -> f64;

/// A single operation in the pipeline.
#[derive(Clone, Copy)]
pub enum TransformOp {
    /// Sample a table of the document.
    ///
    /// `TableKind::Both` runs the 1D shaper, then the cube.
    Lut(TableKind),

    /// Per-channel transfer function (decode or encode).
    Transfer(TransferFn),

    /// Gamut matrix of a camera space to Rec.709.
    Gamut(ColorSpace),
}

impl std::fmt::Debug for TransformOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lut(kind) => f.debug_tuple("Lut").field(kind).finish(),
            Self::Transfer(_) => f.write_str("Transfer(fn)"),
            Self::Gamut(space) => f.debug_tuple("Gamut").field(space).finish(),
        }
    }
}

/// An ordered list of [`TransformOp`]s plus LUT sampling options.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ops: Vec<TransformOp>,
    sampling: SampleOptions,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options used by [`TransformOp::Lut`] steps.
    pub fn with_sampling(mut self, sampling: SampleOptions) -> Self {
        self.sampling = sampling;
        self
    }

    /// Adds an operation to the pipeline.
    pub fn push(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Adds a LUT lookup.
    pub fn lut(self, table: TableKind) -> Self {
        self.push(TransformOp::Lut(table))
    }

    /// Adds a per-channel transfer function.
    pub fn transfer(self, f: TransferFn) -> Self {
        self.push(TransformOp::Transfer(f))
    }

    /// Adds a gamut transform to Rec.709.
    pub fn gamut(self, space: ColorSpace) -> Self {
        self.push(TransformOp::Gamut(space))
    }

    /// Returns the number of operations in the pipeline.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the operations in the pipeline.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Applies the pipeline to a batch.
    ///
    /// Either every input is transformed or an error is returned; no
    /// partially processed batch escapes.
    pub fn apply(&self, doc: &CubeDocument, inputs: &[[f64; 3]]) -> ColorResult<Vec<[f64; 3]>> {
        let mut batch = inputs.to_vec();
        for op in &self.ops {
            match op {
                TransformOp::Lut(table) => {
                    batch = sample_with(doc, *table, &batch, self.sampling)?;
                }
                TransformOp::Transfer(f) => {
                    batch.iter_mut().for_each(|rgb| *rgb = rgb.map(f));
                }
                TransformOp::Gamut(space) => {
                    batch.iter_mut().for_each(|rgb| *rgb = transform(*rgb, *space));
                }
            }
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutcmp_lut::{LutError, Table1D, Table3D, Tables};
    use lutcmp_transfer::{rec709, s_log3};

    fn one_d() -> CubeDocument {
        CubeDocument::new(Tables::OneD(Table1D::identity(2)))
    }

    #[test]
    fn test_empty_pipeline() {
        let rgb = [0.5, 0.3, 0.2];
        assert_eq!(Pipeline::new().apply(&one_d(), &[rgb]).unwrap(), vec![rgb]);
    }

    #[test]
    fn test_transfer_roundtrip() {
        let pipeline = Pipeline::new()
            .transfer(s_log3::encode)
            .transfer(s_log3::decode);

        let rgb = [0.5, 0.3, 0.2];
        let result = pipeline.apply(&one_d(), &[rgb]).unwrap();
        for c in 0..3 {
            assert!((result[0][c] - rgb[c]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gamut_matches_primaries() {
        let rgb = [0.6, 0.3, 0.1];
        for space in ColorSpace::ALL {
            let pipeline = Pipeline::new().gamut(space);
            let result = pipeline.apply(&one_d(), &[rgb]).unwrap();
            assert_eq!(result[0], transform(rgb, space));
        }
    }

    #[test]
    fn test_gamut_is_matrix_vector_product() {
        let pipeline = Pipeline::new().gamut(ColorSpace::SGamut3);
        let result = pipeline.apply(&one_d(), &[[1.0, 0.0, 0.0]]).unwrap();
        assert!((result[0][0] - 1.6410).abs() < 1e-12);
        assert!((result[0][1] + 0.6636).abs() < 1e-12);
        assert!((result[0][2] - 0.0117).abs() < 1e-12);
    }

    #[test]
    fn test_missing_table_fails_whole_batch() {
        let pipeline = Pipeline::new()
            .transfer(rec709::oetf)
            .lut(TableKind::ThreeD);
        let err = pipeline.apply(&one_d(), &[[0.1; 3], [0.2; 3]]).unwrap_err();
        assert!(matches!(
            err,
            crate::ColorError::Lut(LutError::NoSuchTable(TableKind::ThreeD))
        ));
    }

    #[test]
    fn test_lut_step_uses_sampling_options() {
        let doc = CubeDocument::new(Tables::ThreeD(Table3D::identity(3)))
            .with_domain([0.0; 3], [2.0; 3]);
        let gradient = Pipeline::new().lut(TableKind::ThreeD);
        let clamped = gradient.clone().with_sampling(
            SampleOptions::default().with_extrapolation(lutcmp_lut::Extrapolation::Clamp),
        );

        assert!((gradient.apply(&doc, &[[1.5; 3]]).unwrap()[0][0] - 1.5).abs() < 1e-12);
        assert_eq!(clamped.apply(&doc, &[[1.5; 3]]).unwrap()[0], [1.0; 3]);
        assert_eq!(gradient.len(), 1);
    }
}
