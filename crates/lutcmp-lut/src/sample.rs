//! Stateless sampling of a parsed document.
//!
//! The caller names the table to query; a document never chooses one on
//! its own, so a Both document can be sampled as shaper, cube, or both by
//! the pipeline above it.

use crate::{CubeDocument, Extrapolation, LutResult, SampleOptions, TableKind};
use tracing::trace;

/// Samples one table of `doc` at each input triple with default options.
///
/// See [`sample_with`].
pub fn sample(doc: &CubeDocument, table: TableKind, inputs: &[[f64; 3]]) -> LutResult<Vec<[f64; 3]>> {
    sample_with(doc, table, inputs, SampleOptions::default())
}

/// Samples one table of `doc` at each input triple.
///
/// 1D inputs are clamped to the document domain. Cube inputs are clamped
/// only with [`Extrapolation::Clamp`]; with [`Extrapolation::Gradient`]
/// positions outside the grid continue the boundary cell's slope.
/// `TableKind::Both` runs the 1D shaper and feeds its output into the cube.
///
/// # Errors
///
/// [`crate::LutError::NoSuchTable`] if the requested table is not populated.
///
/// # Example
///
/// ```rust
/// use lutcmp_lut::{cube, sample, TableKind};
///
/// let doc = cube::parse("LUT_1D_SIZE 3\n0 0 0\n0.25 0.25 0.25\n1 1 1\n").unwrap();
/// let out = sample(&doc, TableKind::OneD, &[[0.5, 0.75, 1.0]]).unwrap();
/// assert_eq!(out, vec![[0.25, 0.625, 1.0]]);
/// assert!(sample(&doc, TableKind::ThreeD, &[[0.5; 3]]).is_err());
/// ```
pub fn sample_with(
    doc: &CubeDocument,
    table: TableKind,
    inputs: &[[f64; 3]],
    options: SampleOptions,
) -> LutResult<Vec<[f64; 3]>> {
    trace!(table = %table, count = inputs.len(), extrapolation = ?options.extrapolation, "sample");

    let out = match table {
        TableKind::OneD => {
            let lut = doc.require_1d()?;
            inputs.iter().map(|&rgb| lut.apply(doc.clamp_to_domain(rgb))).collect()
        }
        TableKind::ThreeD => {
            let lut = doc.require_3d()?;
            inputs
                .iter()
                .map(|&rgb| lut.apply(cube_input(doc, rgb, options), options.extrapolation))
                .collect()
        }
        TableKind::Both => {
            let shaper = doc.require_1d()?;
            let lut = doc.require_3d()?;
            inputs
                .iter()
                .map(|&rgb| lut.apply(shaper.apply(doc.clamp_to_domain(rgb)), options.extrapolation))
                .collect()
        }
    };
    Ok(out)
}

/// Cube lookups extrapolate from the raw input; only `Clamp` honors the domain.
#[inline]
fn cube_input(doc: &CubeDocument, rgb: [f64; 3], options: SampleOptions) -> [f64; 3] {
    match options.extrapolation {
        Extrapolation::Gradient => rgb,
        Extrapolation::Clamp => doc.clamp_to_domain(rgb),
    }
}
