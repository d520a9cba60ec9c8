//! Exposure sweep comparing a LUT against the reference tone curves.
//!
//! For each exposure `L` the reference curves are
//!
//! ```text
//! log     = s_log3::encode(L)
//! display = rec709::oetf(s_log3::decode(log))
//! ```
//!
//! and the LUT curve runs the log code value through the document:
//!
//! ```text
//! log -> LUT -> s_log3::decode -> gamut matrix -> rec709::oetf -> Y -> clamp
//! ```

use crate::{ColorResult, Pipeline};
use lutcmp_lut::{CubeDocument, Extrapolation, SampleOptions, TableKind};
use lutcmp_primaries::{ColorSpace, luminance};
use lutcmp_transfer::{rec709, s_log3};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Exposure percentages sampled by the sweep: 1, 6, ..., 96.
pub const EXPOSURES: [u32; 20] = {
    let mut out = [0u32; 20];
    let mut i = 0;
    while i < out.len() {
        out[i] = 1 + 5 * i as u32;
        i += 1;
    }
    out
};

/// Which table(s) of a document feed the LUT curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LutStage {
    /// The 1D table when the document has one, otherwise the cube.
    #[default]
    Auto,
    /// The 1D table only.
    OneD,
    /// The 3D cube only.
    ThreeD,
    /// The 1D shaper followed by the cube.
    Chained,
}

impl LutStage {
    /// Table to sample for `doc`.
    pub fn resolve(self, doc: &CubeDocument) -> TableKind {
        match self {
            Self::Auto if doc.table_1d().is_some() => TableKind::OneD,
            Self::Auto | Self::ThreeD => TableKind::ThreeD,
            Self::OneD => TableKind::OneD,
            Self::Chained => TableKind::Both,
        }
    }
}

impl fmt::Display for LutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::OneD => "1d",
            Self::ThreeD => "3d",
            Self::Chained => "chained",
        })
    }
}

impl FromStr for LutStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "1d" => Ok(Self::OneD),
            "3d" => Ok(Self::ThreeD),
            "chained" | "both" => Ok(Self::Chained),
            other => Err(format!("unknown LUT stage: {other}")),
        }
    }
}

/// One exposure sample. All values are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Linear exposure, 1 to 96.
    pub exposure_pct: u32,
    /// Reference log code value.
    pub log_pct: f64,
    /// Reference display value.
    pub display_pct: f64,
    /// Display luminance produced through the LUT.
    pub lut_pct: f64,
    /// Gamut used for the LUT output.
    pub color_space: ColorSpace,
}

impl ComparisonRow {
    /// LUT curve minus reference display curve.
    pub fn deviation(&self) -> f64 {
        self.lut_pct - self.display_pct
    }
}

/// Result of one analysis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    color_space: ColorSpace,
    #[serde(serialize_with = "as_display")]
    table: TableKind,
    rows: Vec<ComparisonRow>,
}

fn as_display<S: Serializer>(kind: &TableKind, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(kind)
}

impl ComparisonTable {
    /// Gamut used for the LUT output.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Table(s) that were sampled.
    pub fn table(&self) -> TableKind {
        self.table
    }

    /// Rows in exposure order.
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Iterates rows in exposure order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonRow> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row with the largest absolute deviation from the display curve.
    pub fn max_deviation(&self) -> Option<&ComparisonRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.deviation().abs().total_cmp(&b.deviation().abs()))
    }
}

impl<'a> IntoIterator for &'a ComparisonTable {
    type Item = &'a ComparisonRow;
    type IntoIter = std::slice::Iter<'a, ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Configurable comparison.
///
/// # Example
///
/// ```rust
/// use lutcmp_color::{Comparison, LutStage};
/// use lutcmp_color::lut::{cube, Extrapolation};
/// use lutcmp_color::primaries::ColorSpace;
///
/// let doc = cube::parse("LUT_1D_SIZE 2\n0 0 0\n1 1 1\n")?;
/// let table = Comparison::new(ColorSpace::SGamut3)
///     .with_stage(LutStage::OneD)
///     .with_extrapolation(Extrapolation::Clamp)
///     .build(&doc)?;
/// assert_eq!(table.len(), 20);
/// # Ok::<(), lutcmp_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    space: ColorSpace,
    stage: LutStage,
    sampling: SampleOptions,
}

impl Comparison {
    /// Comparison for `space` with [`LutStage::Auto`] and default sampling.
    pub fn new(space: ColorSpace) -> Self {
        Self {
            space,
            stage: LutStage::default(),
            sampling: SampleOptions::default(),
        }
    }

    /// Sets the LUT stage.
    pub fn with_stage(mut self, stage: LutStage) -> Self {
        self.stage = stage;
        self
    }

    /// Sets the out-of-grid policy for cube lookups.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.sampling = self.sampling.with_extrapolation(extrapolation);
        self
    }

    /// The color pipeline applied to log code values.
    pub fn pipeline(&self, doc: &CubeDocument) -> Pipeline {
        Pipeline::new()
            .with_sampling(self.sampling)
            .lut(self.stage.resolve(doc))
            .transfer(s_log3::decode)
            .gamut(self.space)
            .transfer(rec709::oetf)
    }

    /// Runs the sweep over `doc`.
    ///
    /// # Errors
    ///
    /// Any LUT failure fails the whole table.
    pub fn build(&self, doc: &CubeDocument) -> ColorResult<ComparisonTable> {
        let table = self.stage.resolve(doc);
        trace!(space = %self.space, stage = %self.stage, "build comparison");
        debug!(
            space = %self.space,
            stage = %self.stage,
            table = %table,
            extrapolation = ?self.sampling.extrapolation,
            "LUT stage selected"
        );

        let codes: Vec<f64> = EXPOSURES
            .iter()
            .map(|&pct| s_log3::encode(f64::from(pct) / 100.0))
            .collect();
        let inputs: Vec<[f64; 3]> = codes.iter().map(|&v| [v; 3]).collect();
        let pipeline = self.pipeline(doc);
        debug!(ops = ?pipeline.ops(), "pipeline");
        let outputs = pipeline.apply(doc, &inputs)?;

        let rows = EXPOSURES
            .iter()
            .zip(codes)
            .zip(outputs)
            .map(|((&exposure_pct, log), display_rgb)| {
                let display = rec709::oetf(s_log3::decode(log));
                let lut = luminance(display_rgb).clamp(0.0, 1.0);
                ComparisonRow {
                    exposure_pct,
                    log_pct: log * 100.0,
                    display_pct: display * 100.0,
                    lut_pct: lut * 100.0,
                    color_space: self.space,
                }
            })
            .collect();

        Ok(ComparisonTable {
            color_space: self.space,
            table,
            rows,
        })
    }
}

/// Runs the default comparison for a color space tag.
///
/// # Errors
///
/// [`crate::ColorError::UnsupportedColorSpace`] for an unknown tag, or
/// [`crate::ColorError::Lut`] if the document lacks the table needed.
pub fn build_comparison_table(doc: &CubeDocument, tag: &str) -> ColorResult<ComparisonTable> {
    let space: ColorSpace = tag.parse()?;
    Comparison::new(space).build(doc)
}
