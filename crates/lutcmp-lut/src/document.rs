//! Parsed `.cube` document.

use crate::{LutError, LutResult, Table1D, Table3D};
use std::fmt;

/// Which table a document carries, or which one a caller wants to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Per-channel 1D curve.
    OneD,
    /// 3D cube.
    ThreeD,
    /// Both a 1D shaper and a 3D cube.
    Both,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneD => "1D",
            Self::ThreeD => "3D",
            Self::Both => "1D+3D",
        })
    }
}

/// Tables present in a document.
///
/// Only the tables actually declared are stored, so a OneD document can
/// never be asked for a cube it does not have.
#[derive(Debug, Clone, PartialEq)]
pub enum Tables {
    /// `LUT_1D_SIZE` only.
    OneD(Table1D),
    /// `LUT_3D_SIZE` only.
    ThreeD(Table3D),
    /// Both sizes declared; the 1D rows precede the 3D rows in the file.
    Both {
        /// 1D shaper table
        one_d: Table1D,
        /// 3D cube
        three_d: Table3D,
    },
}

/// An immutable, validated `.cube` document.
///
/// Produced by [`crate::parse`]. Each caller owns its own document; there
/// is no shared state between parses.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeDocument {
    /// `TITLE` value with surrounding quotes removed.
    pub title: Option<String>,
    /// Per-channel lower bound of the legal input range.
    pub domain_min: [f64; 3],
    /// Per-channel upper bound of the legal input range.
    pub domain_max: [f64; 3],
    /// Declared tables.
    pub tables: Tables,
}

impl CubeDocument {
    /// Builds a document with the default `[0, 1]` domain.
    pub fn new(tables: Tables) -> Self {
        Self {
            title: None,
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
            tables,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Which tables are populated.
    pub fn kind(&self) -> TableKind {
        match self.tables {
            Tables::OneD(_) => TableKind::OneD,
            Tables::ThreeD(_) => TableKind::ThreeD,
            Tables::Both { .. } => TableKind::Both,
        }
    }

    /// The 1D table, if declared.
    pub fn table_1d(&self) -> Option<&Table1D> {
        match &self.tables {
            Tables::OneD(t) | Tables::Both { one_d: t, .. } => Some(t),
            Tables::ThreeD(_) => None,
        }
    }

    /// The 3D table, if declared.
    pub fn table_3d(&self) -> Option<&Table3D> {
        match &self.tables {
            Tables::ThreeD(t) | Tables::Both { three_d: t, .. } => Some(t),
            Tables::OneD(_) => None,
        }
    }

    /// `LUT_1D_SIZE`, if declared.
    pub fn size_1d(&self) -> Option<usize> {
        self.table_1d().map(Table1D::size)
    }

    /// `LUT_3D_SIZE`, if declared.
    pub fn size_3d(&self) -> Option<usize> {
        self.table_3d().map(Table3D::size)
    }

    /// The 1D table or [`LutError::NoSuchTable`].
    pub fn require_1d(&self) -> LutResult<&Table1D> {
        self.table_1d().ok_or(LutError::NoSuchTable(TableKind::OneD))
    }

    /// The 3D table or [`LutError::NoSuchTable`].
    pub fn require_3d(&self) -> LutResult<&Table3D> {
        self.table_3d().ok_or(LutError::NoSuchTable(TableKind::ThreeD))
    }

    /// Clamps a triple into the document's input domain.
    ///
    /// Never panics, even for a hand-built document with an inverted domain.
    #[inline]
    pub fn clamp_to_domain(&self, rgb: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|c| rgb[c].max(self.domain_min[c]).min(self.domain_max[c]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_tables() {
        let one = CubeDocument::new(Tables::OneD(Table1D::identity(4)));
        assert_eq!(one.kind(), TableKind::OneD);
        assert_eq!(one.size_1d(), Some(4));
        assert_eq!(one.size_3d(), None);
        assert!(matches!(one.require_3d(), Err(LutError::NoSuchTable(TableKind::ThreeD))));

        let both = CubeDocument::new(Tables::Both {
            one_d: Table1D::identity(8),
            three_d: Table3D::identity(3),
        });
        assert_eq!(both.kind(), TableKind::Both);
        assert_eq!(both.size_1d(), Some(8));
        assert_eq!(both.size_3d(), Some(3));
    }

    #[test]
    fn domain_clamp() {
        let doc = CubeDocument::new(Tables::ThreeD(Table3D::identity(2)))
            .with_domain([0.0, -1.0, 0.0], [1.0, 2.0, 0.5]);
        assert_eq!(doc.clamp_to_domain([1.5, 1.5, 0.75]), [1.0, 1.5, 0.5]);
    }
}
