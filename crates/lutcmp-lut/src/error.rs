//! LUT error types.

use crate::TableKind;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while parsing or sampling a LUT.
///
/// Line numbers are 1-based physical lines of the parsed text, comments
/// and blank lines included.
#[derive(Debug, Error)]
pub enum LutError {
    /// A data line that is not exactly three finite numbers.
    #[error("line {line}: malformed data row, expected three numbers")]
    MalformedDataRow {
        /// Offending line
        line: usize,
    },

    /// A `DOMAIN_MIN`/`DOMAIN_MAX` line with bad values, or a domain whose
    /// minimum exceeds its maximum.
    #[error("line {line}: malformed domain")]
    MalformedDomain {
        /// Offending line
        line: usize,
    },

    /// `LUT_1D_SIZE`/`LUT_3D_SIZE` after data rows were consumed.
    #[error("line {line}: LUT size declared after data rows")]
    LateSizeDeclaration {
        /// Offending line
        line: usize,
    },

    /// A size keyword whose value is not a positive integer.
    #[error("line {line}: LUT size must be a positive integer")]
    InvalidSize {
        /// Offending line
        line: usize,
    },

    /// The same size keyword declared twice.
    #[error("line {line}: duplicate size declaration")]
    DuplicateKeyword {
        /// Offending line
        line: usize,
    },

    /// Number of collected rows differs from the declared size.
    #[error("expected {expected} entries, found {actual}")]
    SizeMismatch {
        /// Row count implied by the header
        expected: usize,
        /// Row count found in the file
        actual: usize,
    },

    /// The requested table is not present in the document.
    #[error("document has no {0} table")]
    NoSuchTable(TableKind),

    /// No size keyword was declared, so the document kind is unknown.
    #[error("no LUT_1D_SIZE or LUT_3D_SIZE declared")]
    EmptyOrUndeterminedKind,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
