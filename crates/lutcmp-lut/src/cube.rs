//! Adobe/Resolve .cube LUT format support.
//!
//! The .cube format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_1D_SIZE 1024
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! When both sizes are declared, the first `LUT_1D_SIZE` rows belong to
//! the 1D shaper and the remaining `LUT_3D_SIZE³` rows to the cube. Cube
//! rows are in raster order with red varying fastest.
//!
//! # Example
//!
//! ```rust
//! use lutcmp_lut::{cube, TableKind};
//!
//! let doc = cube::parse("LUT_1D_SIZE 2\n0 0 0\n1 1 1\n").unwrap();
//! assert_eq!(doc.kind(), TableKind::OneD);
//! ```

use crate::{CubeDocument, LutError, LutResult, Table1D, Table3D, Tables};
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

/// How strictly malformed lines are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fail on the first malformed line.
    #[default]
    Strict,
    /// Skip malformed data rows and domain lines with a warning.
    ///
    /// Matches older tools that silently dropped unparsable lines. Size
    /// declarations and row counts are still validated.
    Lenient,
}

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Malformed-line policy.
    pub mode: ParseMode,
}

impl ParseOptions {
    /// Strict parsing (the default).
    pub fn strict() -> Self {
        Self { mode: ParseMode::Strict }
    }

    /// Legacy-compatible lenient parsing.
    pub fn lenient() -> Self {
        Self { mode: ParseMode::Lenient }
    }
}

/// Reads and strictly parses a .cube file.
///
/// # Example
///
/// ```rust,ignore
/// let doc = cube::read_cube("grade.cube")?;
/// ```
pub fn read_cube<P: AsRef<Path>>(path: P) -> LutResult<CubeDocument> {
    read_cube_with(path, ParseOptions::default())
}

/// Reads and parses a .cube file with explicit options.
pub fn read_cube_with<P: AsRef<Path>>(path: P, options: ParseOptions) -> LutResult<CubeDocument> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_with(&text, options)
}

/// Parses .cube text strictly.
pub fn parse(text: &str) -> LutResult<CubeDocument> {
    parse_with(text, ParseOptions::default())
}

/// Parses .cube text.
pub fn parse_with(text: &str, options: ParseOptions) -> LutResult<CubeDocument> {
    trace!(bytes = text.len(), mode = ?options.mode, "cube::parse");

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut state = ParseState::new(options.mode);
    for (idx, line) in text.lines().enumerate() {
        state.line(idx + 1, line.trim())?;
    }
    let doc = state.finish()?;

    debug!(
        kind = %doc.kind(),
        size_1d = ?doc.size_1d(),
        size_3d = ?doc.size_3d(),
        title = ?doc.title,
        "Parsed cube document"
    );
    Ok(doc)
}

/// Line-by-line parser state.
struct ParseState {
    mode: ParseMode,
    title: Option<String>,
    domain_min: [f64; 3],
    domain_max: [f64; 3],
    domain_line: Option<usize>,
    size_1d: Option<usize>,
    size_3d: Option<usize>,
    rows_1d: Vec<[f64; 3]>,
    rows_3d: Vec<[f64; 3]>,
    data_started: bool,
}

impl ParseState {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            title: None,
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
            domain_line: None,
            size_1d: None,
            size_3d: None,
            rows_1d: Vec::new(),
            rows_3d: Vec::new(),
            data_started: false,
        }
    }

    fn line(&mut self, line_no: usize, line: &str) -> LutResult<()> {
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            self.title = Some(parse_title(rest));
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MIN") {
            if let Some(v) = self.domain(rest, line_no)? {
                self.domain_min = v;
            }
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MAX") {
            if let Some(v) = self.domain(rest, line_no)? {
                self.domain_max = v;
            }
        } else if let Some(rest) = line.strip_prefix("LUT_1D_SIZE") {
            let size = self.size(rest, line_no, self.size_1d, 1)?;
            self.size_1d = Some(size);
        } else if let Some(rest) = line.strip_prefix("LUT_3D_SIZE") {
            let size = self.size(rest, line_no, self.size_3d, 3)?;
            self.size_3d = Some(size);
        } else {
            self.data(line, line_no)?;
        }
        Ok(())
    }

    /// Parses a size value; `dims` is the table dimensionality, used to
    /// reject sizes whose entry count overflows.
    fn size(
        &self,
        rest: &str,
        line_no: usize,
        current: Option<usize>,
        dims: u32,
    ) -> LutResult<usize> {
        if self.data_started {
            return Err(LutError::LateSizeDeclaration { line: line_no });
        }
        if current.is_some() {
            return Err(LutError::DuplicateKeyword { line: line_no });
        }

        let mut tokens = rest.split_whitespace();
        let size = match (tokens.next(), tokens.next()) {
            (Some(tok), None) => tok.parse::<usize>().ok(),
            _ => None,
        };
        size.filter(|&n| n > 0 && n.checked_pow(dims).is_some())
            .ok_or(LutError::InvalidSize { line: line_no })
    }

    fn domain(&mut self, rest: &str, line_no: usize) -> LutResult<Option<[f64; 3]>> {
        match parse_triple(rest) {
            Some(v) => {
                self.domain_line = Some(line_no);
                Ok(Some(v))
            }
            None if self.mode == ParseMode::Lenient => {
                warn!(line = line_no, "Skipping malformed domain line");
                Ok(None)
            }
            None => Err(LutError::MalformedDomain { line: line_no }),
        }
    }

    fn data(&mut self, line: &str, line_no: usize) -> LutResult<()> {
        let rgb = match parse_triple(line) {
            Some(rgb) => rgb,
            None if self.mode == ParseMode::Lenient => {
                warn!(line = line_no, "Skipping malformed data row");
                return Ok(());
            }
            None => return Err(LutError::MalformedDataRow { line: line_no }),
        };

        // Rows before any size keyword only mark data as started; a size
        // declared afterwards is rejected, and none at all leaves the kind
        // undetermined.
        self.data_started = true;
        match (self.size_1d, self.size_3d) {
            (None, None) => {}
            (Some(n), _) if self.rows_1d.len() < n => self.rows_1d.push(rgb),
            _ => self.rows_3d.push(rgb),
        }
        Ok(())
    }

    fn finish(self) -> LutResult<CubeDocument> {
        if (0..3).any(|c| self.domain_min[c] > self.domain_max[c]) {
            return Err(LutError::MalformedDomain {
                line: self.domain_line.unwrap_or(0),
            });
        }

        let tables = match (self.size_1d, self.size_3d) {
            (None, None) => return Err(LutError::EmptyOrUndeterminedKind),
            (Some(n), None) => {
                // Surplus rows were routed past the 1D table.
                let actual = self.rows_1d.len() + self.rows_3d.len();
                if actual != n {
                    return Err(LutError::SizeMismatch { expected: n, actual });
                }
                Tables::OneD(Table1D::from_entries(self.rows_1d)?)
            }
            (None, Some(n)) => Tables::ThreeD(cube_table(self.rows_3d, n)?),
            (Some(n1), Some(n3)) => {
                if self.rows_1d.len() != n1 {
                    return Err(LutError::SizeMismatch {
                        expected: n1,
                        actual: self.rows_1d.len(),
                    });
                }
                Tables::Both {
                    one_d: Table1D::from_entries(self.rows_1d)?,
                    three_d: cube_table(self.rows_3d, n3)?,
                }
            }
        };

        Ok(CubeDocument {
            title: self.title,
            domain_min: self.domain_min,
            domain_max: self.domain_max,
            tables,
        })
    }
}

fn cube_table(rows: Vec<[f64; 3]>, size: usize) -> LutResult<Table3D> {
    let expected = size * size * size;
    if rows.len() != expected {
        return Err(LutError::SizeMismatch {
            expected,
            actual: rows.len(),
        });
    }
    Table3D::from_data(rows, size)
}

fn parse_title(rest: &str) -> String {
    let rest = rest.trim();
    rest.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(rest)
        .to_string()
}

/// Exactly three finite numbers.
fn parse_triple(s: &str) -> Option<[f64; 3]> {
    let mut tokens = s.split_whitespace();
    let mut out = [0.0f64; 3];
    for v in &mut out {
        *v = tokens.next()?.parse().ok().filter(|x: &f64| x.is_finite())?;
    }
    tokens.next().is_none().then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableKind;

    const CUBE_2: &str = r#"
# Test LUT
TITLE "Test Grade"
LUT_3D_SIZE 2
DOMAIN_MIN 0.0 0.0 0.0
DOMAIN_MAX 1.0 1.0 1.0

0.0 0.0 0.0
1.0 0.0 0.0
0.0 1.0 0.0
1.0 1.0 0.0
0.0 0.0 1.0
1.0 0.0 1.0
0.0 1.0 1.0
1.0 1.0 1.0
"#;

    #[test]
    fn parse_3d_cube() {
        let doc = parse(CUBE_2).expect("parse failed");
        assert_eq!(doc.kind(), TableKind::ThreeD);
        assert_eq!(doc.size_3d(), Some(2));
        assert_eq!(doc.title.as_deref(), Some("Test Grade"));
        assert_eq!(doc.table_3d().unwrap().get(1, 0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(doc.table_3d().unwrap().get(0, 1, 1), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn parse_1d_cube() {
        let cube = "TITLE \"Gamma 2.2\"\nLUT_1D_SIZE 3\n\n0.0 0.0 0.0\n0.5 0.5 0.5\n1.0 1.0 1.0\n";
        let doc = parse(cube).expect("parse failed");
        assert_eq!(doc.kind(), TableKind::OneD);
        assert_eq!(doc.size_1d(), Some(3));
        assert!(doc.table_3d().is_none());
    }

    #[test]
    fn both_routes_1d_rows_first() {
        let cube = "LUT_1D_SIZE 2\nLUT_3D_SIZE 2\n0 0 0\n1 1 1\n\
                    0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
        let doc = parse(cube).unwrap();
        assert_eq!(doc.kind(), TableKind::Both);
        assert_eq!(doc.table_1d().unwrap().entries(), &[[0.0; 3], [1.0; 3]]);
        assert_eq!(doc.table_3d().unwrap().entries().len(), 8);
    }

    #[test]
    fn seven_rows_for_size_two_is_mismatch() {
        let short: String = CUBE_2.lines().take(CUBE_2.lines().count() - 1).collect::<Vec<_>>().join("\n");
        let err = parse(&short).unwrap_err();
        assert!(matches!(err, LutError::SizeMismatch { expected: 8, actual: 7 }), "{err}");
    }

    #[test]
    fn late_size_declaration() {
        let cube = "LUT_3D_SIZE 2\n0 0 0\nLUT_1D_SIZE 4\n";
        assert!(matches!(parse(cube), Err(LutError::LateSizeDeclaration { line: 3 })));

        let cube = "0 0 0\nLUT_1D_SIZE 1\n";
        assert!(matches!(parse(cube), Err(LutError::LateSizeDeclaration { line: 2 })));
    }

    #[test]
    fn malformed_row_reports_physical_line() {
        let cube = "# header\nLUT_1D_SIZE 2\n\n0 0 0\n0.5 0.5\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDataRow { line: 5 })));

        let cube = "LUT_1D_SIZE 2\n0 0 0\n1 1 1 1\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDataRow { line: 3 })));

        let cube = "LUT_1D_SIZE 2\n0 0 0\n1 nan 1\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDataRow { line: 3 })));

        let cube = "LUT_1D_SIZE 2\n0 0 0\nfoo bar baz\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDataRow { line: 3 })));
    }

    #[test]
    fn invalid_sizes() {
        for cube in ["LUT_3D_SIZE 0\n", "LUT_3D_SIZE -2\n", "LUT_3D_SIZE x\n", "LUT_1D_SIZE\n", "LUT_1D_SIZE 2 3\n"] {
            assert!(matches!(parse(cube), Err(LutError::InvalidSize { line: 1 })), "{cube}");
        }
        assert!(matches!(
            parse("LUT_1D_SIZE 2\nLUT_1D_SIZE 2\n"),
            Err(LutError::DuplicateKeyword { line: 2 })
        ));
    }

    #[test]
    fn malformed_domain() {
        let cube = "LUT_1D_SIZE 2\nDOMAIN_MIN 0 0\n0 0 0\n1 1 1\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDomain { line: 2 })));

        let cube = "LUT_1D_SIZE 2\nDOMAIN_MIN 0 0.5 0\nDOMAIN_MAX 1 0.25 1\n0 0 0\n1 1 1\n";
        assert!(matches!(parse(cube), Err(LutError::MalformedDomain { line: 3 })));
    }

    #[test]
    fn domain_is_kept_not_applied() {
        let cube = "LUT_1D_SIZE 2\nDOMAIN_MIN -0.5 0 0\nDOMAIN_MAX 2 1 1\n0 0 0\n1 1 1\n";
        let doc = parse(cube).unwrap();
        assert_eq!(doc.domain_min, [-0.5, 0.0, 0.0]);
        assert_eq!(doc.domain_max, [2.0, 1.0, 1.0]);
        assert_eq!(doc.table_1d().unwrap().entries(), &[[0.0; 3], [1.0; 3]]);
    }

    #[test]
    fn undetermined_kind() {
        assert!(matches!(parse(""), Err(LutError::EmptyOrUndeterminedKind)));
        assert!(matches!(parse("# only\nTITLE \"x\"\n"), Err(LutError::EmptyOrUndeterminedKind)));
        assert!(matches!(parse("0 0 0\n1 1 1\n"), Err(LutError::EmptyOrUndeterminedKind)));
    }

    #[test]
    fn surplus_1d_rows_are_mismatch() {
        let cube = "LUT_1D_SIZE 2\n0 0 0\n0.5 0.5 0.5\n1 1 1\n";
        assert!(matches!(parse(cube), Err(LutError::SizeMismatch { expected: 2, actual: 3 })));
    }

    #[test]
    fn lenient_skips_bad_rows() {
        let cube = "LUT_1D_SIZE 2\nDOMAIN_MIN a b c\n0 0 0\nnot a row\n1 1 1\n";
        assert!(parse(cube).is_err());

        let doc = parse_with(cube, ParseOptions::lenient()).unwrap();
        assert_eq!(doc.size_1d(), Some(2));
        assert_eq!(doc.domain_min, [0.0; 3]);
    }

    #[test]
    fn lenient_still_checks_counts() {
        let cube = "LUT_3D_SIZE 2\n0 0 0\nbad\n";
        assert!(matches!(
            parse_with(cube, ParseOptions::lenient()),
            Err(LutError::SizeMismatch { expected: 8, actual: 1 })
        ));
    }

    #[test]
    fn crlf_and_bom() {
        let cube = "\u{feff}LUT_1D_SIZE 2\r\n0 0 0\r\n1 1 1\r\n";
        assert_eq!(parse(cube).unwrap().size_1d(), Some(2));
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shaper.cube");
        fs::write(&path, "TITLE \"Shaper\"\nLUT_1D_SIZE 2\n0 0.1 0.2\n0.9 0.95 1\n").unwrap();

        let doc = read_cube(&path).expect("read failed");
        assert_eq!(doc.title.as_deref(), Some("Shaper"));
        assert_eq!(doc.table_1d().unwrap().entries(), &[[0.0, 0.1, 0.2], [0.9, 0.95, 1.0]]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_cube(dir.path().join("nope.cube")), Err(LutError::Io(_))));
    }
}
