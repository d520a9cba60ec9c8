//! CLI command implementations

pub mod analyze;
pub mod info;

use anyhow::{Context, Result, bail};
use lutcmp_lut::{CubeDocument, ParseOptions};
use std::path::{Path, PathBuf};

/// Load a `.cube` document from path
pub fn load_cube(path: &Path, lenient: bool) -> Result<CubeDocument> {
    let options = if lenient {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    };
    lutcmp_lut::cube::read_cube_with(path, options)
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Expands glob patterns; plain paths pass through unchanged.
///
/// Fails if a pattern is invalid or nothing at all matches.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let before = files.len();
        files.extend(
            glob::glob(pattern)
                .with_context(|| format!("Invalid pattern: {pattern}"))?
                .filter_map(|r| r.ok()),
        );
        if files.len() == before {
            tracing::warn!(pattern = %pattern, "pattern matched no files");
        }
    }

    if files.is_empty() {
        bail!("No files match: {}", patterns.join(" "));
    }
    Ok(files)
}
