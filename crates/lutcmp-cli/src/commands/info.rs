//! LUT file information command

use crate::InfoArgs;
use crate::commands::load_cube;
use anyhow::{Context, Result};
use lutcmp_lut::CubeDocument;
use serde::Serialize;
use std::path::Path;
use tracing::trace;

#[derive(Serialize)]
struct Summary<'a> {
    file: &'a Path,
    title: Option<&'a str>,
    kind: String,
    size_1d: Option<usize>,
    size_3d: Option<usize>,
    domain_min: [f64; 3],
    domain_max: [f64; 3],
}

impl<'a> Summary<'a> {
    fn new(file: &'a Path, doc: &'a CubeDocument) -> Self {
        Self {
            file,
            title: doc.title.as_deref(),
            kind: doc.kind().to_string(),
            size_1d: doc.size_1d(),
            size_3d: doc.size_3d(),
            domain_min: doc.domain_min,
            domain_max: doc.domain_max,
        }
    }
}

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(inputs = args.input.len(), "info::run");

    let docs = args
        .input
        .iter()
        .map(|path| load_cube(path, args.lenient))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let summaries: Vec<Summary<'_>> = args
            .input
            .iter()
            .zip(&docs)
            .map(|(path, doc)| Summary::new(path, doc))
            .collect();
        let json = serde_json::to_string_pretty(&summaries).context("Failed to encode JSON")?;
        println!("{json}");
        return Ok(());
    }

    for (path, doc) in args.input.iter().zip(&docs) {
        print_summary(&Summary::new(path, doc));

        if verbose > 0 {
            if let Some(t) = doc.table_1d() {
                print_range("1D", t.entries());
            }
            if let Some(t) = doc.table_3d() {
                print_range("3D", t.entries());
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &Summary<'_>) {
    println!("File: {}", summary.file.display());
    if let Some(title) = summary.title {
        println!("  Title:  {title}");
    }
    println!("  Kind:   {}", summary.kind);
    if let Some(n) = summary.size_1d {
        println!("  1D:     {n} entries");
    }
    if let Some(n) = summary.size_3d {
        println!("  3D:     {n}x{n}x{n}");
    }
    println!("  Domain: {:?} .. {:?}", summary.domain_min, summary.domain_max);
}

/// Prints per-channel output range of a table.
fn print_range(label: &str, entries: &[[f64; 3]]) {
    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for rgb in entries {
        for c in 0..3 {
            lo[c] = lo[c].min(rgb[c]);
            hi[c] = hi[c].max(rgb[c]);
        }
    }
    println!(
        "  {label} range: R {:.4}..{:.4}  G {:.4}..{:.4}  B {:.4}..{:.4}",
        lo[0], hi[0], lo[1], hi[1], lo[2], hi[2]
    );
}
