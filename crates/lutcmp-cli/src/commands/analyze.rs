//! Exposure sweep command

use crate::AnalyzeArgs;
use crate::commands::{expand_inputs, load_cube};
use anyhow::{Context, Result, bail};
use lutcmp_color::{Comparison, ComparisonTable};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Analysis of one file.
#[derive(Serialize)]
struct Report {
    file: PathBuf,
    title: Option<String>,
    #[serde(flatten)]
    table: ComparisonTable,
}

pub fn run(args: AnalyzeArgs, verbose: u8) -> Result<()> {
    trace!(inputs = ?args.input, space = %args.space, stage = %args.stage, "analyze::run");

    let files = expand_inputs(&args.input)?;
    let comparison = Comparison::new(args.space)
        .with_stage(args.stage)
        .with_extrapolation(args.extrapolation);

    info!(files = files.len(), space = %args.space, "Starting analysis");
    if verbose > 0 && files.len() > 1 {
        eprintln!("Analyzing {} files", files.len());
    }

    // Each file gets its own document; nothing is shared between workers.
    let results: Vec<Result<Report>> = files
        .par_iter()
        .map(|path| analyze_file(path, &comparison, args.lenient))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for r in results {
        match r {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                eprintln!("Error: {e:#}");
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("Failed to encode JSON")?;
        println!("{json}");
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    info!(success = reports.len(), failed = failed, "Analysis complete");

    if failed > 0 {
        bail!("{} files failed", failed);
    }
    Ok(())
}

fn analyze_file(path: &Path, comparison: &Comparison, lenient: bool) -> Result<Report> {
    let doc = load_cube(path, lenient)?;
    debug!(file = %path.display(), kind = %doc.kind(), "loaded");

    let table = comparison
        .build(&doc)
        .with_context(|| format!("Failed to analyze: {}", path.display()))?;

    Ok(Report {
        file: path.to_path_buf(),
        title: doc.title,
        table,
    })
}

fn print_report(report: &Report) {
    let table = &report.table;
    println!("File: {}", report.file.display());
    if let Some(title) = &report.title {
        println!("  Title:  {title}");
    }
    println!("  Space:  {}", table.color_space());
    println!("  Table:  {}", table.table());
    println!();
    println!("  {:>5}  {:>8}  {:>9}  {:>8}  {:>8}", "Exp%", "Log%", "Display%", "LUT%", "Delta");
    for row in table {
        println!(
            "  {:>5}  {:>8.3}  {:>9.3}  {:>8.3}  {:>+8.3}",
            row.exposure_pct,
            row.log_pct,
            row.display_pct,
            row.lut_pct,
            row.deviation()
        );
    }
    if let Some(worst) = table.max_deviation() {
        println!();
        println!(
            "  Max deviation: {:+.3} at {}% exposure",
            worst.deviation(),
            worst.exposure_pct
        );
    }
    println!();
}
