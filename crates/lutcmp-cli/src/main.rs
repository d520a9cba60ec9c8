//! lutcmp - compare `.cube` LUTs against reference tone curves
//!
//! Sweeps exposures through the log curve, the LUT and the display curve,
//! and prints how far the LUT output drifts from the reference.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lutcmp_color::LutStage;
use lutcmp_lut::Extrapolation;
use lutcmp_primaries::ColorSpace;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "lutcmp")]
#[command(author, version, about = "Compare .cube LUTs against reference tone curves")]
#[command(long_about = "
Runs an exposure sweep (1% to 96%, step 5) through a .cube LUT and
compares the result with the reference log and display curves.

Examples:
  lutcmp analyze look.cube --space S-Gamut3.Cine
  lutcmp analyze 'luts/*.cube' --space S-Gamut3 --json
  lutcmp analyze shaper.cube --space S-Gamut3 --stage chained
  lutcmp info look.cube
  lutcmp -vv --log-file lutcmp.log analyze look.cube --space S-Gamut3
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare LUT output with the reference curves
    #[command(visible_alias = "a")]
    Analyze(AnalyzeArgs),

    /// Show LUT file information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// LUT files or glob patterns
    #[arg(required = true)]
    input: Vec<String>,

    /// Gamut of the LUT output: S-Gamut3, S-Gamut3.Cine
    #[arg(short, long)]
    space: ColorSpace,

    /// Table(s) to sample: auto, 1d, 3d, chained
    #[arg(long, default_value = "auto")]
    stage: LutStage,

    /// Out-of-grid policy for 3D lookups: gradient, clamp
    #[arg(long, default_value = "gradient")]
    extrapolation: Extrapolation,

    /// Skip malformed rows instead of failing
    #[arg(long)]
    lenient: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Skip malformed rows instead of failing
    #[arg(long)]
    lenient: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the global subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; without either only
/// warnings are shown. The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    let Some(path) = log_file else {
        registry.try_init().context("Failed to install logger")?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Invalid log file: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));

    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("Failed to install logger")?;
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
