//! Symmetry CLI
//!
//! Scores the bilateral symmetry of a tab-separated table of cell positions.
//!
//! Usage:
//!     symmetry cells.tsv --axis 250
//!     symmetry cells.tsv --axis 250 --find --strategy kd-tree --output report.json
//!     symmetry cells.tsv --config run.yaml --no-find --json

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use bilateral_symmetry::{BilateralSymmetry, MatchStrategy, SymmetryConfig, SymmetryReport};
use clap::Parser;
use common::file_format::FileFormat;
use log::info;

/// Bilateral symmetry score for 2D cell positions
#[derive(Parser)]
#[command(name = "symmetry")]
#[command(version)]
#[command(about = "Score how well one half of a point cloud mirrors the other", long_about = None)]
struct Cli {
    /// Headerless table of `x<TAB>y` rows
    input: PathBuf,

    /// Axis y-value (provisional split when --find is set)
    #[arg(short, long, allow_hyphen_values = true)]
    axis: Option<f64>,

    /// Place the axis midway between the two halves' closest points
    #[arg(short, long, overrides_with = "no_find")]
    find: bool,

    /// Use the axis as given, even if the config file sets `find`
    #[arg(long, overrides_with = "find")]
    no_find: bool,

    /// Nearest-neighbour search: linear or kd-tree
    #[arg(short, long)]
    strategy: Option<MatchStrategy>,

    /// YAML or JSON file with default run parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the full report to this YAML or JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the full report as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "info" or "debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn symmetry_config(&self) -> anyhow::Result<SymmetryConfig> {
        let mut config = match &self.config {
            Some(path) => SymmetryConfig::from_file(path)?,
            None => SymmetryConfig::default(),
        };

        if let Some(axis) = self.axis {
            config.symmetry_temp = axis;
        }
        if self.find {
            config.find = true;
        } else if self.no_find {
            config.find = false;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = common::log_setup::setup_logging(&cli.log_level)?;

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Scores `cli.input` and writes the result to `out`. Logging never goes to
/// `out`, so `--json` output can be piped straight into a parser.
fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = cli.symmetry_config()?;
    info!(
        "Scoring {} with axis {} (find={}, strategy={})",
        cli.input.display(),
        config.symmetry_temp,
        config.find,
        config.strategy
    );

    let mut analysis = BilateralSymmetry::from_file(&cli.input, &config)
        .with_context(|| format!("Failed to prepare '{}'", cli.input.display()))?;
    let outcome = analysis
        .evaluate()
        .with_context(|| format!("Failed to score '{}'", cli.input.display()))?;
    let report = analysis.report(&outcome);

    if let Some(path) = &cli.output {
        let format = FileFormat::from_file_name(path)?;
        let file = File::create(path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        common::serde::serialize_into(&report, format, &mut writer)?;
        writer.flush()?;
        info!("Report written to {}", path.display());
    }

    write_result(&report, cli.json, out)
}

fn write_result<W: Write>(report: &SymmetryReport, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        common::serde::serialize_into(report, FileFormat::Json, out)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{:.6}", report.score)?;
    }
    out.flush()?;

    Ok(())
}
