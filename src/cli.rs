use std::path::PathBuf;

use clap::{Parser, Subcommand};
use peakweight_gls::{CodedEstimate, Estimate};

/// Peakweight: weighted peak-flow estimates from correlated methods.
#[derive(Parser)]
#[command(
    name = "peakweight",
    version,
    about = "Weight correlated peak-flow estimates by generalized least squares"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Weight coded estimates, looking correlations up by region.
    Weigh(WeighArgs),
    /// Weight estimates with explicitly supplied correlations.
    Combine(CombineArgs),
    /// Print the correlation between two flow-statistic codes.
    Correlation(CorrelationArgs),
    /// Load and validate the reference tables.
    CheckTables(CheckTablesArgs),
    /// Weight many sites from a JSON file in parallel.
    Batch(BatchArgs),
}

/// Arguments for the `weigh` subcommand.
#[derive(clap::Args)]
pub struct WeighArgs {
    /// Regression-region code, e.g. GC1851.
    #[arg(short, long)]
    pub region: String,

    /// Estimate as CODE:VALUE:SEP (repeat 2-4 times).
    #[arg(short, long = "estimate", value_parser = parse_coded_estimate, required = true)]
    pub estimates: Vec<CodedEstimate>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `combine` subcommand.
#[derive(clap::Args)]
pub struct CombineArgs {
    /// Estimate as VALUE:SEP (repeat 2-4 times).
    #[arg(short, long = "estimate", value_parser = parse_estimate, required = true)]
    pub estimates: Vec<Estimate>,

    /// Upper-triangle correlations, comma separated: r12 or r12,r13,r23 or
    /// r12,r13,r14,r23,r24,r34.
    #[arg(
        short = 'r',
        long = "r",
        value_delimiter = ',',
        allow_negative_numbers = true,
        required = true
    )]
    pub correlations: Vec<f64>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `correlation` subcommand.
#[derive(clap::Args)]
pub struct CorrelationArgs {
    /// Regression-region code, e.g. GC1851.
    #[arg(short, long)]
    pub region: String,

    /// First flow-statistic code.
    pub code_a: String,

    /// Second flow-statistic code.
    pub code_b: String,
}

/// Arguments for the `check-tables` subcommand.
#[derive(clap::Args)]
pub struct CheckTablesArgs {
    /// Reference-table TOML to check instead of the configured one.
    #[arg(short, long)]
    pub tables: Option<PathBuf>,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// JSON array of sites: `[{"site", "region", "estimates": [{"code", "value", "sep"}]}]`.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_f64(field: &str, s: &str) -> Result<f64, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("{field} is not a number: {s:?}"))
}

/// Parses `CODE:VALUE:SEP`.
pub fn parse_coded_estimate(s: &str) -> Result<CodedEstimate, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [code, value, sep] if !code.trim().is_empty() => Ok(CodedEstimate::new(
            code.trim(),
            parse_f64("value", value)?,
            parse_f64("SEP", sep)?,
        )),
        _ => Err(format!("expected CODE:VALUE:SEP, got {s:?}")),
    }
}

/// Parses `VALUE:SEP`.
pub fn parse_estimate(s: &str) -> Result<Estimate, String> {
    match s.split_once(':') {
        Some((value, sep)) => Ok(Estimate::new(
            parse_f64("value", value)?,
            parse_f64("SEP", sep)?,
        )),
        None => Err(format!("expected VALUE:SEP, got {s:?}")),
    }
}
