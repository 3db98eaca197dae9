mod batch_cmd;
mod check_cmd;
mod cli;
mod combine_cmd;
mod config;
mod convert;
mod correlation_cmd;
mod logging;
mod output;
mod weigh_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::PeakweightConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PeakweightConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Weigh(args) => weigh_cmd::run(args, &config),
        Command::Combine(args) => combine_cmd::run(args, &config),
        Command::Correlation(args) => correlation_cmd::run(args, &config),
        Command::CheckTables(args) => check_cmd::run(args, &config),
        Command::Batch(args) => batch_cmd::run(args, &config),
    }
}
