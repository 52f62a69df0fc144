//! Filedag CLI Binary
//!
//! Command-line interface for exploring multi-parent file hierarchies.

use anyhow::Context;
use clap::Parser;
use filedag::config::{ConfigLoader, DagConfig};
use filedag::logging::init_logging;
use filedag::tooling::cli::{Cli, CliContext};
use std::process;

fn load_config(cli: &Cli) -> anyhow::Result<DagConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let logging = &mut config.logging;
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        logging.file = Some(file.clone());
    }
    if let Some(cycles) = cli.cycles {
        config.graph.cycle_policy = cycles.into();
    }
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli).context("loading configuration")?;
    init_logging(Some(&config.logging)).context("initializing logging")?;

    let context = CliContext::new(cli.records.clone(), config)
        .with_context(|| format!("loading records from {}", cli.records.display()))?;

    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
