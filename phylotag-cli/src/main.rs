use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands, OutputMode};
use phylotag_core::PhylotagError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then PHYLOTAG_LOG, then the -v count
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("PHYLOTAG_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<PhylotagError>() {
            Some(PhylotagError::Configuration(_)) => 2,
            Some(PhylotagError::Io(_)) => 3,
            Some(PhylotagError::Parse(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = OutputMode {
        quiet: cli.quiet,
        json: cli.json,
    };

    match cli.command {
        Commands::Run(args) => crate::cli::commands::run::run(args, &mode),
        Commands::Virus(args) => crate::cli::commands::virus::run(args, &mode),
        Commands::Euk(args) => crate::cli::commands::euk::run(args, &mode),
        Commands::Lineage(args) => crate::cli::commands::lineage::run(args, &mode),
        Commands::Config(args) => crate::cli::commands::config::run(args),
    }
}
