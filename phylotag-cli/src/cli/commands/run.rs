use super::report_summary;
use crate::cli::OutputMode;
use anyhow::Result;
use clap::Args;
use phylotag_core::load_config;
use phylotag_utils::info;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// TOML configuration describing the run
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override the dataset selected in the config ("virus" or "euk")
    #[arg(short, long)]
    pub dataset: Option<String>,
}

pub fn run(args: RunArgs, mode: &OutputMode) -> Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(dataset) = args.dataset {
        config.dataset = dataset;
    }
    if !mode.show_progress() {
        config.output.progress = false;
    }
    tracing::debug!(config = %args.config.display(), dataset = %config.dataset, "Starting run");

    if !mode.quiet && !mode.json {
        info(&format!(
            "Running '{}' dataset from {}",
            config.dataset,
            args.config.display()
        ));
    }

    let summary = phylotag_bio::run_pipeline(&config)?;
    report_summary(summary.as_ref(), mode)
}
