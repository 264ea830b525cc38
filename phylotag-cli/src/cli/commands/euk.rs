use super::{report_summary, TaxonomyArgs};
use crate::cli::OutputMode;
use anyhow::Result;
use clap::Args;
use phylotag_core::config::{EukaryoteConfig, OutputConfig};
use phylotag_core::{Config, Dataset};
use std::path::PathBuf;

#[derive(Args)]
pub struct EukArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Listing with accession, taxid, FASTA path and annotation path columns
    #[arg(value_name = "LISTING")]
    pub listing: PathBuf,

    /// Taxonomy table to write
    #[arg(short, long, value_name = "FILE", default_value = "euk_tax.tsv")]
    pub table: PathBuf,
}

pub fn run(args: EukArgs, mode: &OutputMode) -> Result<()> {
    let config = Config {
        dataset: Dataset::Eukaryote.to_string(),
        taxonomy: args.taxonomy.into(),
        virus: None,
        euk: Some(EukaryoteConfig {
            listing: args.listing,
            taxonomy_table: args.table,
        }),
        output: OutputConfig {
            progress: mode.show_progress(),
            ..OutputConfig::default()
        },
    };

    let summary = phylotag_bio::run_pipeline(&config)?;
    report_summary(summary.as_ref(), mode)
}
