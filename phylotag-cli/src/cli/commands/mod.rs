pub mod config;
pub mod euk;
pub mod lineage;
pub mod run;
pub mod virus;

use crate::cli::OutputMode;
use anyhow::Result;
use clap::Args;
use phylotag_bio::RunSummary;
use phylotag_core::config::TaxonomyConfig;
use phylotag_utils::{format_number, success, warning};
use std::path::PathBuf;

/// Location of the NCBI taxonomy dump, shared by every command that
/// resolves lineages
#[derive(Args, Debug, Clone)]
pub struct TaxonomyArgs {
    /// nodes.dmp (optionally .gz or .xz)
    #[arg(long, value_name = "FILE", env = "PHYLOTAG_NODES", default_value = "nodes.dmp")]
    pub nodes: PathBuf,

    /// names.dmp (optionally .gz or .xz)
    #[arg(long, value_name = "FILE", env = "PHYLOTAG_NAMES", default_value = "names.dmp")]
    pub names: PathBuf,
}

impl From<TaxonomyArgs> for TaxonomyConfig {
    fn from(args: TaxonomyArgs) -> Self {
        Self {
            nodes: args.nodes,
            names: args.names,
        }
    }
}

/// Print what a dataset run produced
pub fn report_summary(summary: Option<&RunSummary>, mode: &OutputMode) -> Result<()> {
    let Some(summary) = summary else {
        if !mode.quiet {
            warning("Dataset not recognised; nothing was written");
        }
        return Ok(());
    };

    if mode.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    if mode.quiet {
        return Ok(());
    }

    success(&format!(
        "{} dataset: {} accessions, {} table rows",
        summary.dataset,
        format_number(summary.accessions),
        format_number(summary.rows_written)
    ));
    if summary.files_written > 0 {
        success(&format!(
            "Wrote {} sequence files from {} headers",
            format_number(summary.files_written),
            format_number(summary.headers)
        ));
    }
    if summary.missing_taxids > 0 {
        warning(&format!(
            "{} accessions had no taxid",
            format_number(summary.missing_taxids)
        ));
    }
    if summary.unresolved_lineages > 0 {
        warning(&format!(
            "{} taxids fell back to the domain-only lineage",
            format_number(summary.unresolved_lineages)
        ));
    }
    Ok(())
}
