use super::{report_summary, TaxonomyArgs};
use crate::cli::OutputMode;
use anyhow::Result;
use clap::Args;
use phylotag_core::config::{OutputConfig, VirusConfig};
use phylotag_core::{Config, Dataset};
use std::path::PathBuf;

#[derive(Args)]
pub struct VirusArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Nucleotide FASTA (optionally .gz or .xz)
    #[arg(long = "nucleotides", value_name = "FILE")]
    pub nucleotide_fasta: PathBuf,

    /// Protein FASTA (optionally .gz or .xz)
    #[arg(long = "proteins", value_name = "FILE")]
    pub protein_fasta: PathBuf,

    /// Accession to taxid table for the nucleotide FASTA
    #[arg(long = "nucleotide-taxids", value_name = "FILE")]
    pub nucleotide_taxids: PathBuf,

    /// Accession to taxid table for the protein FASTA
    #[arg(long = "protein-taxids", value_name = "FILE")]
    pub protein_taxids: PathBuf,

    /// Directory receiving one sequence file per accession
    #[arg(short, long, value_name = "DIR", default_value = "virus")]
    pub output_dir: PathBuf,

    /// Taxonomy table to write
    #[arg(short, long, value_name = "FILE", default_value = "virus_tax.tsv")]
    pub table: PathBuf,

    /// Extension for nucleotide output files
    #[arg(long, default_value = "fna")]
    pub nucleotide_extension: String,

    /// Extension for protein output files
    #[arg(long, default_value = "faa")]
    pub protein_extension: String,
}

pub fn run(args: VirusArgs, mode: &OutputMode) -> Result<()> {
    let config = Config {
        dataset: Dataset::Virus.to_string(),
        taxonomy: args.taxonomy.into(),
        virus: Some(VirusConfig {
            nucleotide_fasta: args.nucleotide_fasta,
            protein_fasta: args.protein_fasta,
            nucleotide_taxids: args.nucleotide_taxids,
            protein_taxids: args.protein_taxids,
            output_dir: args.output_dir,
            taxonomy_table: args.table,
        }),
        euk: None,
        output: OutputConfig {
            nucleotide_extension: args.nucleotide_extension,
            protein_extension: args.protein_extension,
            progress: mode.show_progress(),
        },
    };

    let summary = phylotag_bio::run_pipeline(&config)?;
    report_summary(summary.as_ref(), mode)
}
