pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "phylotag",
    version,
    about = "Taxonomic lineage annotation for sequence collections",
    long_about = "Phylotag resolves NCBI taxids to rank-prefixed lineages (d__;k__;p__;...;s__) \
                  and uses them to annotate viral FASTA collections, regrouped into one file \
                  per accession, and eukaryotic assembly listings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide progress spinners and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dataset described by a TOML config file
    Run(commands::run::RunArgs),

    /// Regroup viral nucleotide and protein FASTA by accession
    Virus(commands::virus::VirusArgs),

    /// Annotate a eukaryotic assembly listing
    Euk(commands::euk::EukArgs),

    /// Resolve taxids to lineage strings
    Lineage(commands::lineage::LineageArgs),

    /// Print or write a configuration template
    Config(commands::config::ConfigArgs),
}

/// How a command reports to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputMode {
    pub quiet: bool,
    pub json: bool,
}

impl OutputMode {
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
