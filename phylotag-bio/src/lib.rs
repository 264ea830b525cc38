//! Lineage resolution and record association for phylotag

pub mod accession;
pub mod associate;
pub mod formats;
pub mod io;
pub mod pipeline;
pub mod taxonomy;

// Re-export commonly used types
pub use accession::{normalize_accession, AccessionTaxidIndex};
pub use associate::{process_eukaryotes, process_virus, RunSummary};
pub use formats::fasta::{AccessionGroup, RecordGroups};
pub use pipeline::run_pipeline;
pub use taxonomy::{LineageCache, LineageGraph, LineageResolver, TaxonomicRank};
