pub mod fasta;
pub mod table;

pub use fasta::{header_accession, AccessionGroup, IngestStats, RecordGroups};
pub use table::TaxonomyTableWriter;
