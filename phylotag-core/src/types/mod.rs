//! Shared domain types

pub mod dataset;
pub mod taxonomy;

pub use dataset::{Dataset, SequenceKind};
pub use taxonomy::{TaxonId, EUKARYOTE_FALLBACK, MISSING, VIRUS_FALLBACK};
