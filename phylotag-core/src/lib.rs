//! Core utilities and types shared across all phylotag crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{PhylotagError, PhylotagResult};

pub use types::{
    Dataset, SequenceKind, TaxonId, EUKARYOTE_FALLBACK, MISSING, VIRUS_FALLBACK,
};

/// Version information for the phylotag project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
