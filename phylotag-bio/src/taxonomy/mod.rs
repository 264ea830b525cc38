pub mod graph;
pub mod rank;
pub mod resolver;

// Re-export commonly used types
pub use graph::{parse_names, parse_nodes, LineageGraph};
pub use rank::{classify_rank, TaxonomicRank, DOMAIN_PREFIX};
pub use resolver::{LineageCache, LineageResolver, LINEAGE_SEPARATOR};
