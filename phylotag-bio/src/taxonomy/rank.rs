use serde::{Deserialize, Serialize};

/// Prefix carried by the domain (superkingdom) rank; lineage walks stop there
pub const DOMAIN_PREFIX: &str = "d__";

/// Taxonomic ranks that take part in lineage strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaxonomicRank {
    Superkingdom,
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
    Strain,
    /// Unranked intermediate nodes and every rank outside the set above
    NoRank,
}

impl TaxonomicRank {
    /// Parse a rank label from nodes.dmp
    pub fn from_label(label: &str) -> Self {
        match label {
            "superkingdom" => Self::Superkingdom,
            "kingdom" => Self::Kingdom,
            "phylum" => Self::Phylum,
            "class" => Self::Class,
            "order" => Self::Order,
            "family" => Self::Family,
            "genus" => Self::Genus,
            "species" => Self::Species,
            "strain" => Self::Strain,
            _ => Self::NoRank,
        }
    }

    /// Output prefix for this rank, if it appears in lineages at all.
    ///
    /// Strain is recognised but deliberately unprefixed, so strain-level
    /// nodes never show up in a lineage.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Superkingdom => Some(DOMAIN_PREFIX),
            Self::Kingdom => Some("k__"),
            Self::Phylum => Some("p__"),
            Self::Class => Some("c__"),
            Self::Order => Some("o__"),
            Self::Family => Some("f__"),
            Self::Genus => Some("g__"),
            Self::Species => Some("s__"),
            Self::Strain | Self::NoRank => None,
        }
    }
}

/// Map a rank label straight to its lineage prefix
pub fn classify_rank(label: &str) -> Option<&'static str> {
    TaxonomicRank::from_label(label).prefix()
}
