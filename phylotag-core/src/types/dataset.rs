use serde::{Deserialize, Serialize};
use std::fmt;

use super::taxonomy::{EUKARYOTE_FALLBACK, VIRUS_FALLBACK};

/// Which processing branch a run executes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dataset {
    /// Viral nucleotide and protein FASTA, regrouped by accession
    Virus,
    /// Eukaryotic assembly listing, one lineage per assembly
    Eukaryote,
    /// Any other selector value; the pipeline does nothing for it
    Unknown(String),
}

impl Dataset {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "virus" => Dataset::Virus,
            "euk" | "eukaryote" => Dataset::Eukaryote,
            other => Dataset::Unknown(other.to_string()),
        }
    }

    /// Lineage used in place of an unresolved one
    pub fn fallback_lineage(&self) -> Option<&'static str> {
        match self {
            Dataset::Virus => Some(VIRUS_FALLBACK),
            Dataset::Eukaryote => Some(EUKARYOTE_FALLBACK),
            Dataset::Unknown(_) => None,
        }
    }
}

impl std::str::FromStr for Dataset {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Dataset::parse(s))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Virus => write!(f, "virus"),
            Dataset::Eukaryote => write!(f, "euk"),
            Dataset::Unknown(value) => write!(f, "{}", value),
        }
    }
}

/// Molecule type of a FASTA source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceKind {
    Nucleotide,
    Protein,
}

impl SequenceKind {
    pub fn default_extension(&self) -> &'static str {
        match self {
            SequenceKind::Nucleotide => "fna",
            SequenceKind::Protein => "faa",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Nucleotide => write!(f, "nucleotide"),
            SequenceKind::Protein => write!(f, "protein"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parse() {
        assert_eq!(Dataset::parse("virus"), Dataset::Virus);
        assert_eq!(Dataset::parse("euk"), Dataset::Eukaryote);
        assert_eq!(Dataset::parse("eukaryote"), Dataset::Eukaryote);
        assert_eq!(
            Dataset::parse("bacteria"),
            Dataset::Unknown("bacteria".to_string())
        );
    }

    #[test]
    fn test_fallback_lineage() {
        assert_eq!(Dataset::Virus.fallback_lineage(), Some("d__Viruses;missing"));
        assert_eq!(
            Dataset::Eukaryote.fallback_lineage(),
            Some("d__Eukaryota;missing")
        );
        assert_eq!(Dataset::Unknown("x".into()).fallback_lineage(), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(SequenceKind::Nucleotide.default_extension(), "fna");
        assert_eq!(SequenceKind::Protein.default_extension(), "faa");
    }
}
