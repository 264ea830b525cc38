//! Attach lineages to sequence records and write the taxonomy tables

pub mod eukaryote;
pub mod virus;

pub use eukaryote::{process_eukaryotes, EukaryoteRow};
pub use virus::{process_virus, RecordAssociator};

use crate::formats::IngestStats;
use indicatif::ProgressBar;
use phylotag_core::Dataset;
use phylotag_utils::progress::{create_hidden_spinner, create_spinner};
use serde::{Deserialize, Serialize};

/// What one dataset run produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub dataset: String,
    /// Distinct accessions (virus) or listing rows (eukaryote)
    pub accessions: usize,
    /// FASTA headers read across all sources
    pub headers: usize,
    /// Per-accession sequence files written, counting rewrites
    pub files_written: usize,
    pub rows_written: usize,
    /// Accessions absent from their accession/taxid table
    pub missing_taxids: usize,
    /// Distinct taxids whose lineage fell back to the dataset default
    pub unresolved_lineages: usize,
}

impl RunSummary {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            dataset: dataset.to_string(),
            ..Self::default()
        }
    }

    fn absorb(&mut self, stats: &IngestStats) {
        self.headers += stats.headers;
        self.missing_taxids += stats.missing_taxids;
    }
}

fn spinner(show_progress: bool, message: &str) -> ProgressBar {
    if show_progress {
        create_spinner(message)
    } else {
        create_hidden_spinner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes() {
        let mut summary = RunSummary::new(&Dataset::Virus);
        summary.absorb(&IngestStats {
            lines: 10,
            headers: 4,
            new_accessions: 3,
            missing_taxids: 1,
        });

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["dataset"], "virus");
        assert_eq!(json["headers"], 4);
        assert_eq!(json["missing_taxids"], 1);
    }
}
