//! Accession to taxid lookup

use crate::io::open_text_source;
use phylotag_core::{PhylotagError, PhylotagResult, TaxonId};
use phylotag_utils::progress::{create_hidden_spinner, create_spinner, SPINNER_TICK_LINES};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Strip the version suffix: everything from the first `.` onward.
///
/// `NC_045512.2` becomes `NC_045512`; an accession without a dot is returned
/// unchanged.
pub fn normalize_accession(accession: &str) -> &str {
    accession.split('.').next().unwrap_or(accession)
}

/// Hash index from version-less accession to taxid.
///
/// Built once from a two-column `accession<TAB>taxid` table and queried for
/// every new accession in a FASTA source.
#[derive(Debug, Default)]
pub struct AccessionTaxidIndex {
    taxids: HashMap<String, TaxonId>,
    duplicates: usize,
}

impl AccessionTaxidIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> PhylotagResult<Self> {
        Self::load(path, false)
    }

    /// Load a table from disk, optionally with a spinner
    pub fn load(path: &Path, show_progress: bool) -> PhylotagResult<Self> {
        let pb = if show_progress {
            create_spinner(&format!("Indexing {}", path.display()))
        } else {
            create_hidden_spinner()
        };

        let mut index = Self::new();
        for (idx, line) in open_text_source(path)?.lines().enumerate() {
            index.insert_row(&line?, path, idx + 1)?;
            if (idx as u64 + 1) % SPINNER_TICK_LINES == 0 {
                pb.inc(SPINNER_TICK_LINES);
            }
        }
        pb.finish_and_clear();

        tracing::info!(
            path = %path.display(),
            accessions = index.len(),
            duplicates = index.duplicates,
            "Built accession index"
        );
        Ok(index)
    }

    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> PhylotagResult<Self> {
        let mut index = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            index.insert_row(&line?, source, idx + 1)?;
        }
        Ok(index)
    }

    fn insert_row(&mut self, line: &str, source: &Path, line_no: usize) -> PhylotagResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let mut fields = line.split('\t');
        let (Some(accession), Some(taxid)) = (fields.next(), fields.next()) else {
            return Err(PhylotagError::malformed_row(
                source,
                line_no,
                "expected 'accession<TAB>taxid'",
            ));
        };

        self.insert(accession, TaxonId::from(taxid.trim()));
        Ok(())
    }

    /// Add a mapping. The first row for a normalised accession wins.
    pub fn insert(&mut self, accession: &str, taxid: TaxonId) {
        match self.taxids.entry(normalize_accession(accession).to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(taxid);
            }
            Entry::Occupied(_) => self.duplicates += 1,
        }
    }

    pub fn get(&self, accession: &str) -> Option<&TaxonId> {
        self.taxids.get(normalize_accession(accession))
    }

    /// Taxid for `accession`, ignoring any version suffix, or the
    /// `missing` sentinel when the table has no row for it.
    pub fn lookup(&self, accession: &str) -> TaxonId {
        self.get(accession).cloned().unwrap_or_else(TaxonId::missing)
    }

    pub fn len(&self) -> usize {
        self.taxids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxids.is_empty()
    }

    /// Rows skipped because their accession was already indexed
    pub fn duplicate_rows(&self) -> usize {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn index(table: &str) -> AccessionTaxidIndex {
        AccessionTaxidIndex::from_reader(Cursor::new(table), Path::new("taxids.tsv")).unwrap()
    }

    #[test]
    fn test_normalize_accession() {
        assert_eq!(normalize_accession("AB123.1"), "AB123");
        assert_eq!(normalize_accession("AB123"), "AB123");
        assert_eq!(normalize_accession("NC_045512.2.extra"), "NC_045512");
        assert_eq!(normalize_accession(""), "");
    }

    #[test]
    fn test_lookup_ignores_version() {
        let idx = index("AB123\t10239\nCD456\t11320\n");

        assert_eq!(idx.lookup("AB123.1").as_str(), "10239");
        assert_eq!(idx.lookup("AB123.2").as_str(), "10239");
        assert_eq!(idx.lookup("AB123").as_str(), "10239");
        assert_eq!(idx.lookup("CD456.9").as_str(), "11320");
    }

    #[test]
    fn test_unknown_accession_is_missing() {
        let idx = index("AB123\t10239\n");
        assert!(idx.lookup("ZZ999.1").is_missing());
        assert!(idx.get("ZZ999").is_none());
    }

    #[test]
    fn test_versioned_table_keys_are_normalised() {
        let idx = index("AB123.4\t10239\n");
        assert_eq!(idx.lookup("AB123.1").as_str(), "10239");
    }

    #[test]
    fn test_first_row_wins() {
        let idx = index("AB123\t10239\nAB123.2\t2\n");
        assert_eq!(idx.lookup("AB123").as_str(), "10239");
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.duplicate_rows(), 1);
    }

    #[test]
    fn test_extra_columns_and_carriage_returns() {
        let idx = index("AB123\t10239\t12345\r\nCD456\t2\r\n");
        assert_eq!(idx.lookup("AB123").as_str(), "10239");
        assert_eq!(idx.lookup("CD456").as_str(), "2");
    }

    #[test]
    fn test_single_column_row_is_fatal() {
        let err = AccessionTaxidIndex::from_reader(
            Cursor::new("AB123\t10239\nbroken\n"),
            Path::new("taxids.tsv"),
        )
        .unwrap_err();

        match err {
            PhylotagError::Parse(msg) => assert!(msg.starts_with("taxids.tsv:2:")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let idx = index("AB123\t10239\n\nCD456\t2\n   \n");
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.lookup("CD456.1").as_str(), "2");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn version_suffix_never_changes_the_answer(
                base in "[A-Z]{1,3}_?[0-9]{1,9}",
                v1 in 1u32..100,
                v2 in 1u32..100,
            ) {
                let mut idx = AccessionTaxidIndex::new();
                idx.insert(&base, TaxonId::from("10239"));

                let a = idx.lookup(&format!("{}.{}", base, v1));
                let b = idx.lookup(&format!("{}.{}", base, v2));
                prop_assert_eq!(a.as_str(), "10239");
                prop_assert_eq!(a, b);
            }

            #[test]
            fn normalised_form_has_no_dot(acc in "[A-Za-z0-9_.]{0,20}") {
                prop_assert!(!normalize_accession(&acc).contains('.'));
            }
        }
    }
}
