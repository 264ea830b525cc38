//! Multi-header FASTA grouped by accession
//!
//! Headers are pipe-delimited with the accession in the third field:
//! `>gi|123|NC_045512.2|...`. Every header under one accession ends up in
//! the same per-accession file, in the order the headers were first seen.

use crate::accession::{normalize_accession, AccessionTaxidIndex};
use indexmap::map::Entry;
use indexmap::IndexMap;
use indicatif::ProgressBar;
use phylotag_core::{PhylotagError, PhylotagResult, TaxonId};
use phylotag_utils::progress::SPINNER_TICK_LINES;
use std::io::{BufRead, Write};
use std::path::Path;

const ACCESSION_FIELD: usize = 2;
const SEPARATOR_PREFIX: &str = "--";

/// Accession from a header (without the leading `>`), if it has one
pub fn header_accession(header: &str) -> Option<&str> {
    header.split('|').nth(ACCESSION_FIELD)
}

/// All records seen for one accession, plus its taxid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessionGroup {
    taxid: TaxonId,
    records: IndexMap<String, String>,
}

impl AccessionGroup {
    pub fn new(taxid: TaxonId) -> Self {
        Self {
            taxid,
            records: IndexMap::new(),
        }
    }

    pub fn taxid(&self) -> &TaxonId {
        &self.taxid
    }

    /// Header to sequence, in first-seen header order
    pub fn records(&self) -> &IndexMap<String, String> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Start (or restart) a record; returns its position in the group.
    ///
    /// A header seen again keeps its original position but its sequence
    /// starts over.
    fn start_record(&mut self, header: &str) -> usize {
        match self.records.get_full_mut(header) {
            Some((idx, _, sequence)) => {
                sequence.clear();
                idx
            }
            None => self.records.insert_full(header.to_string(), String::new()).0,
        }
    }

    /// Write every record as `>header\nsequence\n`
    pub fn write_fasta<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (header, sequence) in &self.records {
            writeln!(writer, ">{}", header)?;
            writeln!(writer, "{}", sequence)?;
        }
        Ok(())
    }
}

/// Counters for one streamed source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: u64,
    pub headers: usize,
    pub new_accessions: usize,
    /// New accessions the index had no row for
    pub missing_taxids: usize,
}

/// Accession-keyed record groups, in first-seen accession order.
///
/// Keys are raw accessions (version included); only the taxid lookup uses
/// the normalised form.
#[derive(Debug, Default)]
pub struct RecordGroups {
    groups: IndexMap<String, AccessionGroup>,
}

impl RecordGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, accession: &str) -> Option<&AccessionGroup> {
        self.groups.get(accession)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AccessionGroup)> {
        self.groups.iter()
    }

    /// Stream a FASTA source into the groups.
    ///
    /// The index is consulted once per new accession; headers for an
    /// accession already present (from this source or an earlier one) join
    /// the existing group and keep its taxid. Lines starting with `--` are
    /// dropped.
    pub fn ingest<R: BufRead>(
        &mut self,
        reader: R,
        source: &Path,
        index: &AccessionTaxidIndex,
        pb: &ProgressBar,
    ) -> PhylotagResult<IngestStats> {
        let mut stats = IngestStats::default();
        // (group position, record position) of the header being filled
        let mut current: Option<(usize, usize)> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            stats.lines += 1;

            if line.starts_with('>') {
                let header = line.trim().trim_start_matches('>');
                let accession = header_accession(header).ok_or_else(|| {
                    PhylotagError::malformed_row(
                        source,
                        line_no,
                        format!("header has no accession in field {}: {}", ACCESSION_FIELD + 1, header),
                    )
                })?;

                let group_idx = match self.groups.entry(accession.to_string()) {
                    Entry::Occupied(entry) => entry.index(),
                    Entry::Vacant(entry) => {
                        let taxid = index.lookup(normalize_accession(accession));
                        if taxid.is_missing() {
                            stats.missing_taxids += 1;
                            tracing::debug!(accession, "No taxid for accession");
                        }
                        stats.new_accessions += 1;
                        let group_idx = entry.index();
                        entry.insert(AccessionGroup::new(taxid));
                        group_idx
                    }
                };

                let (_, group) = self
                    .groups
                    .get_index_mut(group_idx)
                    .ok_or_else(|| PhylotagError::Other("record group vanished".to_string()))?;
                current = Some((group_idx, group.start_record(header)));
                stats.headers += 1;
            } else if line.starts_with(SEPARATOR_PREFIX) {
                continue;
            } else {
                let (group_idx, record_idx) = current.ok_or_else(|| {
                    PhylotagError::malformed_row(source, line_no, "sequence data before the first header")
                })?;
                if let Some((_, sequence)) = self
                    .groups
                    .get_index_mut(group_idx)
                    .and_then(|(_, group)| group.records.get_index_mut(record_idx))
                {
                    sequence.push_str(line.trim_end());
                }
            }

            if stats.lines % SPINNER_TICK_LINES == 0 {
                pb.inc(SPINNER_TICK_LINES);
            }
        }

        Ok(stats)
    }
}
