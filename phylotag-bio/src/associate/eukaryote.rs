//! Eukaryote dataset: one lineage row per assembly listing row

use super::{spinner, RunSummary};
use crate::formats::TaxonomyTableWriter;
use crate::io::open_text_source;
use crate::taxonomy::{LineageCache, LineageGraph};
use phylotag_core::config::EukaryoteConfig;
use phylotag_core::{Dataset, PhylotagError, PhylotagResult};
use phylotag_utils::progress::SPINNER_TICK_LINES;
use std::io::BufRead;
use std::path::Path;

const LISTING_COLUMNS: usize = 4;

/// One row of the assembly listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EukaryoteRow<'a> {
    pub accession: &'a str,
    pub taxid: &'a str,
    pub fasta: &'a str,
    pub annotation: &'a str,
}

impl<'a> EukaryoteRow<'a> {
    /// Split a listing line; `None` unless it has exactly four columns
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.trim_end().split('\t');
        let row = Self {
            accession: fields.next()?,
            taxid: fields.next()?,
            fasta: fields.next()?,
            annotation: fields.next()?,
        };
        match fields.next() {
            Some(_) => None,
            None => Some(row),
        }
    }
}

/// Resolve the lineage of every listed assembly and write
/// `accession<TAB>lineage` rows in listing order.
pub fn process_eukaryotes(
    graph: &LineageGraph,
    euk: &EukaryoteConfig,
    show_progress: bool,
) -> PhylotagResult<RunSummary> {
    let reader = open_text_source(&euk.listing)?;
    let mut table = TaxonomyTableWriter::create(&euk.taxonomy_table)?;
    let mut lineages = LineageCache::new(graph, Dataset::Eukaryote.fallback_lineage());
    let pb = spinner(show_progress, &format!("Reading {}", euk.listing.display()));

    let rows = associate_listing(reader, &euk.listing, &mut lineages, &mut table, |n| {
        if n % SPINNER_TICK_LINES == 0 {
            pb.inc(SPINNER_TICK_LINES);
        }
    })?;
    pb.finish_and_clear();

    let mut summary = RunSummary::new(&Dataset::Eukaryote);
    summary.accessions = rows;
    summary.unresolved_lineages = lineages.unresolved();
    summary.rows_written = table.finish()?;

    tracing::info!(
        rows = summary.rows_written,
        unresolved = summary.unresolved_lineages,
        "Eukaryote dataset complete"
    );
    Ok(summary)
}

fn associate_listing<R: BufRead>(
    reader: R,
    source: &Path,
    lineages: &mut LineageCache<'_>,
    table: &mut TaxonomyTableWriter,
    mut tick: impl FnMut(u64),
) -> PhylotagResult<usize> {
    let mut rows = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let row = EukaryoteRow::parse(&line).ok_or_else(|| {
            PhylotagError::malformed_row(
                source,
                idx + 1,
                format!("expected {} tab-separated columns", LISTING_COLUMNS),
            )
        })?;

        table.write_row(&[row.accession, lineages.lineage(row.taxid)])?;
        rows += 1;
        tick(rows as u64);
    }

    Ok(rows)
}
