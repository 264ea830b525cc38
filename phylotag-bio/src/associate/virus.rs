//! Virus dataset: nucleotide and protein FASTA regrouped by accession

use super::{spinner, RunSummary};
use crate::accession::AccessionTaxidIndex;
use crate::formats::{IngestStats, RecordGroups, TaxonomyTableWriter};
use crate::io::open_text_source;
use crate::taxonomy::{LineageCache, LineageGraph};
use phylotag_core::config::{OutputConfig, VirusConfig};
use phylotag_core::{Dataset, PhylotagResult, SequenceKind};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Groups records by accession across sources and writes them out with
/// their lineage.
///
/// Groups persist across [`RecordAssociator::ingest`] calls, so a second
/// source adds headers to accessions the first one already created.
pub struct RecordAssociator<'g> {
    groups: RecordGroups,
    lineages: LineageCache<'g>,
    show_progress: bool,
}

impl<'g> RecordAssociator<'g> {
    pub fn new(graph: &'g LineageGraph, dataset: &Dataset, show_progress: bool) -> Self {
        Self {
            groups: RecordGroups::new(),
            lineages: LineageCache::new(graph, dataset.fallback_lineage()),
            show_progress,
        }
    }

    pub fn groups(&self) -> &RecordGroups {
        &self.groups
    }

    /// Distinct taxids that needed the fallback lineage so far
    pub fn unresolved_lineages(&self) -> usize {
        self.lineages.unresolved()
    }

    /// Stream one FASTA source, resolving new accessions against `index`
    pub fn ingest(&mut self, fasta: &Path, index: &AccessionTaxidIndex) -> PhylotagResult<IngestStats> {
        let pb = spinner(self.show_progress, &format!("Reading {}", fasta.display()));
        let stats = self.groups.ingest(open_text_source(fasta)?, fasta, index, &pb)?;
        pb.finish_and_clear();

        tracing::info!(
            source = %fasta.display(),
            headers = stats.headers,
            new_accessions = stats.new_accessions,
            missing_taxids = stats.missing_taxids,
            "Grouped FASTA source"
        );
        Ok(stats)
    }

    /// Write `<accession>.<extension>` for every group into `dir` and add a
    /// table row per file. Returns the number of files written.
    pub fn write_groups(
        &mut self,
        dir: &Path,
        extension: &str,
        table: &mut TaxonomyTableWriter,
    ) -> PhylotagResult<usize> {
        let mut files = 0;

        for (accession, group) in self.groups.iter() {
            let path = dir.join(format!("{}.{}", accession, extension));
            let mut writer = BufWriter::new(File::create(&path)?);
            group.write_fasta(&mut writer)?;
            writer.flush()?;

            let lineage = self.lineages.lineage(group.taxid().as_str());
            table.write_row(&[accession, &path.display().to_string(), lineage])?;
            files += 1;
        }

        tracing::debug!(dir = %dir.display(), extension, files, "Wrote sequence files");
        Ok(files)
    }
}

/// Run the virus dataset end to end.
///
/// The nucleotide source is grouped and written first (`.fna` by default),
/// then the protein source is grouped into the same accession groups and
/// every group is written again with the protein extension. Both passes
/// append to one taxonomy table, so an accession gets one row per file.
pub fn process_virus(
    graph: &LineageGraph,
    virus: &VirusConfig,
    output: &OutputConfig,
) -> PhylotagResult<RunSummary> {
    fs::create_dir_all(&virus.output_dir)?;
    let mut table = TaxonomyTableWriter::create(&virus.taxonomy_table)?;

    let mut associator = RecordAssociator::new(graph, &Dataset::Virus, output.progress);
    let mut summary = RunSummary::new(&Dataset::Virus);

    let passes = [
        (
            SequenceKind::Nucleotide,
            &virus.nucleotide_fasta,
            &virus.nucleotide_taxids,
            &output.nucleotide_extension,
        ),
        (
            SequenceKind::Protein,
            &virus.protein_fasta,
            &virus.protein_taxids,
            &output.protein_extension,
        ),
    ];

    for (kind, fasta, taxids, extension) in passes {
        let stats = {
            let index = AccessionTaxidIndex::load(taxids, output.progress)?;
            associator.ingest(fasta, &index)?
        };
        summary.absorb(&stats);

        let files = associator.write_groups(&virus.output_dir, extension, &mut table)?;
        summary.files_written += files;
        tracing::info!(%kind, files, "Finished pass");
    }

    summary.accessions = associator.groups().len();
    summary.unresolved_lineages = associator.unresolved_lineages();
    summary.rows_written = table.finish()?;

    tracing::info!(
        accessions = summary.accessions,
        rows = summary.rows_written,
        unresolved = summary.unresolved_lineages,
        "Virus dataset complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn graph() -> LineageGraph {
        LineageGraph::from_readers(
            Cursor::new("10239\t|\t1\t|\tsuperkingdom\t|\n"),
            Cursor::new("10239\t|\tViruses\t|\t\t|\tscientific name\t|\n"),
        )
        .unwrap()
    }

    #[test]
    fn test_write_groups_rows_follow_first_seen_order() {
        let dir = TempDir::new().unwrap();
        let fasta = dir.path().join("in.fasta");
        fs::write(&fasta, ">a|b|ZZ1.1|x\nAC\n>a|b|AB123.1|y\nGT\n").unwrap();

        let graph = graph();
        let index = AccessionTaxidIndex::from_reader(
            Cursor::new("AB123\t10239\n"),
            Path::new("taxids.tsv"),
        )
        .unwrap();

        let mut associator = RecordAssociator::new(&graph, &Dataset::Virus, false);
        associator.ingest(&fasta, &index).unwrap();

        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        let table_path = dir.path().join("tax.tsv");
        let mut table = TaxonomyTableWriter::create(&table_path).unwrap();
        assert_eq!(associator.write_groups(&out, "fna", &mut table).unwrap(), 2);
        table.finish().unwrap();

        let expected = format!(
            "ZZ1.1\t{}\td__Viruses;missing\nAB123.1\t{}\td__Viruses\n",
            out.join("ZZ1.1.fna").display(),
            out.join("AB123.1.fna").display()
        );
        assert_eq!(fs::read_to_string(&table_path).unwrap(), expected);
        assert_eq!(associator.unresolved_lineages(), 1);
    }
}
