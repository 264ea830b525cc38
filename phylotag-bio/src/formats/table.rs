//! Tab-separated taxonomy table output

use phylotag_core::PhylotagResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer for `accession<TAB>...<TAB>lineage` rows.
///
/// The file is truncated on creation; callers that run several passes into
/// one table share a single writer.
pub struct TaxonomyTableWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    rows: usize,
}

impl TaxonomyTableWriter {
    pub fn create(path: &Path) -> PhylotagResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(File::create(path)?),
            rows: 0,
        })
    }

    pub fn write_row(&mut self, fields: &[&str]) -> PhylotagResult<()> {
        writeln!(self.writer, "{}", fields.join("\t"))?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows; returns how many were written
    pub fn finish(mut self) -> PhylotagResult<usize> {
        self.writer.flush()?;
        tracing::debug!(path = %self.path.display(), rows = self.rows, "Wrote taxonomy table");
        Ok(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rows_and_parent_creation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tax.tsv");

        let mut table = TaxonomyTableWriter::create(&path).unwrap();
        table.write_row(&["AB123.1", "out/AB123.1.fna", "d__Viruses"]).unwrap();
        table.write_row(&["GCA_1.1", "d__Eukaryota;missing"]).unwrap();
        assert_eq!(table.finish().unwrap(), 2);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "AB123.1\tout/AB123.1.fna\td__Viruses\nGCA_1.1\td__Eukaryota;missing\n"
        );
    }

    #[test]
    fn test_create_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tax.tsv");
        fs::write(&path, "stale\n").unwrap();

        let table = TaxonomyTableWriter::create(&path).unwrap();
        table.finish().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
