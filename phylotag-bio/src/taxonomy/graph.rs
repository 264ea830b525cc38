//! Parent, name and rank maps built from an NCBI taxonomy dump

use super::rank::classify_rank;
use crate::io::open_text_source;
use indicatif::ProgressBar;
use phylotag_core::{PhylotagError, PhylotagResult, TaxonId};
use phylotag_utils::progress::{create_hidden_spinner, create_spinner, SPINNER_TICK_LINES};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

const NAMES_MIN_FIELDS: usize = 7;
const NODES_MIN_FIELDS: usize = 5;
const SCIENTIFIC_NAME: &str = "scientific name";

/// Immutable lookup tables for lineage resolution.
///
/// Built once per run and only read afterwards. Root nodes (their own
/// parent) have no entry in the parent map.
#[derive(Debug, Default)]
pub struct LineageGraph {
    parents: HashMap<TaxonId, TaxonId>,
    names: HashMap<TaxonId, String>,
    prefixes: HashMap<TaxonId, &'static str>,
}

impl LineageGraph {
    /// Load nodes.dmp and names.dmp from disk (either may be compressed)
    pub fn from_files(nodes: &Path, names: &Path) -> PhylotagResult<Self> {
        Self::load(nodes, names, false)
    }

    /// Same as [`LineageGraph::from_files`], with spinners while reading
    pub fn load(nodes: &Path, names: &Path, show_progress: bool) -> PhylotagResult<Self> {
        let spinner = |msg: &str| {
            if show_progress {
                create_spinner(msg)
            } else {
                create_hidden_spinner()
            }
        };

        let pb = spinner("Reading scientific names");
        let name_map = read_names(open_text_source(names)?, names, &pb)?;
        pb.finish_and_clear();

        let pb = spinner("Reading taxonomy nodes");
        let (parents, prefixes) = read_nodes(open_text_source(nodes)?, nodes, &pb)?;
        pb.finish_and_clear();

        let graph = Self {
            parents,
            names: name_map,
            prefixes,
        };
        tracing::info!(
            edges = graph.parents.len(),
            names = graph.names.len(),
            ranked = graph.prefixes.len(),
            "Built lineage graph"
        );
        Ok(graph)
    }

    /// Build from in-memory sources; `nodes`/`names` label parse errors
    pub fn from_readers<N: BufRead, M: BufRead>(nodes: N, names: M) -> PhylotagResult<Self> {
        let pb = create_hidden_spinner();
        let name_map = read_names(names, Path::new("names"), &pb)?;
        let (parents, prefixes) = read_nodes(nodes, Path::new("nodes"), &pb)?;
        Ok(Self {
            parents,
            names: name_map,
            prefixes,
        })
    }

    pub fn parent(&self, taxid: &str) -> Option<&TaxonId> {
        self.parents.get(taxid)
    }

    pub fn scientific_name(&self, taxid: &str) -> Option<&str> {
        self.names.get(taxid).map(String::as_str)
    }

    pub fn rank_prefix(&self, taxid: &str) -> Option<&'static str> {
        self.prefixes.get(taxid).copied()
    }

    /// Number of parent edges (every non-root node)
    pub fn edge_count(&self) -> usize {
        self.parents.len()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }
}

/// Parse names.dmp, keeping scientific names only.
///
/// Later rows for the same node overwrite earlier ones.
pub fn parse_names<R: BufRead>(reader: R, source: &Path) -> PhylotagResult<HashMap<TaxonId, String>> {
    read_names(reader, source, &create_hidden_spinner())
}

/// Parse nodes.dmp into the parent map and the rank-prefix map
pub fn parse_nodes<R: BufRead>(
    reader: R,
    source: &Path,
) -> PhylotagResult<(HashMap<TaxonId, TaxonId>, HashMap<TaxonId, &'static str>)> {
    read_nodes(reader, source, &create_hidden_spinner())
}

fn read_names<R: BufRead>(
    reader: R,
    source: &Path,
    pb: &ProgressBar,
) -> PhylotagResult<HashMap<TaxonId, String>> {
    let mut names = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < NAMES_MIN_FIELDS {
            return Err(too_few_fields(source, idx + 1, NAMES_MIN_FIELDS, fields.len()));
        }

        if fields[6] == SCIENTIFIC_NAME {
            names.insert(TaxonId::from(fields[0]), fields[2].to_string());
        }

        tick(pb, idx);
    }

    Ok(names)
}

fn read_nodes<R: BufRead>(
    reader: R,
    source: &Path,
    pb: &ProgressBar,
) -> PhylotagResult<(HashMap<TaxonId, TaxonId>, HashMap<TaxonId, &'static str>)> {
    let mut parents = HashMap::new();
    let mut prefixes = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < NODES_MIN_FIELDS {
            return Err(too_few_fields(source, idx + 1, NODES_MIN_FIELDS, fields.len()));
        }

        let (node, parent, rank) = (fields[0], fields[2], fields[4]);
        if node != parent {
            parents.insert(TaxonId::from(node), TaxonId::from(parent));
        }
        if let Some(prefix) = classify_rank(rank) {
            prefixes.insert(TaxonId::from(node), prefix);
        }

        tick(pb, idx);
    }

    Ok((parents, prefixes))
}

fn too_few_fields(source: &Path, line_no: usize, expected: usize, found: usize) -> PhylotagError {
    PhylotagError::malformed_row(
        source,
        line_no,
        format!("expected at least {} tab-separated fields, found {}", expected, found),
    )
}

fn tick(pb: &ProgressBar, idx: usize) {
    if (idx as u64 + 1) % SPINNER_TICK_LINES == 0 {
        pb.inc(SPINNER_TICK_LINES);
    }
}
