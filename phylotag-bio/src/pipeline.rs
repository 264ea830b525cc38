//! Dataset dispatch for a configured run

use crate::associate::{process_eukaryotes, process_virus, RunSummary};
use crate::taxonomy::LineageGraph;
use phylotag_core::{Config, Dataset, PhylotagResult};

fn load_graph(config: &Config) -> PhylotagResult<LineageGraph> {
    LineageGraph::load(
        &config.taxonomy.nodes,
        &config.taxonomy.names,
        config.output.progress,
    )
}

/// Run the dataset named in `config`.
///
/// Returns `Ok(None)` without touching the filesystem when the dataset
/// selector is not one we know. The dataset's config section is checked
/// before the taxonomy dump is loaded.
pub fn run_pipeline(config: &Config) -> PhylotagResult<Option<RunSummary>> {
    match config.dataset() {
        Dataset::Virus => {
            let virus = config.virus_config()?;
            let graph = load_graph(config)?;
            process_virus(&graph, virus, &config.output).map(Some)
        }
        Dataset::Eukaryote => {
            let euk = config.eukaryote_config()?;
            let graph = load_graph(config)?;
            process_eukaryotes(&graph, euk, config.output.progress).map(Some)
        }
        Dataset::Unknown(selector) => {
            tracing::warn!(dataset = %selector, "Unrecognised dataset; nothing to do");
            Ok(None)
        }
    }
}
