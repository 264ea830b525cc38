//! Run configuration for phylotag

use crate::types::Dataset;
use crate::PhylotagError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dataset selector: "virus" or "euk"
    #[serde(default)]
    pub dataset: String,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub virus: Option<VirusConfig>,
    #[serde(default)]
    pub euk: Option<EukaryoteConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Location of the NCBI taxonomy dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    #[serde(default = "default_nodes")]
    pub nodes: PathBuf,
    #[serde(default = "default_names")]
    pub names: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirusConfig {
    pub nucleotide_fasta: PathBuf,
    pub protein_fasta: PathBuf,
    /// Accession to taxid table for the nucleotide source
    pub nucleotide_taxids: PathBuf,
    /// Accession to taxid table for the protein source
    pub protein_taxids: PathBuf,
    /// Directory receiving one sequence file per accession
    #[serde(default = "default_virus_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_virus_table")]
    pub taxonomy_table: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EukaryoteConfig {
    /// Four-column listing: accession, taxid, fasta path, annotation path
    pub listing: PathBuf,
    #[serde(default = "default_euk_table")]
    pub taxonomy_table: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_nucleotide_extension")]
    pub nucleotide_extension: String,
    #[serde(default = "default_protein_extension")]
    pub protein_extension: String,
    /// Show spinners while streaming inputs
    #[serde(default = "default_progress")]
    pub progress: bool,
}

// Default value functions
fn default_nodes() -> PathBuf { PathBuf::from("nodes.dmp") }
fn default_names() -> PathBuf { PathBuf::from("names.dmp") }
fn default_virus_dir() -> PathBuf { PathBuf::from("virus") }
fn default_virus_table() -> PathBuf { PathBuf::from("virus_tax.tsv") }
fn default_euk_table() -> PathBuf { PathBuf::from("euk_tax.tsv") }
fn default_nucleotide_extension() -> String { "fna".to_string() }
fn default_protein_extension() -> String { "faa".to_string() }
fn default_progress() -> bool { true }

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            names: default_names(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            nucleotide_extension: default_nucleotide_extension(),
            protein_extension: default_protein_extension(),
            progress: default_progress(),
        }
    }
}

impl Config {
    pub fn dataset(&self) -> Dataset {
        Dataset::parse(&self.dataset)
    }

    /// The `[virus]` section, required when running the virus dataset
    pub fn virus_config(&self) -> Result<&VirusConfig, PhylotagError> {
        self.virus.as_ref().ok_or_else(|| {
            PhylotagError::Configuration("dataset 'virus' requires a [virus] section".to_string())
        })
    }

    /// The `[euk]` section, required when running the eukaryote dataset
    pub fn eukaryote_config(&self) -> Result<&EukaryoteConfig, PhylotagError> {
        self.euk.as_ref().ok_or_else(|| {
            PhylotagError::Configuration("dataset 'euk' requires an [euk] section".to_string())
        })
    }

    /// A filled-in example, used for `phylotag config`
    pub fn template() -> Self {
        Self {
            dataset: "virus".to_string(),
            taxonomy: TaxonomyConfig::default(),
            virus: Some(VirusConfig {
                nucleotide_fasta: PathBuf::from("rvdb.fasta.gz"),
                protein_fasta: PathBuf::from("rvdb.faa.xz"),
                nucleotide_taxids: PathBuf::from("virus_taxids.tsv"),
                protein_taxids: PathBuf::from("virus_prot_taxids.tsv"),
                output_dir: default_virus_dir(),
                taxonomy_table: default_virus_table(),
            }),
            euk: Some(EukaryoteConfig {
                listing: PathBuf::from("euk_list.tsv"),
                taxonomy_table: default_euk_table(),
            }),
            output: OutputConfig::default(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, PhylotagError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| PhylotagError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!(path = %path.display(), dataset = %config.dataset, "Loaded configuration");
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), PhylotagError> {
    let contents = to_toml_string(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn to_toml_string(config: &Config) -> Result<String, PhylotagError> {
    toml::to_string_pretty(config)
        .map_err(|e| PhylotagError::Serialization(format!("Failed to serialize config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.dataset, "");
        assert_eq!(config.taxonomy.nodes, PathBuf::from("nodes.dmp"));
        assert_eq!(config.taxonomy.names, PathBuf::from("names.dmp"));
        assert!(config.virus.is_none());
        assert!(config.euk.is_none());
        assert_eq!(config.output.nucleotide_extension, "fna");
        assert_eq!(config.output.protein_extension, "faa");
        assert!(config.output.progress);
    }

    #[test]
    fn test_load_virus_config() {
        let toml_content = r#"
dataset = "virus"

[taxonomy]
nodes = "/db/taxonomy/nodes.dmp"
names = "/db/taxonomy/names.dmp"

[virus]
nucleotide_fasta = "rvdb.fasta.gz"
protein_fasta = "rvdb.faa.xz"
nucleotide_taxids = "nuc.tsv"
protein_taxids = "prot.tsv"
output_dir = "out/virus"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.dataset(), Dataset::Virus);
        assert_eq!(config.taxonomy.nodes, PathBuf::from("/db/taxonomy/nodes.dmp"));

        let virus = config.virus_config().unwrap();
        assert_eq!(virus.protein_fasta, PathBuf::from("rvdb.faa.xz"));
        assert_eq!(virus.output_dir, PathBuf::from("out/virus"));
        // Unspecified fields fall back to defaults
        assert_eq!(virus.taxonomy_table, PathBuf::from("virus_tax.tsv"));
        assert_eq!(config.output.protein_extension, "faa");
    }

    #[test]
    fn test_missing_section_for_dataset() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "dataset = \"euk\"\n").unwrap();

        let config = load_config(temp_file.path()).unwrap();
        match config.eukaryote_config().unwrap_err() {
            PhylotagError::Configuration(msg) => assert!(msg.contains("[euk]")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            PhylotagError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            PhylotagError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_template_survives_save_and_load() {
        let config = Config::template();
        let temp_file = NamedTempFile::new().unwrap();

        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.dataset(), Dataset::Virus);
        assert_eq!(
            loaded.virus_config().unwrap().nucleotide_fasta,
            PathBuf::from("rvdb.fasta.gz")
        );
        assert_eq!(
            loaded.eukaryote_config().unwrap().listing,
            PathBuf::from("euk_list.tsv")
        );
    }
}
