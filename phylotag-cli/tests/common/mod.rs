#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NODES: &str = "\
1\t|\t1\t|\tno rank\t|
10239\t|\t1\t|\tsuperkingdom\t|
2759\t|\t131567\t|\tsuperkingdom\t|
131567\t|\t1\t|\tno rank\t|
11308\t|\t10239\t|\tfamily\t|
11320\t|\t11308\t|\tspecies\t|
9606\t|\t2759\t|\tspecies\t|
";

pub const NAMES: &str = "\
1\t|\troot\t|\t\t|\tscientific name\t|
10239\t|\tViruses\t|\t\t|\tscientific name\t|
2759\t|\tEukaryota\t|\t\t|\tscientific name\t|
11308\t|\tOrthomyxoviridae\t|\t\t|\tscientific name\t|
11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|
9606\t|\tHomo sapiens\t|\t\t|\tscientific name\t|
";

pub fn phylotag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("phylotag").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PHYLOTAG_LOG")
        .env_remove("PHYLOTAG_NODES")
        .env_remove("PHYLOTAG_NAMES");
    cmd
}

/// Temp directory pre-populated with a small taxonomy dump
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub nodes: PathBuf,
    pub names: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let nodes = temp_dir.path().join("nodes.dmp");
        let names = temp_dir.path().join("names.dmp");
        fs::write(&nodes, NODES)?;
        fs::write(&names, NAMES)?;

        Ok(Self {
            temp_dir,
            nodes,
            names,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}
