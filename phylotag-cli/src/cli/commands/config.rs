use anyhow::Result;
use clap::Args;
use phylotag_core::config::to_toml_string;
use phylotag_core::{save_config, Config};
use phylotag_utils::success;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the template here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dataset to select in the template
    #[arg(short, long, default_value = "virus")]
    pub dataset: String,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let mut config = Config::template();
    config.dataset = args.dataset;

    match args.output {
        Some(path) => {
            save_config(&path, &config)?;
            success(&format!("Wrote configuration template to {}", path.display()));
        }
        None => print!("{}", to_toml_string(&config)?),
    }
    Ok(())
}
