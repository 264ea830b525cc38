use super::TaxonomyArgs;
use crate::cli::OutputMode;
use anyhow::Result;
use clap::Args;
use phylotag_bio::{LineageGraph, LineageResolver};
use phylotag_core::MISSING;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args)]
pub struct LineageArgs {
    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Taxids to resolve
    #[arg(value_name = "TAXID", required = true)]
    pub taxids: Vec<String>,

    /// Domain to qualify unresolved lineages with, e.g. d__Viruses
    #[arg(long, value_name = "DOMAIN")]
    pub fallback: Option<String>,
}

#[derive(Serialize)]
struct ResolvedLineage<'a> {
    taxid: &'a str,
    lineage: String,
}

pub fn run(args: LineageArgs, mode: &OutputMode) -> Result<()> {
    let graph = LineageGraph::load(
        &args.taxonomy.nodes,
        &args.taxonomy.names,
        mode.show_progress(),
    )?;
    let resolver = LineageResolver::new(&graph);
    let fallback = args
        .fallback
        .as_deref()
        .map(|domain| format!("{};{}", domain.trim_end_matches(';'), MISSING));

    let resolved: Vec<ResolvedLineage> = args
        .taxids
        .iter()
        .map(|taxid| ResolvedLineage {
            taxid: taxid.trim(),
            lineage: match &fallback {
                Some(fallback) => resolver.resolve_or(taxid.trim(), fallback),
                None => resolver.resolve(taxid.trim()),
            },
        })
        .collect();

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in &resolved {
        writeln!(out, "{}\t{}", item.taxid, item.lineage)?;
    }
    Ok(())
}
