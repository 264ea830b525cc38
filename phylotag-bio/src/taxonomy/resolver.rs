//! Walk from a taxid up to its domain and render a ranked lineage string

use super::graph::LineageGraph;
use super::rank::DOMAIN_PREFIX;
use phylotag_core::MISSING;
use std::collections::HashMap;

/// Separator between lineage segments
pub const LINEAGE_SEPARATOR: char = ';';

/// Read-only lineage queries over a [`LineageGraph`]
#[derive(Debug, Clone, Copy)]
pub struct LineageResolver<'g> {
    graph: &'g LineageGraph,
}

impl<'g> LineageResolver<'g> {
    pub fn new(graph: &'g LineageGraph) -> Self {
        Self { graph }
    }

    /// Nodes visited from `taxid` up to the domain or the last linked node,
    /// in leaf-to-root order.
    pub fn chain<'a>(&self, taxid: &'a str) -> Vec<&'a str>
    where
        'g: 'a,
    {
        let graph: &'g LineageGraph = self.graph;
        let mut chain = vec![taxid];
        let mut current = taxid;

        // A well-formed dump has no cycles; the bound keeps a corrupt one
        // from spinning forever.
        let max_steps = graph.edge_count();

        while graph.rank_prefix(current) != Some(DOMAIN_PREFIX) {
            let Some(parent) = graph.parent(current) else {
                break;
            };
            if chain.len() > max_steps {
                tracing::warn!(taxid, "Parent chain exceeds graph size; stopping walk");
                break;
            }
            current = parent.as_str();
            chain.push(current);
        }

        chain
    }

    /// Rank-prefixed lineage for `taxid`, root first, e.g.
    /// `d__Viruses;k__Orthornavirae;...;s__Influenza A virus`.
    ///
    /// Returns [`MISSING`] when no node in the chain is both ranked and
    /// named, which includes taxids that are not in the graph at all.
    pub fn resolve(&self, taxid: &str) -> String {
        let mut lineage = String::new();

        for node in self.chain(taxid).into_iter().rev() {
            if let (Some(prefix), Some(name)) =
                (self.graph.rank_prefix(node), self.graph.scientific_name(node))
            {
                lineage.push(LINEAGE_SEPARATOR);
                lineage.push_str(prefix);
                lineage.push_str(name);
            }
        }

        match lineage.strip_prefix(LINEAGE_SEPARATOR) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => MISSING.to_string(),
        }
    }

    /// [`LineageResolver::resolve`], substituting `fallback` for [`MISSING`]
    pub fn resolve_or(&self, taxid: &str, fallback: &str) -> String {
        let lineage = self.resolve(taxid);
        if lineage == MISSING {
            fallback.to_string()
        } else {
            lineage
        }
    }
}

/// Memoised lineages for one pass over a dataset.
///
/// Sequence collections hit the same few thousand taxids over and over, so
/// each distinct taxid is walked once. The graph itself is never touched.
#[derive(Debug)]
pub struct LineageCache<'g> {
    resolver: LineageResolver<'g>,
    fallback: Option<&'static str>,
    cache: HashMap<String, String>,
    misses: usize,
}

impl<'g> LineageCache<'g> {
    /// `fallback` replaces a [`MISSING`] lineage when set
    pub fn new(graph: &'g LineageGraph, fallback: Option<&'static str>) -> Self {
        Self {
            resolver: LineageResolver::new(graph),
            fallback,
            cache: HashMap::new(),
            misses: 0,
        }
    }

    pub fn lineage(&mut self, taxid: &str) -> &str {
        if !self.cache.contains_key(taxid) {
            let mut lineage = self.resolver.resolve(taxid);
            if lineage == MISSING {
                self.misses += 1;
                if let Some(fallback) = self.fallback {
                    lineage = fallback.to_string();
                }
            }
            self.cache.insert(taxid.to_string(), lineage);
        }
        &self.cache[taxid]
    }

    /// Distinct taxids that resolved to [`MISSING`]
    pub fn unresolved(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
