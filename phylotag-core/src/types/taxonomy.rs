/// Taxonomy-related types used throughout phylotag
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Sentinel for an accession without a taxid, and for a lineage that
/// crossed no ranked, named node.
pub const MISSING: &str = "missing";

/// Lineage written for a virus record whose taxid did not resolve
pub const VIRUS_FALLBACK: &str = "d__Viruses;missing";

/// Lineage written for a eukaryote assembly whose taxid did not resolve
pub const EUKARYOTE_FALLBACK: &str = "d__Eukaryota;missing";

/// Taxonomy ID as it appears in the dump files.
///
/// Kept as an opaque token rather than a number: accession tables may carry
/// the `missing` sentinel in this position and it must flow through the
/// resolver like any other identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(String);

impl TaxonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `missing` sentinel
    pub fn missing() -> Self {
        Self(MISSING.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_missing(&self) -> bool {
        self.0 == MISSING
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaxonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TaxonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the lineage maps be queried with a plain `&str`.
impl Borrow<str> for TaxonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
