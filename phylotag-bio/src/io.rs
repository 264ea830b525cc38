//! Text input that may be gzip or xz compressed

use flate2::read::MultiGzDecoder;
use phylotag_core::{PhylotagError, PhylotagResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use xz2::read::XzDecoder;

/// Open an input file as a line source, decompressing by extension.
///
/// `.gz` and `.xz` are decoded on the fly; anything else is read as plain
/// text.
pub fn open_text_source(path: &Path) -> PhylotagResult<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PhylotagError::NotFound(path.display().to_string())
        } else {
            PhylotagError::Io(e)
        }
    })?;

    let reader: Box<dyn BufRead> = match path.extension().and_then(|s| s.to_str()) {
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Some("xz") => Box::new(BufReader::new(XzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    tracing::debug!(path = %path.display(), "Opened input");
    Ok(reader)
}
