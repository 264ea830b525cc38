//! Core error types for phylotag

use std::path::Path;
use thiserror::Error;

/// Main error type for phylotag operations
#[derive(Error, Debug)]
pub enum PhylotagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for phylotag operations
pub type PhylotagResult<T> = Result<T, PhylotagError>;

impl PhylotagError {
    /// Parse error pinned to a line of an input source.
    ///
    /// `line_no` is 1-based, matching what an editor shows.
    pub fn malformed_row(source: &Path, line_no: usize, reason: impl AsRef<str>) -> Self {
        PhylotagError::Parse(format!(
            "{}:{}: {}",
            source.display(),
            line_no,
            reason.as_ref()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = PhylotagError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let config_error = PhylotagError::Configuration("missing [virus] section".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: missing [virus] section"
        );

        let parse_error = PhylotagError::Parse("too few fields".to_string());
        assert_eq!(format!("{}", parse_error), "Parsing error: too few fields");

        let ser_error = PhylotagError::Serialization("Failed to serialize config".to_string());
        assert_eq!(format!("{}", ser_error), "Serialization error: Failed to serialize config");

        let not_found = PhylotagError::NotFound("nodes.dmp".to_string());
        assert_eq!(format!("{}", not_found), "Not found: nodes.dmp");
    }

    #[test]
    fn test_malformed_row_mentions_location() {
        let err = PhylotagError::malformed_row(Path::new("nodes.dmp"), 12, "expected 5 fields, found 3");
        match err {
            PhylotagError::Parse(msg) => {
                assert_eq!(msg, "nodes.dmp:12: expected 5 fields, found 3");
            }
            _ => panic!("Expected Parse error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: PhylotagError = io_err.into();

        match err {
            PhylotagError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }
}
