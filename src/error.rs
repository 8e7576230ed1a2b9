//! Domain error types for chipsel
//!
//! Selection operations never fail; errors only arise at the edges:
//! loading candidates, reading config, and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for chipsel
#[derive(Debug, Error)]
pub enum ChipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse candidates in {path}: {source}")]
    CandidateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate candidate label '{0}'")]
    DuplicateLabel(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for ChipError
pub type Result<T> = std::result::Result<T, ChipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_label_message() {
        let err = ChipError::DuplicateLabel("Alice".to_string());
        assert_eq!(err.to_string(), "Duplicate candidate label 'Alice'");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ChipError = io.into();
        assert!(matches!(err, ChipError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
