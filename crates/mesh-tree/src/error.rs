//! Error types for loading MeSH tree records.

use thiserror::Error;

/// Errors that can occur while parsing or loading MeSH tree records.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A line did not split into exactly a heading and a tree number.
    #[error("malformed tree reference: {line}")]
    Format {
        /// The offending raw line.
        line: String,
    },

    /// The underlying line source failed while being read.
    #[error("failed to read tree source: {0}")]
    SourceRead(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a format error for the given raw line.
    pub fn format(line: impl Into<String>) -> Self {
        Self::Format { line: line.into() }
    }

    /// Returns the offending line if this is a format error.
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Format { line } => Some(line),
            Self::SourceRead(_) => None,
        }
    }
}

/// Result type for MeSH tree operations.
pub type MeshResult<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_format() {
        let err = MeshError::format("Neoplasms");
        assert_eq!(err.to_string(), "malformed tree reference: Neoplasms");
        assert_eq!(err.line(), Some("Neoplasms"));
    }

    #[test]
    fn test_error_display_source_read() {
        let err = MeshError::SourceRead(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert_eq!(err.to_string(), "failed to read tree source: eof");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: MeshError = io_err.into();
        assert!(matches!(err, MeshError::SourceRead(_)));
    }
}
