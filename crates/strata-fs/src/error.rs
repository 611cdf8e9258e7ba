//! Error types for strata-fs

use std::path::PathBuf;

/// Result type for strata-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or parsing documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {origin}: {source}")]
    Stream {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document from {origin}: {message}")]
    Parse {
        origin: String,
        format: String,
        message: String,
    },

    #[error("Unsupported document format: {name}")]
    UnsupportedFormat { name: String },

    #[error("Document from {origin} must be a mapping at the top level, found {found}")]
    NotADocument { origin: String, found: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error came from the underlying file system rather
    /// than from the document contents.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Stream { .. })
    }
}
