//! Error types for strata-core

/// Result type for strata-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key descriptor or other declaration is missing a required field
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A registration's default document could not be parsed
    #[error("Default document of registration '{registration}' is invalid: {source}")]
    DefaultDocument {
        registration: String,
        #[source]
        source: strata_fs::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Read or parse error from strata-fs
    #[error(transparent)]
    Fs(#[from] strata_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True for malformed structured text, wherever it came from.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Fs(e) | Self::DefaultDocument { source: e, .. } => matches!(
                e,
                strata_fs::Error::Parse { .. } | strata_fs::Error::NotADocument { .. }
            ),
            Self::Json(_) | Self::Validation { .. } => false,
        }
    }

    /// True when a file or stream could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_io())
    }
}
