//! Catalog loading errors.

use std::path::PathBuf;

/// Error returned when a catalog cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog text is not valid YAML or JSON, or has the wrong shape.
    #[error("failed to parse catalog: {message}")]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported catalog format for '{}' (expected .yaml, .yml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The catalog parsed but breaks a catalog rule.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            CatalogError::Parse { message, .. } => CatalogError::Parse {
                path: Some(path),
                message,
            },
            other => other,
        }
    }
}
