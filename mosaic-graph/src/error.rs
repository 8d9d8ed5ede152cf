/// Error types for graph loading
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dataset loading operations
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input file does not exist
    #[error("graph resource not found: {path}")]
    ResourceNotFound {
        path: PathBuf,
    },

    /// Content could not be parsed as a graph dataset
    #[error("malformed graph data in {path}: {source}")]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Read failed for a reason other than absence (permissions etc.)
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
