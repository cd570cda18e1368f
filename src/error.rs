use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vocload operations.
#[derive(Debug, Error)]
pub enum VocLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse VOC XML {path}: {message}")]
    XmlParse { path: PathBuf, message: String },

    #[error("Failed to read annotation cache {path}: {source}")]
    CacheParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write annotation cache {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
