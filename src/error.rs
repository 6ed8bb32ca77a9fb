//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and JSON errors, and provides semantic variants for
//! path resolution, extractor configuration and extractor process failures.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to resolve path {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid extractor config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Invalid extractor configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode extraction request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to start extractor `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Extractor `{program}` failed: {status}")]
    ExtractorFailed { program: String, status: ExitStatus },
}

impl Error {
    pub fn resolve(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Resolve {
            path: path.into(),
            source,
        }
    }
}
