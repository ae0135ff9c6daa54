use std::io;
use std::path::PathBuf;

/// Errors that can occur during classpath resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed module metadata: {0}")]
    MalformedMetadata(String),

    #[error("Manifest jar is advertised for this project but not found at {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for classpath resolution operations
pub type Result<T> = std::result::Result<T, Error>;
