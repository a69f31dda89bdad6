use std::io;
use std::path::PathBuf;

use crate::types::RuntimeFamily;

/// Errors that can occur while resolving a runtime for a script
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown file type: {}", .0.display())]
    UnknownFileType(PathBuf),

    #[error("Unsupported runtime family: {0}")]
    UnsupportedFamily(String),

    #[error("No runtime available for {family} files (tried: {})", .tried.join(", "))]
    NoRuntimeAvailable {
        family: RuntimeFamily,
        tried: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for script-runner operations
pub type Result<T> = std::result::Result<T, Error>;
