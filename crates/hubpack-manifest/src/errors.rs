use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while assembling or writing plugin documents
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot access directory '{}': {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File '{}' has incorrect structured data. {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Incorrect pipeline JSON file '{}': {message}", path.display())]
    InvalidPipeline { path: PathBuf, message: String },
}

impl ManifestError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ManifestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, message: impl Into<String>) -> Self {
        ManifestError::MalformedConfig {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
