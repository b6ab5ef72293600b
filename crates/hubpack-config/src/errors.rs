use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a build configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required config value: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_missing_error_display() {
        let err = ConfigError::Missing("artifact_id");
        assert_eq!(err.to_string(), "Missing required config value: artifact_id");
    }
}
