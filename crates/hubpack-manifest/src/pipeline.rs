//! Pipeline artifacts ship the `config` section of an exported pipeline
//! instead of an aggregated property map.

use crate::errors::ManifestError;
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_KEY: &str = "config";

/// Read an exported pipeline and return its `config` section
pub fn extract_pipeline_config(pipeline_file: &Path) -> Result<serde_json::Value, ManifestError> {
    debug!("Reading exported pipeline {}", pipeline_file.display());
    let text = fs::read_to_string(pipeline_file).map_err(|e| ManifestError::io(pipeline_file, e))?;
    let mut exported: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ManifestError::malformed(pipeline_file, e.to_string()))?;

    exported
        .get_mut(CONFIG_KEY)
        .map(serde_json::Value::take)
        .ok_or_else(|| ManifestError::InvalidPipeline {
            path: pipeline_file.to_path_buf(),
            message: format!("expecting '{}' property", CONFIG_KEY),
        })
}
