//! Writers for the build output documents
//!
//! Documents are pretty-printed with two-space indentation. An existing file is
//! removed and recreated, which is not atomic: a crash mid-write can leave a
//! missing or truncated document, and rerunning the build fixes it.

use crate::errors::ManifestError;
use crate::types::{PluginManifest, SpecDocument};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the spec document
pub const SPEC_JSON: &str = "spec.json";

/// Serialize `document` to `output_path`, replacing any previous file
pub fn write_document<T: Serialize + ?Sized>(document: &T, output_path: &Path) -> Result<(), ManifestError> {
    debug!("Writing document to {:?}", output_path);

    let json = serde_json::to_string_pretty(document)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ManifestError::io(parent, e))?;
        }
    }
    if output_path.exists() {
        fs::remove_file(output_path).map_err(|e| ManifestError::io(output_path, e))?;
    }
    fs::write(output_path, json).map_err(|e| ManifestError::io(output_path, e))?;

    info!("Document written to {:?}", output_path);
    Ok(())
}

/// Read a document back (round-trip checks and tooling)
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    debug!("Reading document from {:?}", path);
    let content = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ManifestError::malformed(path, e.to_string()))
}

/// Write the plugin manifest as `<build_dir>/<file_name>`
pub fn write_plugin_manifest(
    manifest: &PluginManifest,
    build_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, ManifestError> {
    let output = build_dir.join(file_name);
    write_document(manifest, &output)?;
    info!("Total properties: {}", manifest.properties.len());
    Ok(output)
}

/// Write `<build_dir>/spec.json`
pub fn write_spec(spec: &SpecDocument, build_dir: &Path) -> Result<PathBuf, ManifestError> {
    let output = build_dir.join(SPEC_JSON);
    write_document(spec, &output)?;
    Ok(output)
}

pub fn read_plugin_manifest(path: &Path) -> Result<PluginManifest, ManifestError> {
    read_document(path)
}

pub fn read_spec(path: &Path) -> Result<SpecDocument, ManifestError> {
    read_document(path)
}

#[cfg(test)]
mod tests {
    use crate::manifest_writer::*;
    use crate::spec::{build_at, SpecConfig};
    use crate::types::PropertyMap;
    use std::fs;
    use tempfile::TempDir;

    fn sample_spec(is_pipeline: bool) -> SpecDocument {
        let config = SpecConfig {
            label: "Example".to_string(),
            artifact_id: "example".to_string(),
            version: "1.0.0".to_string(),
            scope: "user".to_string(),
            config_file_name: "example-1.0.0.json".to_string(),
            artifacts: vec!["system:cdap-data-pipeline[6.1.1,7.0.0)".to_string()],
            additional_arguments: vec![("zeta".to_string(), "1".to_string())],
            is_pipeline,
            ..Default::default()
        };
        build_at(&config, 1_700_000_000_000)
    }

    #[test]
    fn test_plugin_manifest_round_trip() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let mut properties = PropertyMap::new();
        properties.insert("doc.Example".to_string(), "# Example".to_string());
        properties.insert("widgets.Example".to_string(), "{\n  \"a\": 1\n}".to_string());
        let manifest = PluginManifest::new(
            properties,
            &[
                "system:cdap-data-pipeline[6.1.1,7.0.0)".to_string(),
                "system:cdap-data-streams[6.1.1,7.0.0)".to_string(),
            ],
            None,
        );

        let written = write_plugin_manifest(&manifest, temp_dir.path(), "example-1.0.0.json");
        assert!(written.is_ok(), "Failed to write manifest");
        let path = written.unwrap_or_default();
        assert_eq!(path, temp_dir.path().join("example-1.0.0.json"));

        let loaded = read_plugin_manifest(&path);
        assert!(loaded.is_ok_and(|m| m == manifest));
    }

    #[test]
    fn test_spec_round_trip() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        for is_pipeline in [false, true] {
            let spec = sample_spec(is_pipeline);
            let written = write_spec(&spec, temp_dir.path());
            assert!(written.is_ok(), "Failed to write spec");

            let loaded = read_spec(&temp_dir.path().join(SPEC_JSON));
            assert!(loaded.is_ok_and(|s| s == spec));
        }
    }

    #[test]
    fn test_two_space_indentation_and_field_order() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        assert!(write_spec(&sample_spec(false), temp_dir.path()).is_ok());
        let text = fs::read_to_string(temp_dir.path().join(SPEC_JSON)).unwrap_or_default();

        assert!(text.starts_with("{\n  \"specVersion\": \"1.0.0\""));
        let label = text.find("\"label\"").unwrap_or(usize::MAX);
        let created = text.find("\"created\"").unwrap_or(usize::MAX);
        let actions = text.find("\"actions\"").unwrap_or(usize::MAX);
        assert!(label < created && created < actions);
        assert!(!text.contains("\"author\""));
    }

    #[test]
    fn test_existing_file_replaced() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join(SPEC_JSON);
        assert!(fs::write(&path, "stale content that is longer than nothing").is_ok());

        assert!(write_spec(&sample_spec(false), temp_dir.path()).is_ok());
        let text = fs::read_to_string(&path).unwrap_or_default();
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_build_directory_created() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let build_dir = temp_dir.path().join("target").join("nested");
        assert!(write_spec(&sample_spec(false), &build_dir).is_ok());
        assert!(build_dir.join(SPEC_JSON).is_file());
    }
}
