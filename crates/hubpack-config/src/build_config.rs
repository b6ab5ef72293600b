//! Build configuration for a hubpack run
//!
//! The configuration lives in a TOML file (`hubpack.toml` by default) next to
//! the plugin sources. Relative directories are resolved against
//! `base_directory`, which defaults to the directory holding the config file.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hubpack.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "HUBPACK_CONFIG";

/// Extra name/value argument appended to the spec action
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionArgument {
    pub name: String,
    pub value: String,
}

/// Everything a build needs to know about the plugin being packaged
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BuildConfig {
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Host artifact coordinates, e.g. `system:cdap-data-pipeline[6.1.1,7.0.0-SNAPSHOT)`
    #[serde(default)]
    pub cdap_artifacts: Vec<String>,
    /// Range appended to every parent coordinate in the plugin manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_version_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default)]
    pub is_pipeline: bool,
    #[serde(default)]
    pub additional_action_arguments: Vec<ActionArgument>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<PathBuf>,
    #[serde(default = "default_build_directory")]
    pub build_directory: PathBuf,
    #[serde(default = "default_docs_directory")]
    pub docs_directory: PathBuf,
    #[serde(default = "default_widgets_directory")]
    pub widgets_directory: PathBuf,
    #[serde(default = "default_icons_directory")]
    pub icons_directory: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_json_file: Option<PathBuf>,

    /// Also accept `.yaml`/`.yml` widget files
    #[serde(default)]
    pub yaml_widgets: bool,
}

fn default_scope() -> String {
    "user".to_string()
}

fn default_build_directory() -> PathBuf {
    PathBuf::from("target")
}

fn default_docs_directory() -> PathBuf {
    PathBuf::from("docs")
}

fn default_widgets_directory() -> PathBuf {
    PathBuf::from("widgets")
}

fn default_icons_directory() -> PathBuf {
    PathBuf::from("icons")
}

impl BuildConfig {
    /// Resolve which config file to read
    ///
    /// An explicit path wins, then `HUBPACK_CONFIG`, then `./hubpack.toml`.
    pub fn path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading build config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let origin = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::parse(&content, &origin)
    }

    /// Parse config text; `origin` is used as base directory when none is set
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let mut config: BuildConfig = toml::from_str(content)?;
        match &config.base_directory {
            Some(base) if base.is_relative() => {
                config.base_directory = Some(origin.join(base));
            }
            Some(_) => {}
            None => config.base_directory = Some(origin.to_path_buf()),
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no goal can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.artifact_id.trim().is_empty() {
            return Err(ConfigError::Missing("artifact_id"));
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::Missing("version"));
        }
        if self.cdap_artifacts.is_empty() {
            return Err(ConfigError::Missing("cdap_artifacts"));
        }
        if let Some(arg) = self
            .additional_action_arguments
            .iter()
            .find(|arg| arg.name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "additional action argument with value '{}' has an empty name",
                arg.value
            )));
        }
        Ok(())
    }

    pub fn base_dir(&self) -> PathBuf {
        self.base_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a configured directory against the base directory; absolute paths are kept
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    pub fn build_dir(&self) -> PathBuf {
        self.resolve(&self.build_directory)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.resolve(&self.docs_directory)
    }

    pub fn widgets_dir(&self) -> PathBuf {
        self.resolve(&self.widgets_directory)
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.resolve(&self.icons_directory)
    }

    /// Root of the hub package tree, `<build>/packages` unless configured
    pub fn packages_dir(&self) -> PathBuf {
        match &self.packages_directory {
            Some(dir) => self.resolve(dir),
            None => self.build_dir().join("packages"),
        }
    }

    pub fn pipeline_json_path(&self) -> Option<PathBuf> {
        self.pipeline_json_file.as_deref().map(|p| self.resolve(p))
    }

    /// Display label, falling back to the artifact id
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.artifact_id)
    }

    /// `<artifactId>-<version>.json`
    pub fn manifest_file_name(&self) -> String {
        format!("{}-{}.json", self.artifact_id, self.version)
    }

    /// Flattened view used by `show-config`
    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = vec![
            ("artifact-id", self.artifact_id.clone()),
            ("version", self.version.clone()),
            ("label", self.label().to_string()),
        ];
        if let Some(ref val) = self.description {
            values.push(("description", val.clone()));
        }
        if let Some(ref val) = self.author {
            values.push(("author", val.clone()));
        }
        if let Some(ref val) = self.org {
            values.push(("org", val.clone()));
        }
        if let Some(ref val) = self.categories {
            values.push(("categories", val.join(", ")));
        }
        values.push(("cdap-artifacts", self.cdap_artifacts.join(", ")));
        if let Some(ref val) = self.parent_version_range {
            values.push(("parent-version-range", val.clone()));
        }
        if let Some(ref val) = self.action_type {
            values.push(("action-type", val.clone()));
        }
        values.push(("scope", self.scope.clone()));
        values.push(("is-pipeline", self.is_pipeline.to_string()));
        for arg in &self.additional_action_arguments {
            values.push(("action-argument", format!("{}={}", arg.name, arg.value)));
        }
        values.push(("build-directory", self.build_dir().display().to_string()));
        values.push(("docs-directory", self.docs_dir().display().to_string()));
        values.push(("widgets-directory", self.widgets_dir().display().to_string()));
        values.push(("icons-directory", self.icons_dir().display().to_string()));
        values.push(("packages-directory", self.packages_dir().display().to_string()));
        if let Some(path) = self.pipeline_json_path() {
            values.push(("pipeline-json-file", path.display().to_string()));
        }
        values.push(("yaml-widgets", self.yaml_widgets.to_string()));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
artifact_id = "example-plugin"
version = "1.2.0"
cdap_artifacts = ["system:cdap-data-pipeline[6.1.1,7.0.0-SNAPSHOT)"]
"#;

    #[test]
    fn test_defaults_applied() {
        let Ok(config) = BuildConfig::parse(MINIMAL, Path::new("/work/plugin")) else {
            panic!("minimal config should parse");
        };
        assert_eq!(config.scope, "user");
        assert!(!config.is_pipeline);
        assert!(!config.yaml_widgets);
        assert_eq!(config.label(), "example-plugin");
        assert_eq!(config.build_dir(), PathBuf::from("/work/plugin/target"));
        assert_eq!(config.docs_dir(), PathBuf::from("/work/plugin/docs"));
        assert_eq!(config.widgets_dir(), PathBuf::from("/work/plugin/widgets"));
        assert_eq!(config.icons_dir(), PathBuf::from("/work/plugin/icons"));
        assert_eq!(
            config.packages_dir(),
            PathBuf::from("/work/plugin/target/packages")
        );
        assert_eq!(config.manifest_file_name(), "example-plugin-1.2.0.json");
    }

    #[test]
    fn test_absolute_directories_kept() {
        let content = format!("{}\nicons_directory = \"/shared/icons\"\n", MINIMAL);
        let Ok(config) = BuildConfig::parse(&content, Path::new("/work/plugin")) else {
            panic!("config should parse");
        };
        assert_eq!(config.icons_dir(), PathBuf::from("/shared/icons"));
    }

    #[test]
    fn test_additional_arguments_keep_order() {
        let content = format!(
            "{}\n[[additional_action_arguments]]\nname = \"b\"\nvalue = \"2\"\n\n[[additional_action_arguments]]\nname = \"a\"\nvalue = \"1\"\n",
            MINIMAL
        );
        let Ok(config) = BuildConfig::parse(&content, Path::new(".")) else {
            panic!("config should parse");
        };
        let names: Vec<&str> = config
            .additional_action_arguments
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_artifacts_rejected() {
        let content = "artifact_id = \"x\"\nversion = \"1\"\n";
        let result = BuildConfig::parse(content, Path::new("."));
        assert!(matches!(result, Err(ConfigError::Missing("cdap_artifacts"))));
    }

    #[test]
    fn test_missing_artifact_id_rejected() {
        let content = "version = \"1\"\ncdap_artifacts = [\"system:x\"]\n";
        let result = BuildConfig::parse(content, Path::new("."));
        assert!(matches!(result, Err(ConfigError::Missing("artifact_id"))));
    }

    #[test]
    fn test_load_uses_config_directory_as_base() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        assert!(fs::write(&config_path, MINIMAL).is_ok());

        let loaded = BuildConfig::load(&config_path);
        assert!(loaded.is_ok(), "Failed to load config");
        assert!(loaded.is_ok_and(|c| c.base_dir() == temp_dir.path()));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let result = BuildConfig::load(Path::new("/nonexistent/hubpack.toml"));
        let Err(err) = result else {
            panic!("missing file should fail");
        };
        assert!(err.to_string().contains("/nonexistent/hubpack.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = BuildConfig::path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }
}
