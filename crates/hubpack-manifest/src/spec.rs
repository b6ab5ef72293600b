//! Spec document builder
//!
//! A spec holds exactly one action. Its arguments are positional for hub
//! consumers: `name`, `version`, `scope`, `config` always come first.

use crate::types::{Action, Argument, ArgumentValue, ArtifactReference, SpecDocument};
use crate::version_range::extract_range;
use smallvec::SmallVec;
use tracing::debug;

/// Action type used unless the build asks for another one
pub const ONE_STEP_DEPLOY_PLUGIN: &str = "one_step_deploy_plugin";

/// Default action type for pipeline artifacts
pub const CREATE_PIPELINE_DRAFT: &str = "create_pipeline_draft";

/// Host artifact every pipeline action depends on
pub const PIPELINE_ARTIFACT_NAME: &str = "cdap-data-pipeline";
pub const PIPELINE_ARTIFACT_SCOPE: &str = "SYSTEM";
pub const PIPELINE_ARTIFACT_VERSION: &str = "[6.1.1, 7.0.0-SNAPSHOT)";

/// Inputs for one spec document
#[derive(Debug, Clone, Default)]
pub struct SpecConfig {
    /// `None` means the default action type
    pub action_type: Option<String>,
    pub label: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub org: Option<String>,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    /// Name of the plugin manifest the action installs
    pub config_file_name: String,
    /// Host artifact coordinates; only the first feeds `cdapVersion`
    pub artifacts: Vec<String>,
    pub categories: Option<Vec<String>>,
    pub additional_arguments: Vec<(String, String)>,
    pub is_pipeline: bool,
}

impl SpecConfig {
    /// Action type after applying the pipeline default
    ///
    /// Pipelines that kept the default type get `create_pipeline_draft`; an
    /// explicitly chosen type is left alone.
    pub fn effective_action_type(&self) -> &str {
        let requested = self.action_type.as_deref().unwrap_or(ONE_STEP_DEPLOY_PLUGIN);
        if self.is_pipeline && requested == ONE_STEP_DEPLOY_PLUGIN {
            CREATE_PIPELINE_DRAFT
        } else {
            requested
        }
    }

    /// Version range of the first host artifact
    pub fn cdap_version(&self) -> &str {
        self.artifacts
            .first()
            .map_or("", |artifact| extract_range(artifact))
    }
}

/// Build the spec document stamped with the current time
pub fn build(config: &SpecConfig) -> SpecDocument {
    build_at(config, chrono::Utc::now().timestamp_millis())
}

/// Build the spec document with an explicit `created` timestamp
pub fn build_at(config: &SpecConfig, created: i64) -> SpecDocument {
    let action = build_action(config);
    debug!(
        "Built '{}' action with {} argument(s)",
        action.action_type,
        action.arguments.len()
    );

    SpecDocument {
        spec_version: config.version.clone(),
        label: config.label.clone(),
        description: non_empty(config.description.as_deref()),
        author: non_empty(config.author.as_deref()),
        org: non_empty(config.org.as_deref()),
        created,
        categories: config.categories.clone(),
        cdap_version: config.cdap_version().to_string(),
        actions: vec![action],
    }
}

/// The single action of a spec
pub fn build_action(config: &SpecConfig) -> Action {
    let mut arguments: SmallVec<[Argument; 6]> = SmallVec::new();
    arguments.push(Argument::text("name", config.artifact_id.as_str()));
    arguments.push(Argument::text("version", config.version.as_str()));
    arguments.push(Argument::text("scope", config.scope.as_str()));
    arguments.push(Argument::text("config", config.config_file_name.as_str()));

    arguments.extend(
        config
            .additional_arguments
            .iter()
            .map(|(name, value)| Argument::text(name.as_str(), value.as_str())),
    );

    if config.is_pipeline {
        arguments.push(pipeline_artifact_argument());
    }

    Action {
        action_type: config.effective_action_type().to_string(),
        label: config.label.clone(),
        arguments,
    }
}

/// `{name: "artifact", value: {scope, name, version}}` pointing at the pipeline runtime
pub fn pipeline_artifact_argument() -> Argument {
    Argument {
        name: "artifact".to_string(),
        value: ArgumentValue::Artifact(ArtifactReference {
            scope: PIPELINE_ARTIFACT_SCOPE.to_string(),
            name: PIPELINE_ARTIFACT_NAME.to_string(),
            version: PIPELINE_ARTIFACT_VERSION.to_string(),
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_config() -> SpecConfig {
        SpecConfig {
            action_type: Some(ONE_STEP_DEPLOY_PLUGIN.to_string()),
            label: "labelTest".to_string(),
            description: Some("descriptionTest".to_string()),
            author: Some("authorTest".to_string()),
            org: Some("orgTest".to_string()),
            artifact_id: "artifactIdTest".to_string(),
            version: "versionTest".to_string(),
            scope: "scopeTest".to_string(),
            config_file_name: "artifactIdTest-versionTest.json".to_string(),
            artifacts: vec![
                "system:cdap-data-pipeline[6.0.0-SNAPSHOT,9.0.0-SNAPSHOT)".to_string(),
                "system:cdap-data-pipeline[7.0.0-SNAPSHOT,8.0.0-SNAPSHOT)".to_string(),
            ],
            categories: Some(vec!["categoryTest1".to_string(), "categoryTest2".to_string()]),
            additional_arguments: vec![
                ("arg1key".to_string(), "arg1value".to_string()),
                ("arg2key".to_string(), "arg2value".to_string()),
            ],
            is_pipeline: false,
        }
    }

    fn argument_names(action: &Action) -> Vec<&str> {
        action.arguments.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_all_fields_populated() {
        let spec = build_at(&spec_config(), 1_700_000_000_000);

        assert_eq!(spec.spec_version, "versionTest");
        assert_eq!(spec.label, "labelTest");
        assert_eq!(spec.description.as_deref(), Some("descriptionTest"));
        assert_eq!(spec.author.as_deref(), Some("authorTest"));
        assert_eq!(spec.org.as_deref(), Some("orgTest"));
        assert_eq!(spec.created, 1_700_000_000_000);
        assert_eq!(spec.cdap_version, "[6.0.0-SNAPSHOT,9.0.0-SNAPSHOT)");
        assert_eq!(spec.categories.as_ref().map(Vec::len), Some(2));
        assert_eq!(spec.actions.len(), 1);

        let action = &spec.actions[0];
        assert_eq!(action.action_type, ONE_STEP_DEPLOY_PLUGIN);
        assert_eq!(action.label, "labelTest");
        assert_eq!(
            argument_names(action),
            vec!["name", "version", "scope", "config", "arg1key", "arg2key"]
        );
        assert_eq!(action.arguments[0].as_text(), Some("artifactIdTest"));
        assert_eq!(action.arguments[1].as_text(), Some("versionTest"));
        assert_eq!(action.arguments[2].as_text(), Some("scopeTest"));
        assert_eq!(
            action.arguments[3].as_text(),
            Some("artifactIdTest-versionTest.json")
        );
        assert_eq!(action.arguments[5].as_text(), Some("arg2value"));
    }

    #[test]
    fn test_created_uses_wall_clock() {
        let spec = build(&spec_config());
        assert!(spec.created > 1_608_706_620_012);
    }

    #[test]
    fn test_pipeline_overrides_default_action_type() {
        let mut config = spec_config();
        config.is_pipeline = true;
        assert_eq!(build_action(&config).action_type, CREATE_PIPELINE_DRAFT);

        config.action_type = None;
        assert_eq!(build_action(&config).action_type, CREATE_PIPELINE_DRAFT);
    }

    #[test]
    fn test_pipeline_keeps_explicit_action_type() {
        let mut config = spec_config();
        config.is_pipeline = true;
        config.action_type = Some("deploy_app".to_string());
        assert_eq!(build_action(&config).action_type, "deploy_app");
    }

    #[test]
    fn test_non_pipeline_never_overridden() {
        let mut config = spec_config();
        config.action_type = None;
        assert_eq!(build_action(&config).action_type, ONE_STEP_DEPLOY_PLUGIN);
    }

    #[test]
    fn test_pipeline_artifact_argument_last() {
        let mut config = spec_config();
        config.is_pipeline = true;
        let action = build_action(&config);

        assert_eq!(action.arguments.len(), 4 + 2 + 1);
        let Some(last) = action.arguments.last() else {
            panic!("action has arguments");
        };
        assert_eq!(last, &pipeline_artifact_argument());
        let ArgumentValue::Artifact(ref artifact) = last.value else {
            panic!("pipeline argument carries an artifact");
        };
        assert_eq!(artifact.scope, "SYSTEM");
        assert_eq!(artifact.name, "cdap-data-pipeline");
        assert_eq!(artifact.version, "[6.1.1, 7.0.0-SNAPSHOT)");
    }

    #[test]
    fn test_argument_count() {
        for (extras, is_pipeline) in [(0, false), (0, true), (3, false), (3, true)] {
            let mut config = spec_config();
            config.is_pipeline = is_pipeline;
            config.additional_arguments = (0..extras)
                .map(|i| (format!("k{}", i), format!("v{}", i)))
                .collect();
            let action = build_action(&config);
            assert_eq!(
                action.arguments.len(),
                4 + extras + usize::from(is_pipeline)
            );
            assert_eq!(&argument_names(&action)[..4], ["name", "version", "scope", "config"]);
        }
    }

    #[test]
    fn test_optional_fields_omitted() {
        let mut config = spec_config();
        config.author = None;
        config.org = Some(String::new());
        config.description = Some(String::new());
        config.categories = None;

        let spec = build_at(&config, 1);
        let value = serde_json::to_value(&spec).unwrap_or_default();
        let Some(object) = value.as_object() else {
            panic!("spec serializes to an object");
        };
        assert!(!object.contains_key("author"));
        assert!(!object.contains_key("org"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("categories"));
        assert!(object.contains_key("cdapVersion"));
        assert!(object.contains_key("specVersion"));
    }

    #[test]
    fn test_empty_categories_kept_as_empty_list() {
        let mut config = spec_config();
        config.categories = Some(Vec::new());

        let value = serde_json::to_value(build_at(&config, 1)).unwrap_or_default();
        assert_eq!(value["categories"], serde_json::json!([]));
    }

    #[test]
    fn test_cdap_version_from_first_artifact_only() {
        let mut config = spec_config();
        config.artifacts = vec![
            "system:cdap-data-pipeline".to_string(),
            "system:cdap-data-streams[6.0.0,7.0.0)".to_string(),
        ];
        assert_eq!(build_at(&config, 1).cdap_version, "");

        config.artifacts.clear();
        assert_eq!(build_at(&config, 1).cdap_version, "");
    }
}
