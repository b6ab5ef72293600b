use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use hubpack_manifest::{spec, write_spec, SpecConfig, SPEC_JSON};
use std::path::PathBuf;

/// Map the build config onto the spec builder inputs
pub fn spec_config(config: &BuildConfig) -> SpecConfig {
    SpecConfig {
        action_type: config.action_type.clone(),
        label: config.label().to_string(),
        description: config.description.clone(),
        author: config.author.clone(),
        org: config.org.clone(),
        artifact_id: config.artifact_id.clone(),
        version: config.version.clone(),
        scope: config.scope.clone(),
        config_file_name: config.manifest_file_name(),
        artifacts: config.cdap_artifacts.clone(),
        categories: config.categories.clone(),
        additional_arguments: config
            .additional_action_arguments
            .iter()
            .map(|arg| (arg.name.clone(), arg.value.clone()))
            .collect(),
        is_pipeline: config.is_pipeline,
    }
}

/// Build and write `spec.json`
pub fn handle_spec_json(config: &BuildConfig) -> anyhow::Result<PathBuf> {
    let inputs = spec_config(config);
    let document = spec::build(&inputs);

    let mut rows = vec![
        ("specVersion", document.spec_version.clone()),
        ("label", document.label.clone()),
        ("description", document.description.clone().unwrap_or_default()),
    ];
    if let Some(ref author) = document.author {
        rows.push(("author", author.clone()));
    }
    if let Some(ref org) = document.org {
        rows.push(("org", org.clone()));
    }
    rows.extend([
        ("created", document.created.to_string()),
        ("cdapVersion", document.cdap_version.clone()),
        ("action type", inputs.effective_action_type().to_string()),
        ("action arg name", inputs.artifact_id.clone()),
        ("action arg version", inputs.version.clone()),
        ("action arg scope", inputs.scope.clone()),
        ("action arg config", inputs.config_file_name.clone()),
    ]);
    logger::header("Plugin Spec JSON", &rows);
    if let Some(ref categories) = document.categories {
        logger::list("categories", categories);
    }
    if !inputs.additional_arguments.is_empty() {
        let pairs: Vec<String> = inputs
            .additional_arguments
            .iter()
            .map(|(name, value)| format!("{} : {}", name, value))
            .collect();
        logger::list("additionalActionArguments", &pairs);
    }

    let output = write_spec(&document, &config.build_dir())?;
    logger::success(&format!("Successfully created: {}", SPEC_JSON));
    logger::footer();
    Ok(output)
}
