use crate::errors::CommandError;
use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use hubpack_manifest::{extract_pipeline_config, write_document};
use std::path::PathBuf;

/// Write the `config` section of an exported pipeline as `<artifactId>-<version>.json`
pub fn handle_pipeline_json(config: &BuildConfig) -> anyhow::Result<PathBuf> {
    let pipeline_file = config
        .pipeline_json_path()
        .ok_or(CommandError::MissingPipelineFile)?;
    if !pipeline_file.is_file() {
        return Err(CommandError::PipelineFileNotFound(pipeline_file).into());
    }

    let build_dir = config.build_dir();
    logger::header(
        "Pipeline JSON",
        &[
            ("Artifact ID", config.artifact_id.clone()),
            ("Version", config.version.clone()),
            ("Pipeline JSON File", pipeline_file.display().to_string()),
            ("Build Directory", build_dir.display().to_string()),
        ],
    );

    let pipeline_config = extract_pipeline_config(&pipeline_file)?;
    let output = build_dir.join(config.manifest_file_name());
    write_document(&pipeline_config, &output)?;

    logger::success(&format!("Successfully created: {}", config.manifest_file_name()));
    logger::footer();
    Ok(output)
}
