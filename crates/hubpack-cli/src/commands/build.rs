use super::{package::handle_package, pipeline_json::handle_pipeline_json};
use super::{plugin_json::handle_plugin_json, spec_json::handle_spec_json};
use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use tracing::debug;

/// Run every goal in order: manifest, spec, package
///
/// Pipeline artifacts with an exported pipeline use it as their manifest;
/// everything else aggregates the docs and widgets directories.
pub fn handle_build(config: &BuildConfig) -> anyhow::Result<()> {
    let manifest = if config.is_pipeline && config.pipeline_json_file.is_some() {
        debug!("Using exported pipeline as manifest");
        handle_pipeline_json(config)?
    } else {
        handle_plugin_json(config)?
    };
    let spec = handle_spec_json(config)?;
    let report = handle_package(config)?;

    logger::info(&format!("Manifest: {}", manifest.display()));
    logger::info(&format!("Spec:     {}", spec.display()));
    logger::success(&format!(
        "Built {} {} into {}",
        config.artifact_id,
        config.version,
        report.output_dir.display()
    ));
    Ok(())
}
