use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use hubpack_manifest::{aggregate, write_plugin_manifest, AggregateOptions, PluginManifest, SourceDirs};
use std::path::PathBuf;

/// Aggregate docs, widgets and icons into `<artifactId>-<version>.json`
pub fn handle_plugin_json(config: &BuildConfig) -> anyhow::Result<PathBuf> {
    let docs = config.docs_dir();
    let widgets = config.widgets_dir();
    let icons = config.icons_dir();
    let build_dir = config.build_dir();

    logger::header(
        "Plugin JSON",
        &[
            ("Artifact ID", config.artifact_id.clone()),
            ("Version", config.version.clone()),
            ("Base Directory", config.base_dir().display().to_string()),
            ("Build Directory", build_dir.display().to_string()),
            ("Widgets Directory", widgets.display().to_string()),
            ("Icons Directory", icons.display().to_string()),
            ("Docs Directory", docs.display().to_string()),
            (
                "Parent Version Range",
                config.parent_version_range.clone().unwrap_or_default(),
            ),
        ],
    );
    logger::list("CDAP Artifacts", &config.cdap_artifacts);

    let properties = aggregate(
        SourceDirs {
            docs: &docs,
            widgets: &widgets,
            icons: &icons,
        },
        AggregateOptions {
            yaml_widgets: config.yaml_widgets,
        },
    )?;
    logger::step(&format!("Collected {} properties", properties.len()));

    let manifest = PluginManifest::new(
        properties,
        &config.cdap_artifacts,
        config.parent_version_range.as_deref(),
    );
    let output = write_plugin_manifest(&manifest, &build_dir, &config.manifest_file_name())?;

    logger::success(&format!("Successfully created: {}", config.manifest_file_name()));
    logger::footer();
    Ok(output)
}
