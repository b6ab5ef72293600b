use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use hubpack_manifest::{package, PackageReport, PackageRequest};

/// Describe the staging run for a build config
pub fn package_request(config: &BuildConfig) -> PackageRequest {
    PackageRequest {
        build_dir: config.build_dir(),
        packages_dir: config.packages_dir(),
        icons_dir: config.icons_dir(),
        artifact_id: config.artifact_id.clone(),
        version: config.version.clone(),
        is_pipeline: config.is_pipeline,
    }
}

/// Stage built artifacts under `<packages>/<artifactId>/<version>`
pub fn handle_package(config: &BuildConfig) -> anyhow::Result<PackageReport> {
    let request = package_request(config);
    logger::header(
        "Hub Packager",
        &[
            ("Artifact ID", request.artifact_id.clone()),
            ("Version", request.version.clone()),
            ("Build Directory", request.build_dir.display().to_string()),
            ("Output Directory", request.output_dir().display().to_string()),
            ("Pipeline", request.is_pipeline.to_string()),
        ],
    );

    logger::spinner_start(&format!("Packaging {} {}", request.artifact_id, request.version));
    let report = match package(&request) {
        Ok(report) => report,
        Err(e) => {
            logger::spinner_error(&format!("Packaging failed: {}", e));
            return Err(e.into());
        }
    };

    for missing in &report.missing {
        logger::step(&format!("Not packaged (missing): {}", missing.display()));
    }
    for copied in &report.copied {
        logger::debug(&format!("Copied {}", copied.display()));
    }
    logger::spinner_success(&format!(
        "Packaged {} file(s) into {}",
        report.copied.len(),
        report.output_dir.display()
    ));
    logger::footer();
    Ok(report)
}
