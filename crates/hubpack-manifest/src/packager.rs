//! Hub package staging
//!
//! Copies the built artifacts into `<packages>/<artifactId>/<version>/`, the
//! layout the hub expects. A missing build artifact is reported and skipped:
//! pipeline artifacts, for instance, never produce a jar.

use crate::dir_scan::{display_name, regular_files};
use crate::errors::ManifestError;
use crate::manifest_writer::SPEC_JSON;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What to stage and where
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub build_dir: PathBuf,
    pub packages_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub artifact_id: String,
    pub version: String,
    pub is_pipeline: bool,
}

/// Result of a packaging run
#[derive(Debug, Default)]
pub struct PackageReport {
    pub output_dir: PathBuf,
    pub copied: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl PackageRequest {
    /// `<packages>/<artifactId>/<version>`
    pub fn output_dir(&self) -> PathBuf {
        self.packages_dir.join(&self.artifact_id).join(&self.version)
    }

    /// Build artifacts to stage, in copy order
    pub fn artifact_names(&self) -> Vec<String> {
        let stem = format!("{}-{}", self.artifact_id, self.version);
        let mut names = Vec::with_capacity(3);
        if !self.is_pipeline {
            names.push(format!("{}.jar", stem));
        }
        names.push(format!("{}.json", stem));
        names.push(SPEC_JSON.to_string());
        names
    }
}

/// Stage the build artifacts and icons for the hub
pub fn package(request: &PackageRequest) -> Result<PackageReport, ManifestError> {
    let output_dir = request.output_dir();
    info!("Creating artifact output dir at: {}", output_dir.display());
    fs::create_dir_all(&output_dir).map_err(|e| ManifestError::io(&output_dir, e))?;

    let mut report = PackageReport {
        output_dir: output_dir.clone(),
        ..Default::default()
    };

    for name in request.artifact_names() {
        let source = request.build_dir.join(&name);
        if !source.is_file() {
            warn!("{} does not exist!", source.display());
            report.missing.push(source);
            continue;
        }
        report.copied.push(copy_into(&source, &output_dir)?);
    }

    if request.icons_dir.is_dir() {
        for icon in regular_files(&request.icons_dir, "Icon")? {
            report.copied.push(copy_into(&icon, &output_dir)?);
        }
    }

    Ok(report)
}

fn copy_into(source: &Path, output_dir: &Path) -> Result<PathBuf, ManifestError> {
    let destination = output_dir.join(display_name(source));
    info!("Copying {} to {}", display_name(source), destination.display());
    fs::copy(source, &destination).map_err(|e| ManifestError::io(&destination, e))?;
    Ok(destination)
}
