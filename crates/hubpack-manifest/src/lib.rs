//! hubpack manifest assembly
//!
//! Builds the two documents a plugin ships to the hub:
//! - the plugin manifest, aggregated from `docs/`, `widgets/` and `icons/`
//! - `spec.json`, the single installable action with its ordered arguments
//!
//! Everything here is synchronous and works on fresh inputs per build.
//! Skipped files are reported through `tracing` warnings.

mod dir_scan;
pub mod errors;
pub mod icon;
pub mod manifest_writer;
pub mod packager;
pub mod pipeline;
pub mod properties;
pub mod spec;
pub mod types;
pub mod version_range;

pub use errors::ManifestError;
pub use icon::IconIndex;
pub use manifest_writer::{
    read_plugin_manifest, read_spec, write_document, write_plugin_manifest, write_spec, SPEC_JSON,
};
pub use packager::{package, PackageReport, PackageRequest};
pub use pipeline::extract_pipeline_config;
pub use properties::{aggregate, AggregateOptions, SourceDirs};
pub use spec::{SpecConfig, CREATE_PIPELINE_DRAFT, ONE_STEP_DEPLOY_PLUGIN};
pub use types::{
    Action, Argument, ArgumentValue, ArtifactReference, InlineIcon, PluginManifest, PropertyMap,
    SpecDocument,
};
pub use version_range::extract_range;
