//! Plugin manifest property aggregation
//!
//! Documentation (`docs/*.md`) and widget configurations (`widgets/*.json`) are
//! folded into one property map keyed `doc.<name>` and `widgets.<name>`. Files
//! are processed in name order so the result does not depend on how the
//! platform lists directories.

use crate::dir_scan::{base_name, display_name, extension, regular_files};
use crate::errors::ManifestError;
use crate::icon::{self, IconIndex};
use crate::types::PropertyMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const DOC_PREFIX: &str = "doc";
const WIDGET_PREFIX: &str = "widgets";
const DOC_EXTENSION: &str = "md";
const JSON_EXTENSION: &str = "json";
const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Input directories for one aggregation run
#[derive(Debug, Clone, Copy)]
pub struct SourceDirs<'a> {
    pub docs: &'a Path,
    pub widgets: &'a Path,
    pub icons: &'a Path,
}

/// Knobs for the widget scan
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Accept `.yaml`/`.yml` widgets alongside `.json`
    pub yaml_widgets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetFormat {
    Json,
    Yaml,
}

impl AggregateOptions {
    fn widget_format(self, path: &Path) -> Option<WidgetFormat> {
        let ext = extension(path)?;
        if ext == JSON_EXTENSION {
            Some(WidgetFormat::Json)
        } else if self.yaml_widgets && YAML_EXTENSIONS.contains(&ext.as_str()) {
            Some(WidgetFormat::Yaml)
        } else {
            None
        }
    }
}

/// Build the property map from the docs, widgets and icons directories
///
/// The docs and widgets directories must exist; a missing icons directory only
/// means no icons are embedded.
pub fn aggregate(dirs: SourceDirs<'_>, options: AggregateOptions) -> Result<PropertyMap, ManifestError> {
    let icons = IconIndex::scan(dirs.icons)?;
    debug!("Indexed {} icon(s) from {}", icons.len(), dirs.icons.display());

    let mut properties = collect_documentation(dirs.docs)?;
    let widgets = collect_widgets(dirs.widgets, &icons, options)?;
    properties.extend(widgets);

    info!("Aggregated {} plugin properties", properties.len());
    Ok(properties)
}

/// Read every markdown file into `doc.<name>`
pub fn collect_documentation(dir: &Path) -> Result<PropertyMap, ManifestError> {
    let mut properties = PropertyMap::new();

    for file in regular_files(dir, "Documentation")? {
        if extension(&file).as_deref() != Some(DOC_EXTENSION) {
            warn!("Skipping non Markdown file '{}'", display_name(&file));
            continue;
        }
        let Some(name) = base_name(&file) else {
            continue;
        };

        let text = fs::read_to_string(&file).map_err(|e| ManifestError::io(&file, e))?;
        insert_property(&mut properties, DOC_PREFIX, &name, text, &file);
    }

    Ok(properties)
}

/// Parse every widget file, attach its icon, and store it pretty-printed under `widgets.<name>`
pub fn collect_widgets(
    dir: &Path,
    icons: &IconIndex,
    options: AggregateOptions,
) -> Result<PropertyMap, ManifestError> {
    let mut properties = PropertyMap::new();

    for file in regular_files(dir, "Widget")? {
        let Some(format) = options.widget_format(&file) else {
            warn!("Skipping non JSON file '{}'", display_name(&file));
            continue;
        };
        let Some(name) = base_name(&file) else {
            continue;
        };

        let mut widget = parse_widget(&file, format)?;
        if let Some(icon_file) = icons.get(&name) {
            let inline = icon::embed(icon_file)?;
            icon::attach(&mut widget, &inline)?;
        }

        let rendered = serde_json::to_string_pretty(&widget)?;
        insert_property(&mut properties, WIDGET_PREFIX, &name, rendered, &file);
    }

    Ok(properties)
}

fn parse_widget(file: &Path, format: WidgetFormat) -> Result<serde_json::Value, ManifestError> {
    let text = fs::read_to_string(file).map_err(|e| ManifestError::io(file, e))?;
    let value: serde_json::Value = match format {
        WidgetFormat::Json => {
            serde_json::from_str(&text).map_err(|e| ManifestError::malformed(file, e.to_string()))?
        }
        WidgetFormat::Yaml => {
            serde_yaml::from_str(&text).map_err(|e| ManifestError::malformed(file, e.to_string()))?
        }
    };

    if !value.is_object() {
        return Err(ManifestError::malformed(
            file,
            "expected a top-level object",
        ));
    }
    Ok(value)
}

fn insert_property(properties: &mut PropertyMap, prefix: &str, name: &str, value: String, source: &Path) {
    let key = format!("{}.{}", prefix, name);
    if properties.insert(key.clone(), value).is_some() {
        warn!(
            "'{}' replaces an earlier file for property '{}'",
            display_name(source),
            key
        );
    }
}
