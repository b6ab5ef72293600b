//! Inline icon embedding
//!
//! Icons are matched to widgets by base name (`icons/Table.png` belongs to
//! `widgets/Table.json`) and written into the widget as a base64 data URI.

use crate::dir_scan::{base_name, display_name, extension, regular_files};
use crate::errors::ManifestError;
use crate::types::InlineIcon;
use base64::Engine;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Media type used when the extension is not in the table
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

const MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// Media type for a file name, if its extension is known
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = extension(path)?;
    MEDIA_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
}

/// `data:<mediaType>;base64,<payload>`
pub fn data_uri(media_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", media_type, payload)
}

/// Read an icon file and build its inline descriptor
pub fn embed(icon_file: &Path) -> Result<InlineIcon, ManifestError> {
    let media_type = media_type_for(icon_file).unwrap_or_else(|| {
        warn!(
            "Unknown icon type for '{}', embedding as {}",
            display_name(icon_file),
            FALLBACK_MEDIA_TYPE
        );
        FALLBACK_MEDIA_TYPE
    });

    let bytes = fs::read(icon_file).map_err(|e| ManifestError::io(icon_file, e))?;
    debug!(
        "Embedding icon '{}' ({} bytes, {})",
        icon_file.display(),
        bytes.len(),
        media_type
    );
    Ok(InlineIcon::from_data_uri(data_uri(media_type, &bytes)))
}

/// Overwrite the top-level `icon` entry of a widget document
pub fn attach(widget: &mut serde_json::Value, icon: &InlineIcon) -> Result<(), ManifestError> {
    if let serde_json::Value::Object(map) = widget {
        map.insert("icon".to_string(), serde_json::to_value(icon)?);
    }
    Ok(())
}

/// Icon files keyed by base name
#[derive(Debug, Default, Clone)]
pub struct IconIndex {
    icons: BTreeMap<String, PathBuf>,
}

impl IconIndex {
    /// Index the icons directory
    ///
    /// A missing directory yields an empty index. When two files share a base
    /// name the first in name order is kept and the others are dropped.
    pub fn scan(dir: &Path) -> Result<Self, ManifestError> {
        let mut index = IconIndex::default();
        if !dir.exists() {
            warn!("Icons directory '{}' does not exist", dir.display());
            return Ok(index);
        }

        for file in regular_files(dir, "Icon")? {
            let Some(name) = base_name(&file) else {
                continue;
            };
            if let Some(kept) = index.icons.get(&name) {
                warn!(
                    "'{}' is being ignored. '{}' will be used.",
                    display_name(&file),
                    display_name(kept)
                );
                continue;
            }
            index.icons.insert(name, file);
        }

        Ok(index)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.icons.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
