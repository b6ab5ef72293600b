//! Document types written by hubpack
//!
//! Two documents come out of a build:
//! - the plugin manifest (`<artifactId>-<version>.json`): widget and doc properties plus parents
//! - the spec (`spec.json`): the installable action descriptor
//!
//! Field order in these structs is the field order in the written JSON.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

// =============================================================================
// PLUGIN MANIFEST
// =============================================================================

/// Property key to serialized content (`doc.<name>` or `widgets.<name>`)
pub type PropertyMap = BTreeMap<String, String>;

/// The `<artifactId>-<version>.json` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub parents: Vec<String>,
}

impl PluginManifest {
    /// Wrap aggregated properties, suffixing each parent with `range` when given
    pub fn new(properties: PropertyMap, artifacts: &[String], range: Option<&str>) -> Self {
        let parents = artifacts
            .iter()
            .map(|artifact| match range {
                Some(range) => format!("{}{}", artifact, range),
                None => artifact.clone(),
            })
            .collect();
        PluginManifest {
            properties,
            parents,
        }
    }
}

// =============================================================================
// INLINE ICON
// =============================================================================

/// Widget `icon` entry carrying the image as a data URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineIcon {
    #[serde(rename = "type")]
    pub icon_type: String,
    pub arguments: InlineIconArguments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineIconArguments {
    pub data: String,
}

impl InlineIcon {
    pub fn from_data_uri(data: String) -> Self {
        InlineIcon {
            icon_type: "inline".to_string(),
            arguments: InlineIconArguments { data },
        }
    }
}

// =============================================================================
// SPEC
// =============================================================================

/// The `spec.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDocument {
    pub spec_version: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Epoch milliseconds at build time
    pub created: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub cdap_version: String,
    pub actions: Vec<Action>,
}

/// One installable operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    pub label: String,
    /// `name`, `version`, `scope`, `config`, extras, then the pipeline artifact
    pub arguments: SmallVec<[Argument; 6]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: ArgumentValue,
}

impl Argument {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Argument {
            name: name.into(),
            value: ArgumentValue::Text(value.into()),
        }
    }

    /// The string value, if this is a plain argument
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            ArgumentValue::Text(value) => Some(value),
            ArgumentValue::Artifact(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Text(String),
    Artifact(ArtifactReference),
}

/// Reference to a host artifact, used as a structured argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactReference {
    pub scope: String,
    pub name: String,
    pub version: String,
}
