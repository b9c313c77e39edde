//! Downloadable asset entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder id (and label) carried by separator entries
pub const SEPARATOR_ID: &str = "-";

/// Non-navigable link returned for separator entries
pub const SEPARATOR_URL: &str = "#";

/// One downloadable artifact type produced by the processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Display name
    pub label: String,
    /// Stable asset identifier (e.g. `orthophoto.tif`)
    pub asset: String,
    /// Icon reference for the rendering layer
    pub icon: String,
}

/// Catalog entry: either a real asset or a visual separator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetDownload {
    Asset(AssetDescriptor),
    Separator,
}

impl AssetDownload {
    /// Create a real asset entry
    pub fn new(label: impl Into<String>, asset: impl Into<String>, icon: impl Into<String>) -> Self {
        AssetDownload::Asset(AssetDescriptor {
            label: label.into(),
            asset: asset.into(),
            icon: icon.into(),
        })
    }

    /// Create a separator entry
    pub fn separator() -> Self {
        AssetDownload::Separator
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, AssetDownload::Separator)
    }

    pub fn label(&self) -> &str {
        match self {
            AssetDownload::Asset(d) => &d.label,
            AssetDownload::Separator => SEPARATOR_ID,
        }
    }

    /// Asset identifier; separators report [`SEPARATOR_ID`]
    pub fn asset_id(&self) -> &str {
        match self {
            AssetDownload::Asset(d) => &d.asset,
            AssetDownload::Separator => SEPARATOR_ID,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            AssetDownload::Asset(d) => &d.icon,
            AssetDownload::Separator => "",
        }
    }

    /// Get the descriptor of a real asset
    pub fn descriptor(&self) -> Option<&AssetDescriptor> {
        match self {
            AssetDownload::Asset(d) => Some(d),
            AssetDownload::Separator => None,
        }
    }

    /// Build the download URL for this entry within a project task
    ///
    /// Ids are substituted literally and are not validated. Separators
    /// ignore their inputs and always return [`SEPARATOR_URL`].
    pub fn download_url(&self, project_id: impl fmt::Display, task_id: impl fmt::Display) -> String {
        match self {
            AssetDownload::Asset(d) => format!(
                "/api/projects/{}/tasks/{}/download/{}",
                project_id, task_id, d.asset
            ),
            AssetDownload::Separator => SEPARATOR_URL.to_string(),
        }
    }
}

impl fmt::Display for AssetDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetDownload::Asset(d) => write!(f, "{} ({})", d.label, d.asset),
            AssetDownload::Separator => write!(f, "{}", SEPARATOR_ID),
        }
    }
}
