//! Configuration file handling

use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `project/<id>/task/<id>/assets` trees
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,
    /// Prefix for generated download URLs (e.g. `https://host`)
    #[serde(default)]
    pub url_prefix: String,
}

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".asset-downloads")
}

fn default_media_root() -> PathBuf {
    app_dir().join("media")
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    app_dir().join("config.toml")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            url_prefix: String::new(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AssetError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load the explicit config file, else the default one, else defaults
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(config_path) => Self::load_or_default(config_path),
            None => {
                let default_config = default_config_path();
                if default_config.exists() {
                    Self::load_or_default(&default_config)
                } else {
                    Config::default()
                }
            }
        }
    }

    /// Read a config file, logging problems and falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Prefix a relative download URL; `#` placeholders are left alone
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", self.url_prefix.trim_end_matches('/'), url)
        } else {
            url.to_string()
        }
    }
}
