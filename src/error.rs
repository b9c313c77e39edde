//! Error types for asset downloads
//!
//! Catalog queries never fail. These errors come from the storage side:
//! resolving an asset to a path on disk, building deferred archives and
//! loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for asset resolution
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    #[error("Asset {asset} source does not exist: {}", .path.display())]
    SourceMissing { asset: String, path: PathBuf },

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Zip error: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

/// Result type alias for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
