//! # asset_downloads
//!
//! Catalog of the assets a photogrammetry task produces (orthophotos,
//! elevation models, point clouds, textured meshes) and the URLs used to
//! download them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use asset_downloads::prelude::*;
//!
//! for asset in AssetCatalog::list_downloadable() {
//!     println!("{} -> {}", asset.label(), asset.download_url(5, 42));
//! }
//! ```

pub mod asset;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub mod prelude {
    //! Commonly used types
    pub use crate::asset::{AssetDescriptor, AssetDownload, SEPARATOR_ID, SEPARATOR_URL};
    pub use crate::catalog::AssetCatalog;
    pub use crate::config::Config;
    pub use crate::error::{AssetError, Result};
    pub use crate::storage::{storage_for, AssetStorage, TaskAssets};
}
