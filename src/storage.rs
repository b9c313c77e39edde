//! Task asset storage
//!
//! Maps catalog asset ids to where a processed task keeps them on disk:
//!
//! ```text
//! <media_root>/project/<project_id>/task/<task_id>/assets/<relative path>
//! ```
//!
//! Most assets are plain files. Deferred assets are archives built on first
//! download from a directory of pipeline output.

use crate::asset::AssetDownload;
use crate::catalog::AssetCatalog;
use crate::error::{AssetError, Result};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Where an asset lives relative to the task's assets directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStorage {
    /// A file written by the processing pipeline
    File(&'static str),
    /// An archive generated on demand from a directory
    Deferred {
        archive: &'static str,
        compress_dir: &'static str,
    },
}

/// Storage location of a real asset; `None` for unknown ids and separators
pub fn storage_for(asset_id: &str) -> Option<AssetStorage> {
    let storage = match asset_id {
        "all.zip" => AssetStorage::File("all.zip"),
        "orthophoto.tif" => AssetStorage::File("odm_orthophoto/odm_orthophoto.tif"),
        "orthophoto.png" => AssetStorage::File("odm_orthophoto/odm_orthophoto.png"),
        "orthophoto.mbtiles" => AssetStorage::File("odm_orthophoto/odm_orthophoto.mbtiles"),
        "georeferenced_model.las" => {
            AssetStorage::File("odm_georeferencing/odm_georeferenced_model.las")
        }
        "georeferenced_model.laz" => {
            AssetStorage::File("odm_georeferencing/odm_georeferenced_model.laz")
        }
        "georeferenced_model.ply" => {
            AssetStorage::File("odm_georeferencing/odm_georeferenced_model.ply")
        }
        "georeferenced_model.csv" => {
            AssetStorage::File("odm_georeferencing/odm_georeferenced_model.csv")
        }
        "textured_model.zip" => AssetStorage::Deferred {
            archive: "textured_model.zip",
            compress_dir: "odm_texturing",
        },
        "dtm.tif" => AssetStorage::File("odm_dem/dtm.tif"),
        "dsm.tif" => AssetStorage::File("odm_dem/dsm.tif"),
        _ => return None,
    };
    Some(storage)
}

/// Assets directory of one processed task
#[derive(Debug, Clone)]
pub struct TaskAssets {
    media_root: PathBuf,
    project_id: String,
    task_id: String,
}

impl TaskAssets {
    /// Create a view over a task's files under `media_root`
    pub fn new(
        media_root: impl Into<PathBuf>,
        project_id: impl fmt::Display,
        task_id: impl fmt::Display,
    ) -> Self {
        Self {
            media_root: media_root.into(),
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Root directory of the task
    pub fn task_path(&self) -> PathBuf {
        self.media_root
            .join("project")
            .join(&self.project_id)
            .join("task")
            .join(&self.task_id)
    }

    /// Path relative to the task's assets directory
    pub fn assets_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.task_path().join("assets").join(relative)
    }

    /// Check whether an asset exists on disk
    ///
    /// Deferred assets count as available once their source directory
    /// exists, even if the archive has not been built yet.
    pub fn is_available(&self, asset_id: &str) -> bool {
        match storage_for(asset_id) {
            Some(AssetStorage::File(path)) => self.assets_path(path).exists(),
            Some(AssetStorage::Deferred { compress_dir, .. }) => {
                self.assets_path(compress_dir).exists()
            }
            None => false,
        }
    }

    /// Ids of the assets present on disk, in catalog order
    pub fn available_assets(&self) -> Vec<String> {
        let available: Vec<String> = AssetCatalog::list_downloadable()
            .iter()
            .map(|asset| asset.asset_id())
            .filter(|id| self.is_available(id))
            .map(str::to_string)
            .collect();

        log::debug!(
            "Task {}/{}: {} assets available",
            self.project_id,
            self.task_id,
            available.len()
        );
        available
    }

    /// Catalog entries of the assets present on disk
    pub fn available_downloads(&self) -> Vec<AssetDownload> {
        AssetCatalog::list_by_ids(self.available_assets())
    }

    /// Catalog entry's URL within this task
    pub fn download_url(&self, asset: &AssetDownload) -> String {
        asset.download_url(&self.project_id, &self.task_id)
    }

    /// Resolve the file to serve for an asset download
    ///
    /// File assets resolve without touching the disk. Deferred assets are
    /// zipped on first request and the archive path is returned.
    pub fn download_path(&self, asset_id: &str) -> Result<PathBuf> {
        match storage_for(asset_id) {
            Some(AssetStorage::File(path)) => Ok(self.assets_path(path)),
            Some(AssetStorage::Deferred {
                archive,
                compress_dir,
            }) => self.generate_deferred_asset(asset_id, archive, compress_dir),
            None => Err(AssetError::UnknownAsset(asset_id.to_string())),
        }
    }

    fn generate_deferred_asset(
        &self,
        asset_id: &str,
        archive: &str,
        compress_dir: &str,
    ) -> Result<PathBuf> {
        let archive_path = self.assets_path(archive);
        let directory_path = self.assets_path(compress_dir);

        if !directory_path.is_dir() {
            return Err(AssetError::SourceMissing {
                asset: asset_id.to_string(),
                path: directory_path,
            });
        }

        if !archive_path.exists() {
            log::info!(
                "Building {} from {}",
                archive_path.display(),
                directory_path.display()
            );
            zip_directory(&directory_path, &archive_path)?;
        }

        Ok(archive_path)
    }
}

/// Zip the contents of `source` (recursively) into `archive`
///
/// The archive is written to a temporary file next to `archive` and renamed
/// into place once complete, so `archive` only ever exists fully written.
/// Entries are stored relative to `source`; symlinks are skipped.
fn zip_directory(source: &Path, archive: &Path) -> Result<()> {
    let dir = archive
        .parent()
        .ok_or_else(|| AssetError::ArchiveError(format!("no parent for {}", archive.display())))?;
    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let staging = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".part")
        .tempfile_in(dir)?;

    let staging = write_archive(source, staging)?;
    staging.persist(archive).map_err(|e| AssetError::IoError(e.error))?;
    Ok(())
}

fn write_archive(source: &Path, staging: NamedTempFile) -> Result<NamedTempFile> {
    let mut writer = ZipWriter::new(staging);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::ArchiveError(e.to_string()))?;
        let path = entry.path();
        if entry.path_is_symlink() {
            log::warn!("Skipping symlink {}", path.display());
            continue;
        }
        let relative = path
            .strip_prefix(source)
            .map_err(|e| AssetError::ArchiveError(e.to_string()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut input = File::open(path)?;
            io::copy(&mut input, &mut writer)?;
        }
    }

    let mut staging = writer.finish()?;
    staging.as_file_mut().sync_all()?;
    Ok(staging)
}
