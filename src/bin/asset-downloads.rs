//! asset-downloads CLI - inspect the asset catalog and task asset folders
//!
//! ## Example Usage
//!
//! ```bash
//! # List every catalog entry
//! asset-downloads list
//!
//! # Only some assets, as JSON
//! asset-downloads list --only dtm.tif --only georeferenced_model.las --json
//!
//! # Download URL of an asset
//! asset-downloads url orthophoto.tif --project 5 --task 42
//!
//! # Which assets a task has on disk
//! asset-downloads available --project 5 --task 42
//! ```

use anyhow::{bail, Context, Result};
use asset_downloads::asset::AssetDownload;
use asset_downloads::catalog::AssetCatalog;
use asset_downloads::config::Config;
use asset_downloads::storage::TaskAssets;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// asset-downloads: downloadable asset catalog for processed tasks
#[derive(Parser)]
#[command(name = "asset-downloads")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Downloadable asset catalog for processed tasks", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    List {
        /// Leave out separators
        #[arg(short = 'd', long)]
        downloadable: bool,

        /// Only these asset ids (repeatable)
        #[arg(long, value_name = "ASSET")]
        only: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the download URL of an asset
    Url {
        /// Asset id (e.g. orthophoto.tif)
        #[arg(value_name = "ASSET")]
        asset: String,

        /// Project id
        #[arg(short = 'p', long)]
        project: String,

        /// Task id
        #[arg(short = 't', long)]
        task: String,
    },

    /// List the assets a task has on disk
    Available {
        /// Project id
        #[arg(short = 'p', long)]
        project: String,

        /// Task id
        #[arg(short = 't', long)]
        task: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve the file served for an asset download
    Resolve {
        /// Asset id (e.g. textured_model.zip)
        #[arg(value_name = "ASSET")]
        asset: String,

        /// Project id
        #[arg(short = 'p', long)]
        project: String,

        /// Task id
        #[arg(short = 't', long)]
        task: String,
    },
}

#[derive(Serialize)]
struct UrlEntry<'a> {
    #[serde(flatten)]
    asset: &'a AssetDownload,
    url: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "asset-downloads".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "Media root: {}",
            config.media_root.display().to_string().dimmed()
        );
    }

    let result = match cli.command {
        Commands::List {
            downloadable,
            only,
            json,
        } => list_assets(downloadable, &only, json),
        Commands::Url {
            asset,
            project,
            task,
        } => print_url(&config, &asset, &project, &task),
        Commands::Available {
            project,
            task,
            json,
        } => show_available(&config, &project, &task, json),
        Commands::Resolve {
            asset,
            project,
            task,
        } => resolve_asset(&config, &asset, &project, &task),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn list_assets(downloadable: bool, only: &[String], json: bool) -> Result<()> {
    let mut assets = if only.is_empty() {
        AssetCatalog::list_all()
    } else {
        AssetCatalog::list_by_ids(only)
    };
    if downloadable {
        assets.retain(|asset| !asset.is_separator());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&assets)?);
        return Ok(());
    }

    print_table(&assets);
    Ok(())
}

fn print_table(assets: &[AssetDownload]) {
    for asset in assets {
        match asset {
            AssetDownload::Asset(d) => {
                println!("  {:<26} {}", d.asset.green(), d.label);
            }
            AssetDownload::Separator => println!("  {}", "-".repeat(40).dimmed()),
        }
    }
}

fn print_url(config: &Config, asset_id: &str, project: &str, task: &str) -> Result<()> {
    let Some(asset) = AssetCatalog::find(asset_id) else {
        bail!("unknown asset '{}'", asset_id);
    };
    println!(
        "{}",
        config.absolute_url(&asset.download_url(project, task))
    );
    Ok(())
}

fn show_available(config: &Config, project: &str, task: &str, json: bool) -> Result<()> {
    let task_assets = TaskAssets::new(&config.media_root, project, task);
    let task_dir = task_assets.task_path();
    if !task_dir.is_dir() {
        bail!("task directory not found: {}", task_dir.display());
    }

    let downloads = task_assets.available_downloads();

    if json {
        let entries: Vec<UrlEntry> = downloads
            .iter()
            .map(|asset| UrlEntry {
                asset,
                url: config.absolute_url(&task_assets.download_url(asset)),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if downloads.is_empty() {
        println!("{}", "No assets available".yellow());
        return Ok(());
    }

    println!(
        "{} {} assets available",
        "Task".bold(),
        downloads.len().to_string().cyan()
    );
    for asset in &downloads {
        println!(
            "  {:<26} {}",
            asset.asset_id().green(),
            config.absolute_url(&task_assets.download_url(asset))
        );
    }
    Ok(())
}

fn resolve_asset(config: &Config, asset_id: &str, project: &str, task: &str) -> Result<()> {
    let task_assets = TaskAssets::new(&config.media_root, project, task);
    let path = task_assets
        .download_path(asset_id)
        .with_context(|| format!("resolving {} for task {}/{}", asset_id, project, task))?;

    if !path.exists() {
        eprintln!(
            "{} {} does not exist yet",
            "Warning:".yellow(),
            path.display()
        );
    }
    println!("{}", path.display());
    Ok(())
}
