//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use site_content::{
    Collection, ContentCatalog, ContentConfig, ContentDirectoryLoader, ContentEntry, INNOVATION,
    SERVICES,
};

/// Environment configuration with command line overrides applied.
pub fn content_config(data_dir: Option<PathBuf>, search_root: Option<PathBuf>) -> ContentConfig {
    let mut config = ContentConfig::from_env();

    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(root) = search_root {
        // An explicit search root wins over a data dir from the environment
        config.data_dir = None;
        config.search_root = Some(root);
    }

    config
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CollectionArg {
    /// Service categories
    Services,
    /// Innovation areas
    Innovation,
}

impl CollectionArg {
    pub fn collection(self) -> Collection {
        match self {
            Self::Services => SERVICES,
            Self::Innovation => INNOVATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable view
    Table,
    /// Full JSON output
    Json,
}

/// Locate and load a collection, returning the loader alongside its catalog.
pub fn load<T: ContentEntry>(
    collection: &Collection,
    config: &ContentConfig,
) -> Result<(ContentDirectoryLoader<T>, ContentCatalog<T>)> {
    let loader = ContentDirectoryLoader::<T>::discover(collection, config)
        .with_context(|| format!("Failed to locate {} content", collection.name))?;

    let catalog = loader
        .load_all()
        .with_context(|| format!("Failed to load {} content", collection.name))?;

    Ok((loader, catalog))
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}
