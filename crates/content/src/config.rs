//! Content location configuration.
use std::env;
use std::path::PathBuf;

use crate::collections::Collection;
use crate::error::{ContentError, LoadResult};
use crate::loaders::{DEFAULT_SEARCH_DEPTH, find_content_root};

/// Where to look for content on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    /// Data directory holding the collection directories. Skips discovery when set.
    pub data_dir: Option<PathBuf>,
    /// Start of the upward search. Defaults to the current directory.
    pub search_root: Option<PathBuf>,
    /// Number of directories examined by the upward search.
    pub search_depth: usize,
    /// Optional TOML file with page section flags.
    pub features_file: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            search_root: None,
            search_depth: DEFAULT_SEARCH_DEPTH,
            features_file: None,
        }
    }
}

impl ContentConfig {
    /// Configuration pointing directly at a data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    /// Configuration searching upward from `search_root`.
    pub fn with_search_root(search_root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: Some(search_root.into()),
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Data directory containing `services/`, `innovation/` (default: discovered)
    /// - `CONTENT_SEARCH_ROOT` - Directory the upward search starts from (default: current directory)
    /// - `CONTENT_SEARCH_DEPTH` - Directories examined by the upward search (default: 5)
    /// - `SITE_FEATURES_FILE` - TOML file with page section flags (default: built-in flags)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from);
        config.search_root = env::var("CONTENT_SEARCH_ROOT").ok().map(PathBuf::from);

        if let Some(depth) = read_env::<usize>("CONTENT_SEARCH_DEPTH") {
            config.search_depth = depth.max(1);
        }

        config.features_file = env::var("SITE_FEATURES_FILE").ok().map(PathBuf::from);

        config
    }

    /// Resolves the directory of `collection`.
    ///
    /// With a data directory configured, the collection must exist directly
    /// under it. Otherwise the collection's relative path is searched for
    /// upward from the search root.
    pub fn collection_root(&self, collection: &Collection) -> LoadResult<PathBuf> {
        if let Some(data_dir) = &self.data_dir {
            let root = data_dir.join(collection.name);
            if root.is_dir() {
                return Ok(root);
            }
            return Err(ContentError::RootNotFound {
                relative: PathBuf::from(collection.name),
                start: data_dir.clone(),
                levels: 1,
            });
        }

        let start = match &self.search_root {
            Some(root) => root.clone(),
            None => env::current_dir().map_err(|e| ContentError::io(".", e))?,
        };

        find_content_root(&start, &collection.relative_path(), self.search_depth)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{INNOVATION, SERVICES};
    use tempfile::TempDir;

    #[test]
    fn test_default_depth() {
        assert_eq!(ContentConfig::default().search_depth, 5);
    }

    #[test]
    fn test_data_dir_skips_discovery() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("services")).unwrap();

        let config = ContentConfig::with_data_dir(temp.path());
        assert_eq!(
            config.collection_root(&SERVICES).unwrap(),
            temp.path().join("services")
        );
        assert!(matches!(
            config.collection_root(&INNOVATION),
            Err(ContentError::RootNotFound { levels: 1, .. })
        ));
    }

    #[test]
    fn test_search_root_walks_up() {
        let temp = TempDir::new().unwrap();
        let innovation = temp.path().join("packages/content/data/innovation");
        std::fs::create_dir_all(&innovation).unwrap();
        let web = temp.path().join("apps/web");
        std::fs::create_dir_all(&web).unwrap();

        let config = ContentConfig::with_search_root(&web);
        assert_eq!(config.collection_root(&INNOVATION).unwrap(), innovation);
    }
}
