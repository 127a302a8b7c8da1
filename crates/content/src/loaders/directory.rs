//! Collection loader: one directory per entry, one JSON file per directory.

use std::collections::HashSet;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::ContentCatalog;
use crate::collections::Collection;
use crate::config::ContentConfig;
use crate::error::{ContentError, LoadResult};
use crate::loaders::{read_file, resolve_asset_paths};
use crate::model::{ContentEntry, order_value};

/// Extension of the structured-data file inside each entry directory.
pub const DATA_FILE_EXTENSION: &str = "json";

/// Display order of a loaded collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortStrategy {
    /// Ascending by the entry's `order` field. Entries without one go last;
    /// ties keep directory-name order.
    OrderField,
    /// Ascending by directory name (byte-wise).
    DirectoryName,
}

/// A relative asset referenced by an entry but absent from its directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingAsset {
    pub entry_id: String,
    /// Path as it appears in the loaded entry.
    pub public_path: String,
    /// Where the file was expected on disk.
    pub file: PathBuf,
}

/// Loader for a directory-per-entry collection.
///
/// # Directory Structure
///
/// ```text
/// root/
/// ├── energy-efficiency/
/// │   ├── service.json      <- exactly one .json file
/// │   └── bg.webm
/// └── renewable-energy/
///     └── service.json
/// ```
///
/// Loading is all-or-nothing: the first invalid entry aborts the load.
pub struct ContentDirectoryLoader<T> {
    collection: String,
    root: PathBuf,
    public_base: String,
    sort: SortStrategy,
    _entry: PhantomData<fn() -> T>,
}

impl<T: ContentEntry> ContentDirectoryLoader<T> {
    /// Creates a loader for an already located collection directory.
    ///
    /// # Arguments
    ///
    /// * `collection` - Name used in diagnostics (e.g. "services")
    /// * `root` - Directory holding one subdirectory per entry
    /// * `public_base` - URL prefix the web server maps to `root`
    /// * `sort` - Display order of the result
    pub fn new(
        collection: impl Into<String>,
        root: impl Into<PathBuf>,
        public_base: impl Into<String>,
        sort: SortStrategy,
    ) -> Self {
        Self {
            collection: collection.into(),
            root: root.into(),
            public_base: public_base.into(),
            sort,
            _entry: PhantomData,
        }
    }

    /// Creates a loader for a built-in collection rooted at `root`.
    pub fn for_collection(collection: &Collection, root: impl Into<PathBuf>) -> Self {
        Self::new(collection.name, root, collection.public_base, collection.sort)
    }

    /// Locates the collection directory per `config` and creates a loader for it.
    pub fn discover(collection: &Collection, config: &ContentConfig) -> LoadResult<Self> {
        let root = config.collection_root(collection)?;
        Ok(Self::for_collection(collection, root))
    }

    /// Returns the collection directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the collection name used in diagnostics.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Loads every entry of the collection.
    ///
    /// # Errors
    ///
    /// Fails without partial results if:
    /// - the collection directory cannot be read
    /// - an entry directory has zero or several `.json` files
    /// - a JSON file is malformed or does not match `T`
    pub fn load_all(&self) -> LoadResult<ContentCatalog<T>> {
        let directories = self.entry_directories()?;

        let mut entries = Vec::with_capacity(directories.len());
        for (name, path) in &directories {
            entries.push(self.load_entry(name, path)?);
        }

        if self.sort == SortStrategy::OrderField {
            // Stable: equal orders keep directory-name order
            entries.sort_by_key(|entry| (entry.order().is_none(), entry.order()));
        }

        self.warn_duplicate_slugs(&entries);

        tracing::info!(
            "Loaded {} {} entries from {}",
            entries.len(),
            self.collection,
            self.root.display()
        );

        Ok(ContentCatalog::new(self.root.clone(), entries))
    }

    /// Lists relative assets whose files do not exist in the entry directory.
    ///
    /// Only paths produced by rewriting (under `{public_base}/{id}/`) are
    /// checked; absolute paths are served from elsewhere.
    pub fn missing_assets(&self, catalog: &ContentCatalog<T>) -> Vec<MissingAsset> {
        let base = self.public_base.trim_end_matches('/');
        let mut missing = Vec::new();

        for entry in catalog.iter() {
            let prefix = format!("{}/{}/", base, entry.id());

            for public_path in entry.asset_paths() {
                let Some(rest) = public_path.strip_prefix(&prefix) else {
                    continue;
                };

                let file = self.root.join(entry.id()).join(rest);
                if !file.is_file() {
                    missing.push(MissingAsset {
                        entry_id: entry.id().to_string(),
                        public_path: public_path.to_string(),
                        file,
                    });
                }
            }
        }

        missing
    }

    /// Immediate subdirectories of the root, sorted by name.
    fn entry_directories(&self) -> LoadResult<Vec<(String, PathBuf)>> {
        let listing = fs::read_dir(&self.root).map_err(|e| ContentError::io(&self.root, e))?;

        let mut directories = Vec::new();
        for entry in listing {
            let entry = entry.map_err(|e| ContentError::io(&self.root, e))?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| ContentError::InvalidDirectoryName { path: path.clone() })?;

            directories.push((name, path));
        }

        directories.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(directories)
    }

    /// The single `.json` file of an entry directory.
    fn data_file(&self, entry: &str, dir: &Path) -> LoadResult<PathBuf> {
        let listing = fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))?;

        let mut files = Vec::new();
        for file in listing {
            let path = file.map_err(|e| ContentError::io(dir, e))?.path();
            if is_data_file(&path) {
                files.push(path);
            }
        }

        match files.len() {
            0 => Err(ContentError::MissingDataFile {
                collection: self.collection.clone(),
                entry: entry.to_string(),
            }),
            1 => Ok(files.remove(0)),
            _ => {
                let mut names: Vec<String> = files
                    .iter()
                    .filter_map(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .collect();
                names.sort();

                Err(ContentError::AmbiguousDataFile {
                    collection: self.collection.clone(),
                    entry: entry.to_string(),
                    files: names,
                })
            }
        }
    }

    fn load_entry(&self, entry: &str, dir: &Path) -> LoadResult<T> {
        let path = self.data_file(entry, dir)?;
        tracing::debug!("Loading {}/{} from {}", self.collection, entry, path.display());

        let raw = read_file(&path)?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.clone(),
            source,
        })?;

        let Value::Object(mut record) = value else {
            return Err(self.invalid(entry, "top-level JSON value must be an object"));
        };

        resolve_asset_paths(&mut record, &self.public_base, entry);

        // The directory name is the identifier
        if let Some(authored) = record.get("id").and_then(Value::as_str)
            && authored != entry
        {
            tracing::warn!(
                "{}/{}: authored id '{}' replaced by directory name",
                self.collection,
                entry,
                authored
            );
        }
        record.insert("id".to_string(), Value::String(entry.to_string()));

        if self.sort == SortStrategy::OrderField
            && let Some(order) = record.get("order")
            && order_value(order).is_none()
        {
            tracing::warn!(
                "{}/{}: order {} is not an integer, entry sorts last",
                self.collection,
                entry,
                order
            );
        }

        serde_json::from_value(Value::Object(record)).map_err(|e| self.invalid(entry, e))
    }

    fn warn_duplicate_slugs(&self, entries: &[T]) {
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.slug()) {
                tracing::warn!(
                    "{}: slug '{}' is used by more than one entry (second: {})",
                    self.collection,
                    entry.slug(),
                    entry.id()
                );
            }
        }
    }

    fn invalid(&self, entry: &str, message: impl ToString) -> ContentError {
        ContentError::InvalidEntry {
            collection: self.collection.clone(),
            entry: entry.to_string(),
            message: message.to_string(),
        }
    }
}

/// Regular file whose name ends in `.json`, including one named just `.json`.
fn is_data_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(DATA_FILE_EXTENSION))
            .is_some_and(|stem| stem.ends_with('.'))
}
