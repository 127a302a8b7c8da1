//! Loaded collections and their process-wide cache.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::collections::Collection;
use crate::config::ContentConfig;
use crate::error::{ContentError, LoadResult};
use crate::loaders::ContentDirectoryLoader;
use crate::model::ContentEntry;

/// Immutable, display-ordered result of loading a collection.
#[derive(Clone, Debug)]
pub struct ContentCatalog<T> {
    root: PathBuf,
    entries: Vec<T>,
}

impl<T: ContentEntry> ContentCatalog<T> {
    pub(crate) fn new(root: PathBuf, entries: Vec<T>) -> Self {
        Self { root, entries }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directory the catalog was loaded from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entry whose `id` equals `id` exactly.
    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// First entry whose `slug` equals `slug` exactly.
    pub fn get_by_slug(&self, slug: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.slug() == slug)
    }
}

impl<'a, T: ContentEntry> IntoIterator for &'a ContentCatalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Lazily loaded collection, cached for the lifetime of the store.
///
/// The first [`load_all`](Self::load_all) scans the filesystem; later calls
/// return the same catalog. [`reload`](Self::reload) is the only way to
/// rescan and takes the write lock for the whole scan.
pub struct ContentStore<T> {
    collection: Collection,
    config: ContentConfig,
    cached: RwLock<Option<Arc<ContentCatalog<T>>>>,
}

impl<T: ContentEntry> ContentStore<T> {
    pub fn new(collection: Collection, config: ContentConfig) -> Self {
        Self {
            collection,
            config,
            cached: RwLock::new(None),
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns the cached catalog, loading it on first access.
    ///
    /// A failed load leaves the store empty; the error is returned to the caller.
    pub fn load_all(&self) -> LoadResult<Arc<ContentCatalog<T>>> {
        {
            let cached = self.cached.read().map_err(|_| ContentError::LockPoisoned)?;
            if let Some(catalog) = cached.as_ref() {
                return Ok(Arc::clone(catalog));
            }
        }

        let mut cached = self.cached.write().map_err(|_| ContentError::LockPoisoned)?;
        // Another caller may have loaded while we waited for the write lock
        if let Some(catalog) = cached.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.scan()?);
        *cached = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Rescans the collection and replaces the cached catalog.
    ///
    /// On failure the previously cached catalog (if any) stays in place.
    pub fn reload(&self) -> LoadResult<Arc<ContentCatalog<T>>> {
        let mut cached = self.cached.write().map_err(|_| ContentError::LockPoisoned)?;

        let catalog = Arc::new(self.scan()?);
        *cached = Some(Arc::clone(&catalog));

        tracing::info!("Reloaded {} ({} entries)", self.collection.name, catalog.len());
        Ok(catalog)
    }

    pub fn get_by_id(&self, id: &str) -> LoadResult<Option<T>> {
        Ok(self.load_all()?.get_by_id(id).cloned())
    }

    pub fn get_by_slug(&self, slug: &str) -> LoadResult<Option<T>> {
        Ok(self.load_all()?.get_by_slug(slug).cloned())
    }

    fn scan(&self) -> LoadResult<ContentCatalog<T>> {
        ContentDirectoryLoader::<T>::discover(&self.collection, &self.config)?.load_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::SortStrategy;
    use crate::model::GenericEntry;
    use tempfile::TempDir;

    const NOTES: Collection = Collection {
        name: "notes",
        public_base: "/content/notes",
        sort: SortStrategy::DirectoryName,
    };

    fn store(data_dir: &Path) -> ContentStore<GenericEntry> {
        ContentStore::new(NOTES, ContentConfig::with_data_dir(data_dir))
    }

    fn write_note(data_dir: &Path, name: &str, body: &str) {
        let dir = data_dir.join("notes").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("note.json"), body).unwrap();
    }

    #[test]
    fn test_load_all_is_cached() {
        let temp = TempDir::new().unwrap();
        write_note(temp.path(), "a", r#"{"slug": "first"}"#);
        let store = store(temp.path());

        let first = store.load_all().unwrap();
        write_note(temp.path(), "b", r#"{"slug": "second"}"#);
        let second = store.load_all().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_reload_picks_up_new_entries() {
        let temp = TempDir::new().unwrap();
        write_note(temp.path(), "a", r#"{"slug": "first"}"#);
        let store = store(temp.path());
        assert_eq!(store.load_all().unwrap().len(), 1);

        write_note(temp.path(), "b", r#"{"slug": "second"}"#);
        let reloaded = store.reload().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(Arc::ptr_eq(&reloaded, &store.load_all().unwrap()));
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let temp = TempDir::new().unwrap();
        write_note(temp.path(), "a", r#"{"slug": "first"}"#);
        let store = store(temp.path());
        let before = store.load_all().unwrap();

        write_note(temp.path(), "b", r#"{"slug": "#);
        assert!(matches!(store.reload(), Err(ContentError::Parse { .. })));

        assert!(Arc::ptr_eq(&before, &store.load_all().unwrap()));
    }

    #[test]
    fn test_lookups_return_owned_entries() {
        let temp = TempDir::new().unwrap();
        write_note(temp.path(), "a", r#"{"slug": "first"}"#);
        let store = store(temp.path());

        let by_slug = store.get_by_slug("first").unwrap().unwrap();
        assert_eq!(by_slug.id(), "a");
        assert!(store.get_by_id("first").unwrap().is_none());
        assert!(store.get_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn test_failed_first_load_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let store = store(temp.path());

        assert!(matches!(store.load_all(), Err(ContentError::RootNotFound { .. })));

        write_note(temp.path(), "a", "{}");
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
