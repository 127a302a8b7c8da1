//! Built-in collections and their process-wide catalogs.
//!
//! Each collection is loaded once, on first access, using
//! [`ContentConfig::from_env`]. Presentation code only reads the result.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::catalog::{ContentCatalog, ContentStore};
use crate::config::ContentConfig;
use crate::error::LoadResult;
use crate::loaders::SortStrategy;
use crate::model::{InnovationArea, ServiceCategory};

/// Location of the content data directory relative to the repository root.
pub const DATA_SUBPATH: &str = "packages/content/data";

/// A directory-per-entry collection and how it is served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    /// Directory name under the data directory.
    pub name: &'static str,
    /// URL prefix mapped to the collection directory.
    pub public_base: &'static str,
    pub sort: SortStrategy,
}

impl Collection {
    /// Path of the collection directory relative to a search root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(DATA_SUBPATH).join(self.name)
    }
}

/// Service categories, ordered by directory name.
pub const SERVICES: Collection = Collection {
    name: "services",
    public_base: "/content/services",
    sort: SortStrategy::DirectoryName,
};

/// Innovation areas, ordered by their `order` field.
pub const INNOVATION: Collection = Collection {
    name: "innovation",
    public_base: "/content/innovation",
    sort: SortStrategy::OrderField,
};

static SERVICE_STORE: OnceLock<ContentStore<ServiceCategory>> = OnceLock::new();
static INNOVATION_STORE: OnceLock<ContentStore<InnovationArea>> = OnceLock::new();

fn service_store() -> &'static ContentStore<ServiceCategory> {
    SERVICE_STORE.get_or_init(|| ContentStore::new(SERVICES, ContentConfig::from_env()))
}

fn innovation_store() -> &'static ContentStore<InnovationArea> {
    INNOVATION_STORE.get_or_init(|| ContentStore::new(INNOVATION, ContentConfig::from_env()))
}

/// All service categories.
pub fn services() -> LoadResult<Arc<ContentCatalog<ServiceCategory>>> {
    service_store().load_all()
}

pub fn service_by_id(id: &str) -> LoadResult<Option<ServiceCategory>> {
    service_store().get_by_id(id)
}

pub fn service_by_slug(slug: &str) -> LoadResult<Option<ServiceCategory>> {
    service_store().get_by_slug(slug)
}

/// All innovation areas, sorted by `order`.
pub fn innovations() -> LoadResult<Arc<ContentCatalog<InnovationArea>>> {
    innovation_store().load_all()
}

pub fn innovation_by_id(id: &str) -> LoadResult<Option<InnovationArea>> {
    innovation_store().get_by_id(id)
}

pub fn innovation_by_slug(slug: &str) -> LoadResult<Option<InnovationArea>> {
    innovation_store().get_by_slug(slug)
}
