//! Data-driven site content and its loaders.
//!
//! Content lives on disk as one directory per entry:
//! ```text
//! packages/content/data/
//! ├── services/
//! │   └── energy-efficiency/
//! │       ├── service.json
//! │       └── bg.webm
//! └── innovation/
//!     └── urban-ai/
//!         ├── section-description.json
//!         └── poster.jpg
//! ```
//!
//! Each entry directory holds exactly one JSON file. Relative asset paths in
//! that file (`./bg.webm`) are rewritten to the public URL the web server
//! exposes for the same directory (`/content/services/energy-efficiency/bg.webm`).
//!
//! Collections are loaded eagerly, once per process, and are immutable
//! afterwards. See [`collections`] for the process-wide accessors.

pub mod catalog;
pub mod collections;
pub mod config;
pub mod error;
pub mod features;
pub mod loaders;
pub mod model;

pub use catalog::{ContentCatalog, ContentStore};
pub use collections::{
    Collection, DATA_SUBPATH, INNOVATION, SERVICES, innovation_by_id, innovation_by_slug,
    innovations, service_by_id, service_by_slug, services,
};
pub use config::ContentConfig;
pub use error::{ContentError, LoadResult};
pub use features::{Section, SiteFeatures};
pub use loaders::{
    ContentDirectoryLoader, MissingAsset, SortStrategy, find_content_root, resolve_asset_paths,
};
pub use model::{
    ContentEntry, GenericEntry, InnovationArea, InnovationImage, InnovationSubItem, Link,
    ServiceCategory, Stats, SubService, VideoSources,
};
