//! Content loaders for reading entry directories from disk.
//!
//! - [`discovery`]: locate a collection directory by walking up from a start path
//! - [`assets`]: rewrite author-relative asset paths into public URLs
//! - [`directory`]: scan a collection, parse every entry, sort the result

pub mod assets;
pub mod directory;
pub mod discovery;

pub use assets::{RELATIVE_MARKER, resolve_asset_paths};
pub use directory::{ContentDirectoryLoader, DATA_FILE_EXTENSION, MissingAsset, SortStrategy};
pub use discovery::{DEFAULT_SEARCH_DEPTH, find_content_root};

use std::path::Path;

use crate::error::{ContentError, LoadResult};

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))
}
