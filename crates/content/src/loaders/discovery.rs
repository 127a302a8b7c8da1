//! Locating collection directories.

use std::path::{Path, PathBuf};

use crate::error::{ContentError, LoadResult};

/// Number of directories examined by [`find_content_root`] unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: usize = 5;

/// Finds `relative` under `start` or one of its ancestors.
///
/// Examines `start/relative`, then `start/../relative`, and so on, for at most
/// `max_levels` directories. The first candidate that is a directory wins.
///
/// ```text
/// apps/web/            <- start (cwd of the web app)
/// apps/                <- 1 level up
/// ./                   <- 2 levels up: packages/content/data/services found here
/// ```
pub fn find_content_root(start: &Path, relative: &Path, max_levels: usize) -> LoadResult<PathBuf> {
    let start = std::path::absolute(start).map_err(|e| ContentError::io(start, e))?;
    let mut dir = Some(start.as_path());

    for level in 0..max_levels {
        let Some(current) = dir else {
            break;
        };

        let candidate = current.join(relative);
        if candidate.is_dir() {
            tracing::debug!(
                "found {} after {} level(s): {}",
                relative.display(),
                level,
                candidate.display()
            );
            return Ok(candidate);
        }

        dir = current.parent();
    }

    Err(ContentError::RootNotFound {
        relative: relative.to_path_buf(),
        start,
        levels: max_levels,
    })
}
