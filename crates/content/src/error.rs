//! Error types raised while loading content.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the content loaders.
///
/// Every variant is fatal for the load that produced it: a single bad entry
/// aborts the whole collection.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(
        "could not find {} searched from {} up {levels} levels",
        .relative.display(),
        .start.display()
    )]
    RootNotFound {
        relative: PathBuf,
        start: PathBuf,
        levels: usize,
    },

    #[error(
        "no JSON file found in {collection}/{entry}/; each entry folder must contain exactly one .json file"
    )]
    MissingDataFile { collection: String, entry: String },

    #[error(
        "{collection}/{entry}/ contains {} JSON files ({}); each entry folder must contain exactly one",
        .files.len(),
        .files.join(", ")
    )]
    AmbiguousDataFile {
        collection: String,
        entry: String,
        files: Vec<String>,
    },

    #[error("entry directory name is not valid UTF-8: {}", .path.display())]
    InvalidDirectoryName { path: PathBuf },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid entry {collection}/{entry}: {message}")]
    InvalidEntry {
        collection: String,
        entry: String,
        message: String,
    },

    #[error("malformed features file {}: {source}", .path.display())]
    InvalidFeatures {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("content store lock was poisoned")]
    LockPoisoned,
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors caused by where content lives rather than what it says.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::RootNotFound { .. })
    }
}

pub type LoadResult<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_files() {
        let err = ContentError::AmbiguousDataFile {
            collection: "innovation".into(),
            entry: "urban-ai".into(),
            files: vec!["a.json".into(), "b.json".into()],
        };
        let message = err.to_string();
        assert!(message.contains("innovation/urban-ai/"));
        assert!(message.contains("a.json, b.json"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_root_not_found_is_configuration() {
        let err = ContentError::RootNotFound {
            relative: PathBuf::from("packages/content/data/services"),
            start: PathBuf::from("/srv/site"),
            levels: 5,
        };
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "could not find packages/content/data/services searched from /srv/site up 5 levels"
        );
    }
}
