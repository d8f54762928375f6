//! File-backed snapshot cache.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::cache::CacheSource;
use crate::paging::Page;
use crate::remote::ArticleWire;

/// Errors from the snapshot cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("no cached snapshot at '{path}'")]
    Missing { path: PathBuf },

    #[error("failed to read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write snapshot '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode snapshot: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Stores the most recent successful page as a JSON file.
///
/// The snapshot is tiny and read rarely, so plain blocking I/O is fine
/// here; callers await it from the repository's sequential chain.
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default snapshot location under the platform cache directory.
    pub fn default_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("newsdeck").join("headlines.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CacheSource for SnapshotCache {
    async fn fetch_cached(&self) -> Result<Page<ArticleWire>, CacheError> {
        if !self.path.exists() {
            return Err(CacheError::Missing {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| CacheError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| CacheError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    async fn store(&self, page: &Page<ArticleWire>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CacheError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(page)
            .map_err(|e| CacheError::Encode { source: e })?;
        fs::write(&self.path, json).map_err(|e| CacheError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
