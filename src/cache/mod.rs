//! Local fallback source: a single JSON snapshot of the last good fetch.

mod snapshot;

use async_trait::async_trait;

use crate::paging::Page;
use crate::remote::ArticleWire;

pub use snapshot::{CacheError, SnapshotCache};

/// Secondary data provider consulted only after the remote source fails.
///
/// The cache holds exactly one snapshot; `fetch_cached` takes no page
/// argument and always returns that snapshot.
#[async_trait]
pub trait CacheSource: Send + Sync {
    async fn fetch_cached(&self) -> Result<Page<ArticleWire>, CacheError>;

    /// Replace the snapshot with a freshly fetched page.
    async fn store(&self, page: &Page<ArticleWire>) -> Result<(), CacheError>;
}
