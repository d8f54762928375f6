//! Fetch-with-fallback repository.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::CacheSource;
use crate::domain::{Article, NewsRepository, WireArticleMapper};
use crate::error::FetchError;
use crate::mapper::Mapper;
use crate::paging::Page;
use crate::remote::{ArticleWire, RemoteSource};

/// Repository that degrades gracefully: remote first, snapshot on any
/// remote failure, terminal failure only when both are unavailable.
///
/// The fallback is consulted strictly after the remote fails, never
/// proactively, and ignores the page index: callers paginating past
/// page 1 while offline receive the snapshot tagged with the page they
/// asked for. Known limitation, kept on purpose so offline behavior
/// stays predictable.
pub struct CachingNewsRepository {
    remote: Box<dyn RemoteSource>,
    cache: Box<dyn CacheSource>,
    mapper: WireArticleMapper,
    offline: bool,
}

impl CachingNewsRepository {
    pub fn new(remote: Box<dyn RemoteSource>, cache: Box<dyn CacheSource>) -> Self {
        Self {
            remote,
            cache,
            mapper: WireArticleMapper,
            offline: false,
        }
    }

    /// Skip the remote source entirely and serve the snapshot directly.
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    fn map_page(&self, wire: Page<ArticleWire>, page: u32) -> Page<Article> {
        Page::new(self.mapper.map_all(wire.items), wire.total, page)
    }
}

#[async_trait]
impl NewsRepository for CachingNewsRepository {
    async fn fetch_page(&self, page: u32) -> Result<Page<Article>, FetchError> {
        if !self.offline {
            match self.remote.fetch_page(page).await {
                Ok(wire) => {
                    debug!(page, items = wire.len(), total = wire.total, "remote fetch ok");
                    if let Err(err) = self.cache.store(&wire).await {
                        // Snapshot refresh is best-effort; a stale snapshot
                        // beats failing a successful fetch.
                        warn!(error = %err, "snapshot write failed");
                    }
                    return Ok(self.map_page(wire, page));
                }
                Err(err) => {
                    warn!(error = %err, page, "remote fetch failed, trying snapshot");
                }
            }
        }

        let cached = self.cache.fetch_cached().await.map_err(FetchError::Cache)?;
        debug!(items = cached.len(), total = cached.total, "serving snapshot");
        // The snapshot keeps its own total but is tagged with the page the
        // caller requested, even though the snapshot ignores pagination.
        Ok(self.map_page(cached, page))
    }
}
