//! Repository seam consumed by the presentation layer.

use async_trait::async_trait;

use crate::domain::entity::Article;
use crate::error::FetchError;
use crate::paging::Page;

/// Paginated access to news articles.
///
/// Exactly one terminal outcome per call: a mapped page or a failure,
/// never both.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Fetch the given page (`page >= 1`).
    async fn fetch_page(&self, page: u32) -> Result<Page<Article>, FetchError>;
}
