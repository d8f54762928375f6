//! Remote source seam consumed by the repository.

use async_trait::async_trait;

use crate::paging::Page;
use crate::remote::client::NewsApiClient;
use crate::remote::error::RemoteError;
use crate::remote::model::ArticleWire;

/// A paginated provider of wire-format articles.
///
/// The repository depends on this trait, never on the HTTP client,
/// so tests can substitute a scripted source.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Page<ArticleWire>, RemoteError>;
}

#[async_trait]
impl RemoteSource for NewsApiClient {
    async fn fetch_page(&self, page: u32) -> Result<Page<ArticleWire>, RemoteError> {
        let response = self.top_headlines(page).await?;
        Ok(Page::new(
            response.articles.unwrap_or_default(),
            response.total_results.unwrap_or(0),
            page,
        ))
    }
}
