//! Wire format to domain entity mapping.

use crate::domain::entity::{Article, ArticleSource};
use crate::mapper::Mapper;
use crate::remote::ArticleWire;

/// Maps wire articles into domain articles.
///
/// Records whose `url` is absent or blank fail required-field validation
/// and are dropped from sequences; this is a validation drop, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireArticleMapper;

impl Mapper<ArticleWire, Article> for WireArticleMapper {
    fn map(&self, wire: ArticleWire) -> Option<Article> {
        let url = wire.url.filter(|u| !u.trim().is_empty())?;
        let source = wire.source.unwrap_or_default();

        Some(Article {
            source: ArticleSource {
                id: source.id,
                name: source.name,
            },
            author: wire.author,
            title: wire.title,
            description: wire.description,
            url,
            image_url: wire.url_to_image,
            published_at: wire.published_at,
            content: wire.content,
        })
    }
}
