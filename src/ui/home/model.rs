//! Display-ready projection of the article entity.

use crate::domain::Article;
use crate::mapper::Mapper;

/// Flattened article for rendering: every field pre-formatted as a
/// string, source name surfaced at top level for the title bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleUiModel {
    pub source_name: String,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub published_at: String,
    pub content: String,
}

/// Maps domain articles into UI models. Total: never drops a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleUiMapper;

impl Mapper<Article, ArticleUiModel> for ArticleUiMapper {
    fn map(&self, article: Article) -> Option<ArticleUiModel> {
        Some(ArticleUiModel {
            source_name: article.source.name.unwrap_or_default(),
            author: article.author.unwrap_or_default(),
            title: article.title.unwrap_or_default(),
            description: article.description.unwrap_or_default(),
            url: article.url,
            image_url: article.image_url.unwrap_or_default(),
            published_at: article.published_at.unwrap_or_default(),
            content: article.content.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArticleSource;

    #[test]
    fn mapping_is_total() {
        let article = Article {
            source: ArticleSource { id: None, name: None },
            author: None,
            title: None,
            description: None,
            url: "https://example.com/a".to_string(),
            image_url: None,
            published_at: None,
            content: None,
        };

        let model = ArticleUiMapper.map(article).expect("ui mapping never drops");
        assert_eq!(model.url, "https://example.com/a");
        assert_eq!(model.source_name, "");
    }
}
