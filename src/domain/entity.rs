//! Canonical domain representation of a news article.

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A news article.
///
/// `url` is the stable identifier and list key; it is the only required
/// field. Wire records without one never become an `Article`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
}
