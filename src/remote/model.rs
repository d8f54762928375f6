//! Wire-format models for the NewsAPI `top-headlines` endpoint.
//!
//! Every field is optional on the wire; required-field validation happens
//! in the domain mapper, not here.

use serde::{Deserialize, Serialize};

/// Response envelope returned by the headlines endpoint.
///
/// On failure the API still answers with a JSON body where `status` is
/// `"error"` and `code`/`message` describe the problem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    pub status: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u32>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub articles: Option<Vec<ArticleWire>>,
}

impl HeadlinesResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

/// A single article as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleWire {
    pub source: Option<SourceWire>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceWire {
    pub id: Option<String>,
    pub name: Option<String>,
}
