//! Remote news source: wire models, HTTP client, and the source seam.

mod client;
mod error;
mod model;
mod source;

pub use client::NewsApiClient;
pub use error::RemoteError;
pub use model::{ArticleWire, HeadlinesResponse, SourceWire};
pub use source::RemoteSource;
