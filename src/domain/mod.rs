//! Domain model: the article entity, its mapping from the wire format,
//! and the repository contract.

mod entity;
mod mapper;
mod repository;

pub use entity::{Article, ArticleSource};
pub use mapper::WireArticleMapper;
pub use repository::NewsRepository;
