//! Data layer: the concrete repository wiring remote and cache together.

mod repository;

pub use repository::CachingNewsRepository;
