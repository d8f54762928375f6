//! Application configuration: TOML file under the platform config
//! directory, credentials resolved from the environment.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CacheConfig, Config};
