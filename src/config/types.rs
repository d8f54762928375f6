use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the NewsAPI-compatible server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Two-letter country code for the headlines query.
    #[serde(default = "default_country")]
    pub country: String,
    /// Items per page (1..=100 per the API).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Snapshot cache settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Override for the snapshot file location. Defaults to the platform
    /// cache directory when unset.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            country: default_country(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Config {
    /// Resolve the API key from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or blank; credentials
    /// never live in the config file itself.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn default_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_api_key_env() -> String {
    "NEWSAPI_KEY".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}
