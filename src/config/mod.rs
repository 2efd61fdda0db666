//! Configuration management.
//!
//! Configuration is layered: compiled-in defaults, an optional TOML file,
//! then environment variables with the `PUBTATOR_HIGHLIGHT` prefix.
//!
//! # Configuration File Format
//!
//! ```toml
//! [api]
//! search_url = "https://www.ncbi.nlm.nih.gov/research/pubtator3-api/search/"
//! export_url = "https://www.ncbi.nlm.nih.gov/research/pubtator3-api/publications/export/biocjson"
//! timeout_secs = 30
//! connect_timeout_secs = 10
//!
//! [search]
//! max_results = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Upstream PubTator3 API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint (keywords -> PMIDs)
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Export endpoint (PMIDs -> BioC JSON documents)
    #[serde(default = "default_export_url")]
    pub export_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            export_url: default_export_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_search_url() -> String {
    "https://www.ncbi.nlm.nih.gov/research/pubtator3-api/search/".to_string()
}

fn default_export_url() -> String {
    "https://www.ncbi.nlm.nih.gov/research/pubtator3-api/publications/export/biocjson".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of document identifiers requested from the search call
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    10
}

/// Load configuration from a file, with environment variable overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PUBTATOR_HIGHLIGHT").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Find a configuration file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("pubtator-highlight.toml"),
        dirs::config_dir()
            .map(|d| d.join("pubtator-highlight").join("config.toml"))
            .unwrap_or_default(),
    ];

    candidates.into_iter().find(|p| p.is_file())
}

/// Get the default configuration
pub fn get_config() -> Config {
    Config::default()
}
