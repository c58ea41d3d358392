//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// Every section and field defaults, so a partial config.toml merges over
/// the defaults instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb configuration.
    pub omdb: OmdbConfig,
    /// Website generation configuration.
    pub website: WebsiteConfig,
}

/// OMDb configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Website generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    /// Path to the HTML template containing the movie grid marker.
    pub template_path: PathBuf,
    /// Path the generated page is written to.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb: OmdbConfig::default(),
            website: WebsiteConfig::default(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").ok(),
            timeout: 5,
        }
    }
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("_static").join("index_template.html"),
            output_path: PathBuf::from("index.html"),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_shelf")
}

/// Load configuration from file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_merges_over_defaults() {
        let config: Config = toml::from_str("[omdb]\napi_key = \"abc123\"\n").unwrap();
        assert_eq!(config.omdb.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.omdb.timeout, OmdbConfig::default().timeout);
        assert_eq!(
            config.website.output_path,
            WebsiteConfig::default().output_path
        );
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.omdb.timeout, OmdbConfig::default().timeout);
        assert_eq!(
            config.website.template_path,
            WebsiteConfig::default().template_path
        );
    }
}
