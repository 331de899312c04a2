//! Configuration types for the import tool.
//!
//! The API endpoint is an explicit configuration value handed to the
//! client at construction, loaded from an optional TOML file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the Nowledge Mem API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size used when listing existing threads.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Timeout in seconds applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:14242".to_string()
}

const fn default_page_size() -> usize {
    100
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// API endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chatwise-import")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:14242");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[api]\nbase_url = \"http://localhost:9000\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.page_size, 100);
    }
}
