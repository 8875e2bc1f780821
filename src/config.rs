//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local runs.

use std::env;
use std::path::PathBuf;

/// Production endpoint of the Toecan bike API.
pub const DEFAULT_BASE_URL: &str = "https://api.external.bike.toecan.tech";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value sent in the `token` header
    pub api_key: String,
    /// API root, without trailing slash
    pub base_url: String,
    /// Where to write the trip report, if anywhere
    pub csv_path: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_key: "test_api_key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            csv_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_key: env::var("TOECAN_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("TOECAN_API_KEY"))?,
            base_url: env::var("TOECAN_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            csv_path: env::var("TOECAN_CSV_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
