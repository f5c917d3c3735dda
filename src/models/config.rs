//! Configuration model.
//!
//! Values are layered: built-in defaults, then an optional `config.toml`
//! under the user config directory, then `MEDIA_LIBRARIAN_*` environment
//! variables. Command line flags override all of these.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_ENDPOINT: &str = "https://api.dify.ai/v1/workflows/run";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workflow run endpoint of the suggestion service.
    pub endpoint: String,
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Default source directory.
    pub source_path: Option<PathBuf>,
    /// Default target directory.
    pub target_path: Option<PathBuf>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Display name sent as the request's `user` field.
    pub user_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            source_path: None,
            target_path: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_name: whoami::username(),
        }
    }
}

impl Config {
    /// Apply `MEDIA_LIBRARIAN_*` environment overrides to this configuration.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("MEDIA_LIBRARIAN_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(key) = std::env::var("MEDIA_LIBRARIAN_API_KEY") {
            self.api_key = key;
        }
        if let Ok(path) = std::env::var("MEDIA_LIBRARIAN_SOURCE_PATH") {
            if !path.is_empty() {
                self.source_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(path) = std::env::var("MEDIA_LIBRARIAN_TARGET_PATH") {
            if !path.is_empty() {
                self.target_path = Some(PathBuf::from(path));
            }
        }
        if let Some(timeout) = std::env::var("MEDIA_LIBRARIAN_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = timeout;
        }
        if let Ok(user) = std::env::var("MEDIA_LIBRARIAN_USER_NAME") {
            self.user_name = user;
        }
    }

    /// Get the source path, failing if it is not configured.
    pub fn source_path(&self) -> crate::Result<PathBuf> {
        self.source_path.clone().ok_or(crate::Error::SourcePathNotSet)
    }

    /// Get the target path, failing if it is not configured.
    pub fn target_path(&self) -> crate::Result<PathBuf> {
        self.target_path.clone().ok_or(crate::Error::TargetPathNotSet)
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_librarian")
}

/// Load configuration from file and environment.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    let mut config = Config::default();
    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed {}: {}", config_path.display(), e)
                }
            }
        }
    }

    config.apply_env();
    config
}
