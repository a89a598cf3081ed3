//! RAG Configuration - data document location and retrieval limits
//!
//! Defaults apply when no config file is present, so the shim runs with
//! zero setup as long as the verification document sits at the default path.

use crate::rag::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Path of the verification document when nothing else is configured
pub const DEFAULT_DATA_PATH: &str = "data/verification_data.json";

/// Environment variable pointing at a TOML config file
pub const CONFIG_PATH_ENV: &str = "RAG_CONFIG";

/// Environment variable overriding the verification document path
pub const DATA_PATH_ENV: &str = "RAG_DATA_PATH";

/// Environment variable overriding the number of injected snippets
pub const TOP_K_ENV: &str = "RAG_TOP_K";

/// Config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "rag_config.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config validation failed: {0}")]
    Invalid(String),
}

/// Root configuration.
///
/// Load with `RagConfig::load()` which searches:
/// 1. `$RAG_CONFIG` env var
/// 2. `./rag_config.toml`
/// 3. Built-in defaults
///
/// then applies `$RAG_DATA_PATH` and `$RAG_TOP_K` on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// JSON array of verification entries
    pub data_path: PathBuf,
    /// Snippets injected per query
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl RagConfig {
    /// Load configuration using the standard search order, then apply
    /// environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_base();
        config.apply_overrides(
            std::env::var(DATA_PATH_ENV).ok(),
            std::env::var(TOP_K_ENV).ok(),
        );
        config
    }

    fn load_base() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded RAG config from RAG_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from RAG_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "RAG_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./rag_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded RAG config from ./rag_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./rag_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides. Blank values are ignored, as is a
    /// `top_k` that is not a positive integer.
    pub fn apply_overrides(&mut self, data_path: Option<String>, top_k: Option<String>) {
        if let Some(path) = data_path.filter(|p| !p.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(raw) = top_k {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.top_k = n,
                _ => warn!(value = %raw, "Ignoring invalid RAG_TOP_K"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_path must not be empty".to_string()));
        }
        Ok(())
    }
}
