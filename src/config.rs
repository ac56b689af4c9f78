//! Configuration persistence for the LeitnerLang client.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Client configuration that persists between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Account address on the ledger network.
    #[serde(default)]
    pub account: Option<String>,

    /// Base URL of the LeitnerLang gateway.
    #[serde(default = "default_gateway")]
    pub gateway: String,

    /// Seconds to wait for an answer submission before giving up on it.
    #[serde(default = "default_review_timeout_secs")]
    pub review_timeout_secs: u64,

    /// The currently selected theme name.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_gateway() -> String {
    "http://localhost:8787".to_string()
}

fn default_review_timeout_secs() -> u64 {
    30
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: None,
            gateway: default_gateway(),
            review_timeout_secs: default_review_timeout_secs(),
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("leitnerlang")
            .join("config.toml")
    }

    /// Load config from disk, returning default if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}
