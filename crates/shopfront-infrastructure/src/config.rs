//! Application configuration.
//!
//! Loaded from `<config_dir>/shopfront/config.toml`. A missing file means
//! defaults; a file that exists but cannot be read or parsed is an error,
//! surfaced at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shopfront_core::error::{Result, ShopfrontError};

use crate::paths::ShopfrontPaths;

fn default_currency() -> String {
    "₹".to_string()
}

/// Shopfront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopfrontConfig {
    /// External order submission endpoint. `None` means orders are
    /// confirmed locally but never dispatched.
    pub order_endpoint: Option<String>,
    /// Currency symbol used in summaries and cart rendering.
    pub currency: String,
}

impl Default for ShopfrontConfig {
    fn default() -> Self {
        Self {
            order_endpoint: None,
            currency: default_currency(),
        }
    }
}

impl ShopfrontConfig {
    /// Loads the configuration from the default config file path.
    pub fn load() -> Result<Self> {
        let path = ShopfrontPaths::config_file()
            .map_err(|e| ShopfrontError::config(e.to_string()))?;
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ShopfrontError::config(format!("Failed to read config file at {:?}: {}", path, e))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content)
            .map_err(|e| ShopfrontError::serialization("TOML", e.to_string()))
    }
}
