//! Unified path management for shopfront files.
//!
//! All shopfront configuration and persisted state live under the
//! platform's standard directories:
//!
//! ```text
//! ~/.config/shopfront/           # Config directory
//! └── config.toml                # Application configuration
//!
//! ~/.local/share/shopfront/      # Data directory
//! └── state/                     # Durable cart state slots
//!     ├── cart.json
//!     └── quantities.json
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for shopfront.
pub struct ShopfrontPaths;

impl ShopfrontPaths {
    /// Returns the shopfront configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("shopfront"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the shopfront data directory.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("shopfront"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the durable cart state slots.
    pub fn state_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("state"))
    }
}
