//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
#[cfg(feature = "file-repo")]
use super::repositories::FileConfig;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// File store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "ship_master_v1.json".to_string()
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to FileConfig for the file backend.
    #[cfg(feature = "file-repo")]
    pub fn to_file_config(&self) -> FileConfig {
        FileConfig::new(&self.file.path)
    }
}
