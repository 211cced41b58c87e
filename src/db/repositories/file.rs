//! File-backed roster repository.
//!
//! The roster is stored as a single JSON document at a fixed path, the same
//! whole-document-under-one-key model the dashboard has always used. A
//! missing file means an empty roster; a malformed file is logged at warn
//! level and also treated as empty, so a corrupted store never surfaces as
//! an error state.

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, RosterRepository};
use crate::models::{self, MasterShipRecord};
use async_trait::async_trait;
use log::warn;
use std::env;
use std::path::{Path, PathBuf};

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "ship_master_v1.json";

/// Configuration for the file-backed repository.
#[derive(Debug, Clone)]
pub struct FileConfig {
    /// Path of the roster JSON document.
    pub path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the store path from `FLEET_STORE_PATH`, falling back to
    /// [`DEFAULT_STORE_PATH`].
    pub fn from_env() -> Self {
        let path = env::var("FLEET_STORE_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        Self::new(path)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

/// File-backed implementation of [`RosterRepository`].
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Create a repository over the configured store path.
    pub fn new(config: FileConfig) -> Self {
        Self { path: config.path }
    }

    /// The store path this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RosterRepository for FileRepository {
    async fn load_roster(&self) -> RepositoryResult<Vec<MasterShipRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            RepositoryError::storage_with_context(
                format!("Failed to read roster store: {}", e),
                ErrorContext::new("load_roster")
                    .with_entity("roster")
                    .with_details(self.path.display().to_string()),
            )
        })?;

        match models::parse_roster_json(&json) {
            Ok(roster) => Ok(roster),
            Err(e) => {
                // Malformed payload is recoverable: start from an empty roster.
                warn!(
                    "Roster store {} failed to parse, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_roster(&self, roster: &[MasterShipRecord]) -> RepositoryResult<()> {
        let json = models::roster_to_json(roster)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RepositoryError::storage_with_context(
                        format!("Failed to create store directory: {}", e),
                        ErrorContext::new("save_roster").with_details(parent.display().to_string()),
                    )
                })?;
            }
        }

        std::fs::write(&self.path, json).map_err(|e| {
            RepositoryError::storage_with_context(
                format!("Failed to write roster store: {}", e),
                ErrorContext::new("save_roster")
                    .with_entity("roster")
                    .with_details(self.path.display().to_string()),
            )
        })
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        // The store is healthy when the file (or the directory it would be
        // created in) is accessible.
        if self.path.exists() {
            return Ok(true);
        }
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(parent.exists())
    }
}
