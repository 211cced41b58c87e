//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
#[cfg(feature = "file-repo")]
use super::repositories::{FileConfig, FileRepository};
use super::repositories::LocalRepository;
use super::repository::{RepositoryError, RepositoryResult, RosterRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// JSON-document store on disk
    File,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("file", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "disk" => Ok(Self::File),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to File when the file backend is
    /// compiled in, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if cfg!(feature = "file-repo") {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// This factory provides a centralized way to create repository instances
/// with proper initialization and configuration.
///
/// # Example
/// ```ignore
/// use fms_rust::db::{RepositoryFactory, RepositoryType};
///
/// let local_repo = RepositoryFactory::create_local();
/// let file_repo = RepositoryFactory::create(RepositoryType::File, None)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `file_config` - Optional store configuration (File only; defaults to env)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn RosterRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        file_config: Option<FileConfigArg>,
    ) -> RepositoryResult<Arc<dyn RosterRepository>> {
        match repo_type {
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    let config = file_config.unwrap_or_else(FileConfig::from_env);
                    Ok(Self::create_file(config))
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    let _ = file_config;
                    Err(RepositoryError::configuration(
                        "File repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a file-backed repository.
    #[cfg(feature = "file-repo")]
    pub fn create_file(config: FileConfig) -> Arc<dyn RosterRepository> {
        Arc::new(FileRepository::new(config))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn RosterRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` (and `FLEET_STORE_PATH` for the file backend)
    /// to determine which repository to create.
    pub fn from_env() -> RepositoryResult<Arc<dyn RosterRepository>> {
        Self::create(RepositoryType::from_env(), None)
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn RosterRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations and creates
    /// the appropriate repository instance.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn RosterRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn RosterRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    let file_config = config.to_file_config();
                    Ok(Self::create_file(file_config))
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "File repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}

#[cfg(feature = "file-repo")]
type FileConfigArg = FileConfig;
#[cfg(not(feature = "file-repo"))]
type FileConfigArg = ();
