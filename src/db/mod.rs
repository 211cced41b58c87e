//! Database module for roster storage.
//!
//! This module provides abstractions for roster persistence via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, refresh pipeline)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Record-level CRUD over whole-roster persistence       │
//! │  - Monotonic id assignment                               │
//! │  - Seed roster on first run                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │   File Repository        Local Repository     │
//!     │   (JSON document)          (in-memory)        │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use fms_rust::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env()?;
//!     let roster = services::load_roster(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

// Feature flag priority: file > local
// When multiple features are enabled (e.g., --all-features), file takes precedence.
#[cfg(not(any(feature = "file-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    create_ship, delete_ship, get_ship, health_check, load_roster, save_roster,
    seed_roster_if_empty, update_ship,
};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
#[cfg(feature = "file-repo")]
pub use repositories::{FileConfig, FileRepository};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, RosterRepository};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn RosterRepository>> = OnceLock::new();

// Priority: file > local (when --all-features is used)
#[cfg(feature = "file-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn RosterRepository>> {
    Ok(RepositoryFactory::create_file(FileConfig::from_env()))
}

#[cfg(all(feature = "local-repo", not(feature = "file-repo")))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn RosterRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn RosterRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
