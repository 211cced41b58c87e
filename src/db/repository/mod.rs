//! Repository trait for roster persistence.
//!
//! The roster is persisted as one whole document: there are no row-level
//! operations and no transactional guarantees beyond the unconditional
//! whole-roster overwrite. Record-level CRUD lives in the service layer
//! (`db::services`), which composes `load_roster` + `save_roster`.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::MasterShipRecord;
use async_trait::async_trait;

/// Repository trait for roster storage operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the persisted roster.
    ///
    /// Returns an empty roster when nothing has been persisted yet or when
    /// the persisted payload fails to parse. A parse failure is logged by the
    /// implementation, never surfaced to the caller.
    ///
    /// # Returns
    /// * `Ok(Vec<MasterShipRecord>)` - The roster, possibly empty
    /// * `Err(RepositoryError)` - If the backing store cannot be read
    async fn load_roster(&self) -> RepositoryResult<Vec<MasterShipRecord>>;

    /// Overwrite the entire persisted roster unconditionally.
    ///
    /// # Arguments
    /// * `roster` - The full roster to persist
    ///
    /// # Returns
    /// * `Ok(())` - The roster was persisted
    /// * `Err(RepositoryError)` - If the backing store cannot be written
    async fn save_roster(&self, roster: &[MasterShipRecord]) -> RepositoryResult<()>;

    /// Check that the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(bool)` - True if the store can be used
    /// * `Err(RepositoryError)` - If the check itself fails
    async fn health_check(&self) -> RepositoryResult<bool>;
}
