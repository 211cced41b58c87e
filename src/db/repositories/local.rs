//! In-memory roster repository for unit testing and local development.

use crate::db::repository::{RepositoryResult, RosterRepository};
use crate::models::MasterShipRecord;
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-memory implementation of [`RosterRepository`].
///
/// Holds the roster behind an `RwLock`; nothing survives the process.
#[derive(Default)]
pub struct LocalRepository {
    roster: RwLock<Vec<MasterShipRecord>>,
}

impl LocalRepository {
    /// Create a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with a roster.
    pub fn with_roster(roster: Vec<MasterShipRecord>) -> Self {
        Self {
            roster: RwLock::new(roster),
        }
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn load_roster(&self) -> RepositoryResult<Vec<MasterShipRecord>> {
        Ok(self.roster.read().clone())
    }

    async fn save_roster(&self, roster: &[MasterShipRecord]) -> RepositoryResult<()> {
        *self.roster.write() = roster.to_vec();
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
