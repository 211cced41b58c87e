//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::RosterRepository;
use crate::services::telemetry::TelemetryFeed;
use crate::services::SnapshotStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for roster persistence
    pub repository: Arc<dyn RosterRepository>,
    /// Telemetry source (synthetic until a live feed is wired in)
    pub feed: Arc<dyn TelemetryFeed>,
    /// Latest snapshot collection shared with the periodic refresh task
    pub snapshots: SnapshotStore,
}

impl AppState {
    /// Create a new application state with the given collaborators.
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        feed: Arc<dyn TelemetryFeed>,
        snapshots: SnapshotStore,
    ) -> Self {
        Self {
            repository,
            feed,
            snapshots,
        }
    }
}
