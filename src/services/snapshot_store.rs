//! Process-wide latest-snapshot state.
//!
//! All view builders read from the same snapshot collection so every render
//! within a cycle is consistent. The collection is replaced wholesale by the
//! refresh pipeline (the only writer); readers get clones and never observe
//! a partial update.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::ShipId;
use crate::models::ShipSnapshot;

#[derive(Debug, Default)]
struct SnapshotState {
    ships: Vec<ShipSnapshot>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Cloneable handle to the latest snapshot collection.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<SnapshotState>>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the snapshot collection.
    pub fn replace(&self, ships: Vec<ShipSnapshot>, refreshed_at: DateTime<Utc>) {
        let mut state = self.inner.write();
        state.ships = ships;
        state.refreshed_at = Some(refreshed_at);
    }

    /// The current snapshot collection.
    pub fn current(&self) -> Vec<ShipSnapshot> {
        self.inner.read().ships.clone()
    }

    /// Look up one ship's snapshot by id.
    pub fn get(&self, id: ShipId) -> Option<ShipSnapshot> {
        self.inner.read().ships.iter().find(|s| s.id == id).cloned()
    }

    /// When the collection was last replaced, if ever.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().refreshed_at
    }

    pub fn len(&self) -> usize {
        self.inner.read().ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().ships.is_empty()
    }
}
