//! Snapshot refresh pipeline.
//!
//! One synthesis cycle: load the roster, keep the active subset, fetch
//! telemetry through the feed seam, and swap the snapshot store. Runs after
//! every roster mutation and on the periodic timer.

use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};

use crate::db::repository::RosterRepository;
use crate::db::services as db_services;
use crate::services::snapshot_store::SnapshotStore;
use crate::services::telemetry::TelemetryFeed;

/// Run one refresh cycle, replacing the store contents on success.
///
/// Returns the number of snapshots produced.
pub async fn refresh_snapshots(
    repo: &dyn RosterRepository,
    feed: &dyn TelemetryFeed,
    store: &SnapshotStore,
) -> Result<usize> {
    let roster = db_services::load_roster(repo).await?;
    let active: Vec<_> = roster.into_iter().filter(|s| s.active).collect();

    let snapshots = feed.fetch(&active).await?;
    let count = snapshots.len();

    store.replace(snapshots, Utc::now());
    debug!("Snapshot refresh complete: {} ships", count);
    Ok(count)
}

/// Succeed-or-log variant used by the periodic task.
///
/// A failed cycle keeps the previous snapshot collection in place.
pub async fn refresh_snapshots_logged(
    repo: &dyn RosterRepository,
    feed: &dyn TelemetryFeed,
    store: &SnapshotStore,
) {
    if let Err(e) = refresh_snapshots(repo, feed, store).await {
        warn!("Snapshot refresh failed, keeping previous snapshot: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ShipId, ValidatedShip};
    use crate::db::repositories::LocalRepository;
    use crate::models::{MasterShipRecord, ShipSnapshot};
    use crate::services::telemetry::SyntheticFeed;
    use async_trait::async_trait;

    fn validated(name: &str, active: bool) -> ValidatedShip {
        ValidatedShip {
            name: name.to_string(),
            mmsi: "431234567".to_string(),
            imo: String::new(),
            flag: String::new(),
            manager: String::new(),
            full_draft: Some(13.0),
            active,
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl TelemetryFeed for FailingFeed {
        async fn fetch(&self, _ships: &[MasterShipRecord]) -> Result<Vec<ShipSnapshot>> {
            anyhow::bail!("feed unreachable")
        }
    }

    #[tokio::test]
    async fn test_refresh_excludes_inactive_ships() {
        let repo = LocalRepository::new();
        db_services::create_ship(&repo, validated("ACTIVE", true)).await.unwrap();
        db_services::create_ship(&repo, validated("PARKED", false)).await.unwrap();

        let store = SnapshotStore::new();
        let count = refresh_snapshots(&repo, &SyntheticFeed::new(), &store).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.current()[0].name, "ACTIVE");
    }

    #[tokio::test]
    async fn test_refresh_rebuilds_wholesale() {
        let repo = LocalRepository::new();
        let a = db_services::create_ship(&repo, validated("A", true)).await.unwrap();
        db_services::create_ship(&repo, validated("B", true)).await.unwrap();

        let store = SnapshotStore::new();
        refresh_snapshots(&repo, &SyntheticFeed::new(), &store).await.unwrap();
        assert_eq!(store.len(), 2);

        db_services::delete_ship(&repo, a.id).await.unwrap();
        refresh_snapshots(&repo, &SyntheticFeed::new(), &store).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(ShipId::new(1)).is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let repo = LocalRepository::new();
        db_services::create_ship(&repo, validated("A", true)).await.unwrap();

        let store = SnapshotStore::new();
        refresh_snapshots(&repo, &SyntheticFeed::new(), &store).await.unwrap();
        let before = store.refreshed_at();

        refresh_snapshots_logged(&repo, &FailingFeed, &store).await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.refreshed_at(), before);
    }
}
