//! Service layer for roster operations.
//!
//! High-level business logic over any [`RosterRepository`] implementation.
//! Record-level CRUD is composed from whole-roster load/save, matching the
//! single-document persistence model: every mutation re-persists the full
//! roster immediately.

use crate::api::{ShipId, ValidatedShip};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, RosterRepository};
use crate::models::{self, MasterShipRecord};
use log::info;

/// Load the full roster.
pub async fn load_roster(repo: &dyn RosterRepository) -> RepositoryResult<Vec<MasterShipRecord>> {
    repo.load_roster().await
}

/// Persist the full roster, replacing whatever was stored before.
pub async fn save_roster(
    repo: &dyn RosterRepository,
    roster: &[MasterShipRecord],
) -> RepositoryResult<()> {
    repo.save_roster(roster).await
}

/// Fetch a single master record by id.
///
/// # Returns
/// * `Ok(MasterShipRecord)` - The matching record
/// * `Err(RepositoryError::NotFound)` - If no record has the id
pub async fn get_ship(
    repo: &dyn RosterRepository,
    id: ShipId,
) -> RepositoryResult<MasterShipRecord> {
    let roster = repo.load_roster().await?;
    roster.into_iter().find(|s| s.id == id).ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("Ship {} not in roster", id),
            ErrorContext::new("get_ship").with_entity("ship").with_entity_id(id),
        )
    })
}

/// Create a new master record with a freshly assigned id.
///
/// Ids are assigned monotonically: `max(existing) + 1`, or 1 for an empty
/// roster, so a new id never collides with an existing one.
pub async fn create_ship(
    repo: &dyn RosterRepository,
    ship: ValidatedShip,
) -> RepositoryResult<MasterShipRecord> {
    let mut roster = repo.load_roster().await?;
    let id = models::next_ship_id(&roster);

    let record = MasterShipRecord {
        id,
        name: ship.name,
        mmsi: ship.mmsi,
        imo: ship.imo,
        flag: ship.flag,
        manager: ship.manager,
        full_draft: ship.full_draft,
        active: ship.active,
    };

    roster.push(record.clone());
    repo.save_roster(&roster).await?;
    info!("Created ship {} ({})", record.id, record.name);
    Ok(record)
}

/// Update the master record with the given id.
///
/// # Returns
/// * `Ok(MasterShipRecord)` - The updated record
/// * `Err(RepositoryError::NotFound)` - If no record has the id
pub async fn update_ship(
    repo: &dyn RosterRepository,
    id: ShipId,
    ship: ValidatedShip,
) -> RepositoryResult<MasterShipRecord> {
    let mut roster = repo.load_roster().await?;

    let record = roster.iter_mut().find(|s| s.id == id).ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("Ship {} not in roster", id),
            ErrorContext::new("update_ship").with_entity("ship").with_entity_id(id),
        )
    })?;

    record.name = ship.name;
    record.mmsi = ship.mmsi;
    record.imo = ship.imo;
    record.flag = ship.flag;
    record.manager = ship.manager;
    record.full_draft = ship.full_draft;
    record.active = ship.active;
    let updated = record.clone();

    repo.save_roster(&roster).await?;
    info!("Updated ship {} ({})", updated.id, updated.name);
    Ok(updated)
}

/// Delete the master record with the given id.
///
/// Removes exactly the matching record and persists the remainder.
///
/// # Returns
/// * `Ok(())` - The record was removed
/// * `Err(RepositoryError::NotFound)` - If no record has the id
pub async fn delete_ship(repo: &dyn RosterRepository, id: ShipId) -> RepositoryResult<()> {
    let mut roster = repo.load_roster().await?;
    let before = roster.len();
    roster.retain(|s| s.id != id);

    if roster.len() == before {
        return Err(RepositoryError::not_found_with_context(
            format!("Ship {} not in roster", id),
            ErrorContext::new("delete_ship").with_entity("ship").with_entity_id(id),
        ));
    }

    repo.save_roster(&roster).await?;
    info!("Deleted ship {}", id);
    Ok(())
}

/// Seed the roster with sample ships when the store is empty.
///
/// Keeps the dashboard from being blank on first run. Returns true when the
/// seed was applied.
pub async fn seed_roster_if_empty(repo: &dyn RosterRepository) -> RepositoryResult<bool> {
    let roster = repo.load_roster().await?;
    if !roster.is_empty() {
        return Ok(false);
    }

    let seed = vec![
        MasterShipRecord {
            id: ShipId::new(1),
            name: "INUI BULKER NO.1".to_string(),
            mmsi: "431234567".to_string(),
            imo: "9876543".to_string(),
            flag: "Panama".to_string(),
            manager: "INUI SHIP MANAGEMENT".to_string(),
            full_draft: Some(13.0),
            active: true,
        },
        MasterShipRecord {
            id: ShipId::new(2),
            name: "INUI HANDY NO.2".to_string(),
            mmsi: "431234568".to_string(),
            imo: "9876544".to_string(),
            flag: "Panama".to_string(),
            manager: "INUI SHIP MANAGEMENT".to_string(),
            full_draft: Some(12.5),
            active: true,
        },
    ];

    repo.save_roster(&seed).await?;
    info!("Seeded roster with {} sample ships", seed.len());
    Ok(true)
}

/// Check repository health.
pub async fn health_check(repo: &dyn RosterRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
