//! Repository tests for the roster stores.
//!
//! These tests cover the whole-roster persistence contract, id assignment,
//! record-level CRUD via the service layer, and recovery from a corrupted
//! file store.

use fms_rust::api::{ShipId, ValidatedShip};
use fms_rust::db::repositories::{FileConfig, FileRepository, LocalRepository};
use fms_rust::db::repository::RosterRepository;
use fms_rust::db::services;
use fms_rust::models::MasterShipRecord;

fn record(id: i64, name: &str, full_draft: Option<f64>) -> MasterShipRecord {
    MasterShipRecord {
        id: ShipId::new(id),
        name: name.to_string(),
        mmsi: format!("43{:07}", id),
        imo: String::new(),
        flag: "Panama".to_string(),
        manager: "TEST MGMT".to_string(),
        full_draft,
        active: true,
    }
}

fn validated(name: &str) -> ValidatedShip {
    ValidatedShip {
        name: name.to_string(),
        mmsi: "431234567".to_string(),
        imo: String::new(),
        flag: String::new(),
        manager: String::new(),
        full_draft: Some(13.0),
        active: true,
    }
}

// =========================================================
// Whole-roster persistence
// =========================================================

#[tokio::test]
async fn test_local_round_trip() {
    let repo = LocalRepository::new();
    let roster = vec![record(1, "A", Some(13.0)), record(2, "B", None)];

    repo.save_roster(&roster).await.unwrap();
    assert_eq!(repo.load_roster().await.unwrap(), roster);
}

#[tokio::test]
async fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(FileConfig::new(dir.path().join("roster.json")));
    let roster = vec![record(1, "A", Some(13.0)), record(2, "B", None)];

    repo.save_roster(&roster).await.unwrap();
    assert_eq!(repo.load_roster().await.unwrap(), roster);
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let roster = vec![record(1, "PERSISTED", Some(12.5))];

    {
        let repo = FileRepository::new(FileConfig::new(&path));
        repo.save_roster(&roster).await.unwrap();
    }

    // A fresh repository over the same path sees the same roster
    let reopened = FileRepository::new(FileConfig::new(&path));
    assert_eq!(reopened.load_roster().await.unwrap(), roster);
}

#[tokio::test]
async fn test_corrupted_store_treated_as_empty_then_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    std::fs::write(&path, "][ not a roster").unwrap();

    let repo = FileRepository::new(FileConfig::new(&path));
    assert!(repo.load_roster().await.unwrap().is_empty());

    // The next save replaces the corrupted payload entirely
    repo.save_roster(&[record(1, "FRESH", None)]).await.unwrap();
    assert_eq!(repo.load_roster().await.unwrap().len(), 1);
}

// =========================================================
// Service-layer CRUD over the file store
// =========================================================

#[tokio::test]
async fn test_create_then_delete_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(FileConfig::new(dir.path().join("roster.json")));

    let a = services::create_ship(&repo, validated("A")).await.unwrap();
    let b = services::create_ship(&repo, validated("B")).await.unwrap();
    assert_eq!(a.id, ShipId::new(1));
    assert_eq!(b.id, ShipId::new(2));

    services::delete_ship(&repo, a.id).await.unwrap();

    let roster = services::load_roster(&repo).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, b.id);
    assert_eq!(roster[0].name, "B");
}

#[tokio::test]
async fn test_update_on_file_store_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    {
        let repo = FileRepository::new(FileConfig::new(&path));
        let created = services::create_ship(&repo, validated("BEFORE")).await.unwrap();

        let mut changed = validated("AFTER");
        changed.full_draft = None;
        services::update_ship(&repo, created.id, changed).await.unwrap();
    }

    let reopened = FileRepository::new(FileConfig::new(&path));
    let roster = reopened.load_roster().await.unwrap();
    assert_eq!(roster[0].name, "AFTER");
    assert_eq!(roster[0].full_draft, None);
}

#[tokio::test]
async fn test_delete_missing_is_not_found_without_side_effects() {
    let repo = LocalRepository::new();
    services::create_ship(&repo, validated("KEEP")).await.unwrap();

    let err = services::delete_ship(&repo, ShipId::new(42)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(services::load_roster(&repo).await.unwrap().len(), 1);
}
