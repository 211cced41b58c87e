use crate::api::{ShipId, ValidatedShip};
use crate::db::repositories::LocalRepository;
use crate::db::services;

fn form_ship(name: &str, mmsi: &str) -> ValidatedShip {
    ValidatedShip {
        name: name.to_string(),
        mmsi: mmsi.to_string(),
        imo: String::new(),
        flag: String::new(),
        manager: String::new(),
        full_draft: Some(10.0),
        active: true,
    }
}

#[tokio::test]
async fn test_create_assigns_id_one_on_empty_roster() {
    let repo = LocalRepository::new();
    let created = services::create_ship(&repo, form_ship("TEST", "111")).await.unwrap();
    assert_eq!(created.id, ShipId::new(1));
}

#[tokio::test]
async fn test_create_assigns_max_plus_one() {
    let repo = LocalRepository::new();
    services::create_ship(&repo, form_ship("A", "111")).await.unwrap();
    services::create_ship(&repo, form_ship("B", "222")).await.unwrap();
    let c = services::create_ship(&repo, form_ship("C", "333")).await.unwrap();
    assert_eq!(c.id, ShipId::new(3));

    // Deleting the middle record must not cause id reuse
    services::delete_ship(&repo, ShipId::new(2)).await.unwrap();
    let d = services::create_ship(&repo, form_ship("D", "444")).await.unwrap();
    assert_eq!(d.id, ShipId::new(4));
}

#[tokio::test]
async fn test_get_ship() {
    let repo = LocalRepository::new();
    let created = services::create_ship(&repo, form_ship("TEST", "111")).await.unwrap();

    let fetched = services::get_ship(&repo, created.id).await.unwrap();
    assert_eq!(fetched, created);

    let missing = services::get_ship(&repo, ShipId::new(99)).await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_ship_replaces_fields() {
    let repo = LocalRepository::new();
    let created = services::create_ship(&repo, form_ship("OLD NAME", "111")).await.unwrap();

    let mut changed = form_ship("NEW NAME", "111");
    changed.manager = "ACME MARINE".to_string();
    changed.full_draft = None;
    changed.active = false;

    let updated = services::update_ship(&repo, created.id, changed).await.unwrap();
    assert_eq!(updated.name, "NEW NAME");
    assert_eq!(updated.manager, "ACME MARINE");
    assert_eq!(updated.full_draft, None);
    assert!(!updated.active);

    // Persisted, not just returned
    let roster = services::load_roster(&repo).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "NEW NAME");
}

#[tokio::test]
async fn test_update_missing_ship_is_not_found() {
    let repo = LocalRepository::new();
    let result = services::update_ship(&repo, ShipId::new(5), form_ship("X", "1")).await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let repo = LocalRepository::new();
    let a = services::create_ship(&repo, form_ship("A", "111")).await.unwrap();
    let b = services::create_ship(&repo, form_ship("B", "222")).await.unwrap();

    services::delete_ship(&repo, a.id).await.unwrap();

    let roster = services::load_roster(&repo).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, b.id);
}

#[tokio::test]
async fn test_delete_missing_ship_is_not_found() {
    let repo = LocalRepository::new();
    let result = services::delete_ship(&repo, ShipId::new(1)).await;
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_seed_applies_only_to_empty_roster() {
    let repo = LocalRepository::new();
    assert!(services::seed_roster_if_empty(&repo).await.unwrap());
    let seeded = services::load_roster(&repo).await.unwrap();
    assert_eq!(seeded.len(), 2);

    // Second call is a no-op
    assert!(!services::seed_roster_if_empty(&repo).await.unwrap());
    assert_eq!(services::load_roster(&repo).await.unwrap(), seeded);
}
