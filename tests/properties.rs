//! Property-based tests for the roster and classification laws.

use fms_rust::api::ShipId;
use fms_rust::models::{
    next_ship_id, normalize_longitude, parse_roster_json, resolve_region, roster_to_json,
    Condition, MasterShipRecord,
};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = MasterShipRecord> {
    (
        1i64..10_000,
        "[A-Z][A-Z0-9 ]{0,19}",
        "[0-9]{9}",
        proptest::option::of(0.1f64..30.0),
        any::<bool>(),
    )
        .prop_map(|(id, name, mmsi, full_draft, active)| MasterShipRecord {
            id: ShipId::new(id),
            name,
            mmsi,
            imo: String::new(),
            flag: String::new(),
            manager: String::new(),
            full_draft,
            active,
        })
}

fn roster_strategy() -> impl Strategy<Value = Vec<MasterShipRecord>> {
    proptest::collection::vec(record_strategy(), 0..30).prop_map(|mut roster| {
        // Ids are unique within a roster; reassign collisions by position
        for (index, record) in roster.iter_mut().enumerate() {
            record.id = ShipId::new(record.id.value() + (index as i64) * 10_000);
        }
        roster
    })
}

proptest! {
    #[test]
    fn next_id_is_one_for_empty_and_max_plus_one_otherwise(roster in roster_strategy()) {
        let next = next_ship_id(&roster);

        if roster.is_empty() {
            prop_assert_eq!(next, ShipId::new(1));
        } else {
            let max = roster.iter().map(|s| s.id.value()).max().unwrap();
            prop_assert_eq!(next.value(), max + 1);
        }

        prop_assert!(roster.iter().all(|s| s.id != next));
    }

    #[test]
    fn classify_is_unknown_iff_an_input_is_absent(
        current in proptest::option::of(0.1f64..30.0),
        full in proptest::option::of(0.1f64..30.0),
    ) {
        let condition = Condition::classify(current, full);
        match (current, full) {
            (Some(c), Some(f)) => {
                let ratio = c / f;
                let expected = if ratio >= 0.7 {
                    Condition::Laden
                } else if ratio <= 0.3 {
                    Condition::Ballast
                } else {
                    Condition::Partly
                };
                prop_assert_eq!(condition, expected);
            }
            _ => prop_assert_eq!(condition, Condition::Unknown),
        }
    }

    #[test]
    fn resolve_region_is_idempotent_under_one_wrap(
        lat in -90.0f64..90.0,
        // Stay off the ±180 seam, where the two pacific boxes meet
        lng in -179.9f64..179.9,
    ) {
        let direct = resolve_region(lat, lng).map(|r| r.id);
        prop_assert_eq!(direct, resolve_region(lat, lng + 360.0).map(|r| r.id));
        prop_assert_eq!(direct, resolve_region(lat, lng - 360.0).map(|r| r.id));
    }

    #[test]
    fn normalize_longitude_lands_in_range(lng in -540.0f64..540.0) {
        let lon = normalize_longitude(lng);
        prop_assert!((-180.0..=180.0).contains(&lon));
    }

    #[test]
    fn roster_json_round_trips(roster in roster_strategy()) {
        let json = roster_to_json(&roster).unwrap();
        let back = parse_roster_json(&json).unwrap();
        prop_assert_eq!(back, roster);
    }
}
