//! Fleet list view builder.

use crate::api::{ShipListData, ShipListRow};
use crate::models::ShipSnapshot;

/// Placeholder dash shown where a value is missing.
pub const PLACEHOLDER_DASH: &str = "―";

/// Message shown when the snapshot collection is empty.
pub const EMPTY_FLEET_MESSAGE: &str = "No ships to display. Check the ship master.";

fn dash_if_empty(text: &str) -> String {
    if text.is_empty() {
        PLACEHOLDER_DASH.to_string()
    } else {
        text.to_string()
    }
}

/// Draft ratio as a whole percentage, or the placeholder dash.
pub fn ratio_text(snapshot: &ShipSnapshot) -> String {
    match snapshot.draft_ratio() {
        Some(ratio) => format!("{:.0}%", ratio * 100.0),
        None => PLACEHOLDER_DASH.to_string(),
    }
}

/// Build the list view render model: one row per snapshot ship.
pub fn build_ship_list_data(snapshots: &[ShipSnapshot]) -> ShipListData {
    if snapshots.is_empty() {
        return ShipListData {
            rows: vec![],
            placeholder: Some(EMPTY_FLEET_MESSAGE.to_string()),
            total: 0,
        };
    }

    let rows = snapshots
        .iter()
        .map(|ship| ShipListRow {
            id: ship.id,
            name: ship.name.clone(),
            manager: ship.manager.clone(),
            condition: ship.condition,
            condition_label: ship.condition.label().to_string(),
            badge_class: ship.condition.badge_class().to_string(),
            ratio_text: ratio_text(ship),
            destination: dash_if_empty(&ship.destination),
            eta: dash_if_empty(&ship.eta),
        })
        .collect::<Vec<_>>();

    let total = rows.len();
    ShipListData {
        rows,
        placeholder: None,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ShipId;
    use crate::models::Condition;
    use chrono::Utc;

    fn snapshot(id: i64, current: Option<f64>, full: Option<f64>) -> ShipSnapshot {
        ShipSnapshot {
            id: ShipId::new(id),
            name: format!("SHIP {}", id),
            manager: "MGMT".to_string(),
            mmsi: format!("{:09}", id),
            imo: String::new(),
            flag: String::new(),
            full_draft: full,
            current_draft: current,
            condition: Condition::classify(current, full),
            lat: 20.0,
            lng: 150.0,
            sog: 12.3,
            cog: 45,
            destination: "TBN".to_string(),
            eta: String::new(),
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let data = build_ship_list_data(&[]);
        assert!(data.rows.is_empty());
        assert_eq!(data.placeholder.as_deref(), Some(EMPTY_FLEET_MESSAGE));
        assert_eq!(data.total, 0);
    }

    #[test]
    fn test_one_row_per_snapshot() {
        let fleet = vec![
            snapshot(1, Some(9.1), Some(13.0)),
            snapshot(2, Some(3.0), Some(13.0)),
        ];
        let data = build_ship_list_data(&fleet);
        assert_eq!(data.total, 2);
        assert!(data.placeholder.is_none());
        assert_eq!(data.rows[0].condition, Condition::Laden);
        assert_eq!(data.rows[1].condition, Condition::Ballast);
    }

    #[test]
    fn test_ratio_text_formatting() {
        let half = snapshot(1, Some(6.5), Some(13.0));
        assert_eq!(ratio_text(&half), "50%");

        let unknown = snapshot(2, None, Some(13.0));
        assert_eq!(ratio_text(&unknown), PLACEHOLDER_DASH);
    }

    #[test]
    fn test_missing_eta_rendered_as_dash() {
        let data = build_ship_list_data(&[snapshot(1, Some(9.1), Some(13.0))]);
        assert_eq!(data.rows[0].eta, PLACEHOLDER_DASH);
        assert_eq!(data.rows[0].destination, "TBN");
    }

    #[test]
    fn test_badge_metadata_present() {
        let data = build_ship_list_data(&[snapshot(1, Some(9.1), Some(13.0))]);
        assert_eq!(data.rows[0].condition_label, "LADEN");
        assert_eq!(data.rows[0].badge_class, "badge-laden");
    }
}
