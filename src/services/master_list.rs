//! Master list panel builder.

use crate::api::{RosterListData, RosterRow};
use crate::models::MasterShipRecord;
use crate::services::ship_list::PLACEHOLDER_DASH;

/// Message shown when the roster is empty.
pub const EMPTY_ROSTER_MESSAGE: &str = "No ships registered. Add one with the form.";

fn dash_if_empty(text: &str) -> String {
    if text.is_empty() {
        PLACEHOLDER_DASH.to_string()
    } else {
        text.to_string()
    }
}

/// Build the master list render model from the persisted roster.
pub fn build_master_list_data(roster: &[MasterShipRecord]) -> RosterListData {
    if roster.is_empty() {
        return RosterListData {
            rows: vec![],
            placeholder: Some(EMPTY_ROSTER_MESSAGE.to_string()),
            total: 0,
        };
    }

    let rows = roster
        .iter()
        .map(|ship| {
            let full_draft = ship
                .full_draft
                .map(|d| format!("{:.1} m", d))
                .unwrap_or_else(|| PLACEHOLDER_DASH.to_string());

            RosterRow {
                id: ship.id,
                name: ship.name.clone(),
                active: ship.active,
                identity_line: format!(
                    "MMSI: {} / IMO: {} / Flag: {}",
                    ship.mmsi,
                    dash_if_empty(&ship.imo),
                    dash_if_empty(&ship.flag)
                ),
                management_line: format!(
                    "Manager: {} / Full draft: {}",
                    dash_if_empty(&ship.manager),
                    full_draft
                ),
            }
        })
        .collect::<Vec<_>>();

    let total = rows.len();
    RosterListData {
        rows,
        placeholder: None,
        total,
    }
}
