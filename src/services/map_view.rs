//! Map view and detail panel builders.

use crate::api::{MapViewData, ShipDetailData, ShipMarker};
use crate::models::{region_by_id, resolve_region, ShipSnapshot};
use crate::services::ship_list::{ratio_text, PLACEHOLDER_DASH};

fn dash_if_empty(text: &str) -> String {
    if text.is_empty() {
        PLACEHOLDER_DASH.to_string()
    } else {
        text.to_string()
    }
}

fn draft_text(metres: Option<f64>) -> String {
    match metres {
        Some(value) => format!("{:.1} m", value),
        None => PLACEHOLDER_DASH.to_string(),
    }
}

/// Build the map render model for one selected region.
///
/// Markers are limited to snapshots whose resolved region matches the
/// selection; with no valid selection there is nothing to render, so an
/// unknown region id yields `None`.
pub fn build_map_view_data(snapshots: &[ShipSnapshot], region_id: &str) -> Option<MapViewData> {
    let region = region_by_id(region_id)?;

    let markers = snapshots
        .iter()
        .filter(|ship| resolve_region(ship.lat, ship.lng).map(|r| r.id) == Some(region.id))
        .map(|ship| ShipMarker {
            id: ship.id,
            name: ship.name.clone(),
            lat: ship.lat,
            lng: ship.lng,
            condition: ship.condition,
        })
        .collect();

    Some(MapViewData {
        region_id: region.id.to_string(),
        region_name: region.name.to_string(),
        center: region.center,
        zoom: region.zoom,
        markers,
    })
}

/// Build the detail panel model for one ship, fully formatted.
pub fn build_ship_detail(ship: &ShipSnapshot) -> ShipDetailData {
    ShipDetailData {
        id: ship.id,
        name: ship.name.clone(),
        manager: dash_if_empty(&ship.manager),
        mmsi: ship.mmsi.clone(),
        imo: dash_if_empty(&ship.imo),
        flag: dash_if_empty(&ship.flag),
        condition_label: ship.condition.label().to_string(),
        badge_class: ship.condition.badge_class().to_string(),
        current_draft_text: draft_text(ship.current_draft),
        full_draft_text: draft_text(ship.full_draft),
        ratio_text: ratio_text(ship),
        position_text: format!("{:.4}, {:.4}", ship.lat, ship.lng),
        sog_text: format!("{} kn", ship.sog),
        cog_text: format!("{}°", ship.cog),
        destination: dash_if_empty(&ship.destination),
        eta: dash_if_empty(&ship.eta),
        last_update: ship.last_update,
    }
}
