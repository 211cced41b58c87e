use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ShipId;
use crate::models::Condition;

/// One map marker for a ship inside the selected region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipMarker {
    pub id: ShipId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub condition: Condition,
}

/// Map view render model for one selected region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewData {
    pub region_id: String,
    pub region_name: String,
    /// Map center as (lat, lng).
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<ShipMarker>,
}

/// Detail panel content for one ship, fully formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDetailData {
    pub id: ShipId,
    pub name: String,
    pub manager: String,
    pub mmsi: String,
    pub imo: String,
    pub flag: String,
    pub condition_label: String,
    pub badge_class: String,
    /// "9.1 m" or the placeholder dash.
    pub current_draft_text: String,
    pub full_draft_text: String,
    pub ratio_text: String,
    /// "20.0000, 150.0000"
    pub position_text: String,
    pub sog_text: String,
    pub cog_text: String,
    pub destination: String,
    pub eta: String,
    pub last_update: DateTime<Utc>,
}

/// Route function name constants
pub const GET_MAP_VIEW_DATA: &str = "get_map_view_data";
pub const GET_SHIP_DETAIL: &str = "get_ship_detail";
