//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The view models are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Map view
    MapViewData, ShipDetailData, ShipMarker,
    // Region summary
    RegionCard, RegionSummaryData,
    // Roster
    RosterListData, RosterRow, ShipForm,
    // Ship list
    ShipListData, ShipListRow,
};
use crate::models::{MasterShipRecord, Region, ShipSnapshot};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Status of the roster store
    pub store: String,
}

/// Static region table response.
#[derive(Debug, Clone, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    pub total: usize,
}

/// Response for a create/update roster mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveShipResponse {
    pub ship: MasterShipRecord,
    pub message: String,
}

/// Response for a delete roster mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteShipResponse {
    pub deleted_id: i64,
    pub message: String,
}

/// Raw snapshot collection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotListResponse {
    pub ships: Vec<ShipSnapshot>,
    pub total: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Query parameters for the map view endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapQuery {
    /// Selected region id; absent means no region selected.
    #[serde(default)]
    pub region: Option<String>,
}

/// Map view response; `view` is absent when no region is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<MapViewData>,
}

/// Response for a manual refresh trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub ships: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}
