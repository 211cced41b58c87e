// ============================================================================
// Ship Master Records
// ============================================================================
//
// The roster ("master data") is the user-curated list of known ships. It is
// persisted as a single JSON document, so the serde field names here are the
// storage schema. Field names stay camelCase for compatibility with rosters
// written by the previous dashboard build.

use crate::api::ShipId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Identity and static attributes of a vessel in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterShipRecord {
    /// Unique within the roster; assigned monotonically on create.
    pub id: ShipId,
    /// Display name, required.
    pub name: String,
    /// Required; no checksum or format validation is performed.
    pub mmsi: String,
    #[serde(default)]
    pub imo: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub manager: String,
    /// Full (design) draft in metres.
    #[serde(default)]
    pub full_draft: Option<f64>,
    /// Inactive records are excluded from telemetry but stay in the roster.
    pub active: bool,
}

/// Returns the next id to assign: 1 for an empty roster, else max + 1.
pub fn next_ship_id(roster: &[MasterShipRecord]) -> ShipId {
    let max = roster.iter().map(|s| s.id.value()).max().unwrap_or(0);
    ShipId::new(max + 1)
}

/// Parse a persisted roster document.
pub fn parse_roster_json(json: &str) -> Result<Vec<MasterShipRecord>> {
    serde_json::from_str(json).context("Failed to deserialize roster JSON")
}

/// Serialize a roster for persistence.
pub fn roster_to_json(roster: &[MasterShipRecord]) -> Result<String> {
    serde_json::to_string(roster).context("Failed to serialize roster JSON")
}
