//! Per-ship telemetry snapshots.
//!
//! A snapshot is derived, ephemeral state: the collection is rebuilt
//! wholesale on every refresh cycle and never persisted.

use crate::api::ShipId;
use crate::models::Condition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merged master + telemetry record for one ship, valid for one cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipSnapshot {
    pub id: ShipId,
    pub name: String,
    pub manager: String,
    pub mmsi: String,
    pub imo: String,
    pub flag: String,
    /// Full (design) draft in metres, from the master record.
    pub full_draft: Option<f64>,
    /// Instantaneous draft in metres.
    pub current_draft: Option<f64>,
    pub condition: Condition,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Speed over ground in knots.
    pub sog: f64,
    /// Course over ground in degrees, 0..=359.
    pub cog: u16,
    pub destination: String,
    pub eta: String,
    /// Telemetry timestamp, set at synthesis time.
    pub last_update: DateTime<Utc>,
}

impl ShipSnapshot {
    /// Draft ratio (current / full) when both drafts are known and positive.
    pub fn draft_ratio(&self) -> Option<f64> {
        match (self.current_draft, self.full_draft) {
            (Some(current), Some(full)) if current > 0.0 && full > 0.0 => Some(current / full),
            _ => None,
        }
    }
}
