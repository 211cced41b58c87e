//! Telemetry acquisition.
//!
//! [`TelemetryFeed`] is the integration seam for positional/draft data: the
//! refresh pipeline only sees the trait. [`SyntheticFeed`] is the stand-in
//! implementation used until a live AIS feed is wired in; it fabricates a
//! plausible snapshot per active master record while honoring the exact
//! `ShipSnapshot` contract a real feed must satisfy.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{Condition, MasterShipRecord, ShipSnapshot, REGIONS};

/// Destination placeholder used until a feed supplies a real one.
pub const PLACEHOLDER_DESTINATION: &str = "TBN";

/// Source of per-ship telemetry.
///
/// A live feed must supply, per active roster record, at minimum position,
/// sog/cog, current draft (or none), destination, ETA, and a timestamp;
/// everything else is copied from the master record.
#[async_trait]
pub trait TelemetryFeed: Send + Sync {
    /// Produce one snapshot per roster record.
    ///
    /// Callers pass the active subset of the roster; the feed does not
    /// filter.
    async fn fetch(&self, ships: &[MasterShipRecord]) -> Result<Vec<ShipSnapshot>>;
}

/// Synthetic stand-in for a live AIS feed.
///
/// Ships are scattered near region centers by cycling through the fixed
/// region list in roster order, with a uniform ±10 degree jitter per axis.
#[derive(Debug, Default)]
pub struct SyntheticFeed;

impl SyntheticFeed {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize snapshots with a caller-supplied RNG and clock.
    ///
    /// Seedable entry point so tests get deterministic output.
    pub fn synthesize_with_rng<R: Rng + ?Sized>(
        ships: &[MasterShipRecord],
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vec<ShipSnapshot> {
        ships
            .iter()
            .enumerate()
            .map(|(index, master)| {
                let region = &REGIONS[index % REGIONS.len()];
                let lat = region.center.0 + (rng.gen::<f64>() - 0.5) * 20.0;
                let lng = region.center.1 + (rng.gen::<f64>() - 0.5) * 20.0;

                let full_draft = master.full_draft.filter(|d| *d > 0.0);
                let current_draft = full_draft.map(|full| full * rng.gen_range(0.3..=1.0));
                let condition = Condition::classify(current_draft, full_draft);

                let sog = ((10.0 + rng.gen::<f64>() * 4.0) * 10.0).round() / 10.0;
                let cog = rng.gen_range(0..360) as u16;

                ShipSnapshot {
                    id: master.id,
                    name: master.name.clone(),
                    manager: master.manager.clone(),
                    mmsi: master.mmsi.clone(),
                    imo: master.imo.clone(),
                    flag: master.flag.clone(),
                    full_draft,
                    current_draft,
                    condition,
                    lat,
                    lng,
                    sog,
                    cog,
                    destination: PLACEHOLDER_DESTINATION.to_string(),
                    eta: String::new(),
                    last_update: now,
                }
            })
            .collect()
    }
}

#[async_trait]
impl TelemetryFeed for SyntheticFeed {
    async fn fetch(&self, ships: &[MasterShipRecord]) -> Result<Vec<ShipSnapshot>> {
        Ok(Self::synthesize_with_rng(
            ships,
            &mut rand::thread_rng(),
            Utc::now(),
        ))
    }
}
