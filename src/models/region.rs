//! Fixed geographic regions and latitude/longitude bucketing.
//!
//! The world is partitioned into four ocean regions used for grouping and
//! display. The table is static, ordered, and never mutated at runtime;
//! resolution is first-match in declaration order, so the order is part of
//! the contract should two boxes ever overlap.

use serde::Serialize;

/// A geographic bounding box in WGS84 decimal degrees.
///
/// `west <= east` holds for every region in [`REGIONS`], so no anti-meridian
/// wraparound handling exists here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    pub const fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// Whether the box contains the point. Boundaries are inclusive.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

/// One of the four fixed ocean regions.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    /// Stable identifier used in URLs and render targets.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub bounds: BoundingBox,
    /// Map center as (lat, lng).
    pub center: (f64, f64),
    /// Default map zoom when the region is selected.
    pub zoom: u8,
}

/// The fixed region table, in resolution priority order.
pub static REGIONS: [Region; 4] = [
    Region {
        id: "west-pacific",
        name: "West-Pacific",
        bounds: BoundingBox::new(120.0, 180.0, -60.0, 60.0),
        center: (20.0, 150.0),
        zoom: 3,
    },
    Region {
        id: "east-pacific",
        name: "East-Pacific",
        bounds: BoundingBox::new(-180.0, -60.0, -60.0, 60.0),
        center: (20.0, -140.0),
        zoom: 3,
    },
    Region {
        id: "atlantic",
        name: "Atlantic",
        bounds: BoundingBox::new(-60.0, 20.0, -60.0, 60.0),
        center: (20.0, -20.0),
        zoom: 3,
    },
    Region {
        id: "indian",
        name: "Indian",
        bounds: BoundingBox::new(20.0, 120.0, -60.0, 30.0),
        center: (0.0, 80.0),
        zoom: 3,
    },
];

/// Normalize a longitude into [-180, 180] by at most one ±360 adjustment.
///
/// Inputs more than one revolution out of range are not corrected further;
/// they simply fail to match any region downstream.
pub fn normalize_longitude(lng: f64) -> f64 {
    let mut lon = lng;
    if lon > 180.0 {
        lon -= 360.0;
    }
    if lon < -180.0 {
        lon += 360.0;
    }
    lon
}

/// Resolve the region containing a position, if any.
///
/// The longitude is normalized first; the first matching region in table
/// order wins.
pub fn resolve_region(lat: f64, lng: f64) -> Option<&'static Region> {
    let lon = normalize_longitude(lng);
    REGIONS.iter().find(|r| r.bounds.contains(lat, lon))
}

/// Look up a region by its stable identifier.
pub fn region_by_id(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}
