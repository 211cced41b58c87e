//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::map_view::MapViewData;
pub use crate::routes::map_view::ShipDetailData;
pub use crate::routes::map_view::ShipMarker;
pub use crate::routes::region_summary::RegionCard;
pub use crate::routes::region_summary::RegionSummaryData;
pub use crate::routes::roster::RosterListData;
pub use crate::routes::roster::RosterRow;
pub use crate::routes::roster::ShipForm;
pub use crate::routes::roster::ShipFormError;
pub use crate::routes::roster::ValidatedShip;
pub use crate::routes::ship_list::ShipListData;
pub use crate::routes::ship_list::ShipListRow;

use serde::{Deserialize, Serialize};

/// Ship identifier (roster primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShipId(pub i64);

impl ShipId {
    pub fn new(value: i64) -> Self {
        ShipId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
