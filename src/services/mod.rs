//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! and the HTTP handlers: telemetry synthesis, the process-wide snapshot
//! state, the refresh pipeline, and the pure view-model builders.

pub mod map_view;

pub mod master_list;

pub mod region_summary;

pub mod refresh;

pub mod ship_list;

pub mod snapshot_store;

pub mod telemetry;


pub use map_view::{build_map_view_data, build_ship_detail};
pub use master_list::build_master_list_data;
pub use region_summary::build_region_summary_data;
pub use refresh::{refresh_snapshots, refresh_snapshots_logged};
pub use ship_list::build_ship_list_data;
pub use snapshot_store::SnapshotStore;
pub use telemetry::{SyntheticFeed, TelemetryFeed};
