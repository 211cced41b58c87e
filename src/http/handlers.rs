//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic. Every roster mutation runs a
//! synchronous snapshot refresh so the views reflect the change immediately.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    DeleteShipResponse, HealthResponse, MapQuery, MapViewResponse, RefreshResponse,
    RegionsResponse, RosterListData, SaveShipResponse, ShipDetailData, ShipForm, ShipListData,
    SnapshotListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{RegionSummaryData, ShipId};
use crate::db::services as db_services;
use crate::models::REGIONS;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

async fn refresh_after_mutation(state: &AppState) {
    services::refresh_snapshots_logged(
        state.repository.as_ref(),
        state.feed.as_ref(),
        &state.snapshots,
    )
    .await;
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the roster
/// store is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Regions
// =============================================================================

/// GET /v1/regions
///
/// The fixed region table, for the frontend map and summary cards.
pub async fn list_regions() -> HandlerResult<RegionsResponse> {
    Ok(Json(RegionsResponse {
        regions: REGIONS.to_vec(),
        total: REGIONS.len(),
    }))
}

// =============================================================================
// Roster CRUD
// =============================================================================

/// GET /v1/roster
///
/// Master list render model, including inactive ships.
pub async fn list_roster(State(state): State<AppState>) -> HandlerResult<RosterListData> {
    let roster = db_services::load_roster(state.repository.as_ref()).await?;
    Ok(Json(services::build_master_list_data(&roster)))
}

/// POST /v1/roster
///
/// Create a new master record from a form payload.
pub async fn create_ship(
    State(state): State<AppState>,
    Json(form): Json<ShipForm>,
) -> Result<(StatusCode, Json<SaveShipResponse>), AppError> {
    let validated = form.validate()?;
    let ship = db_services::create_ship(state.repository.as_ref(), validated).await?;
    refresh_after_mutation(&state).await;

    Ok((
        StatusCode::CREATED,
        Json(SaveShipResponse {
            message: format!("Ship {} registered", ship.name),
            ship,
        }),
    ))
}

/// PUT /v1/roster/{id}
///
/// Update the master record with the given id.
pub async fn update_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ShipForm>,
) -> HandlerResult<SaveShipResponse> {
    let validated = form.validate()?;
    let ship =
        db_services::update_ship(state.repository.as_ref(), ShipId::new(id), validated).await?;
    refresh_after_mutation(&state).await;

    Ok(Json(SaveShipResponse {
        message: format!("Ship {} updated", ship.name),
        ship,
    }))
}

/// DELETE /v1/roster/{id}
///
/// Remove the master record with the given id.
pub async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<DeleteShipResponse> {
    db_services::delete_ship(state.repository.as_ref(), ShipId::new(id)).await?;
    refresh_after_mutation(&state).await;

    Ok(Json(DeleteShipResponse {
        deleted_id: id,
        message: format!("Ship {} deleted", id),
    }))
}

// =============================================================================
// Snapshots
// =============================================================================

/// GET /v1/ships
///
/// The raw current snapshot collection.
pub async fn list_ships(State(state): State<AppState>) -> HandlerResult<SnapshotListResponse> {
    let ships = state.snapshots.current();
    let total = ships.len();

    Ok(Json(SnapshotListResponse {
        ships,
        total,
        refreshed_at: state.snapshots.refreshed_at(),
    }))
}

/// GET /v1/ships/{id}
///
/// Detail panel model for one ship in the current snapshot.
pub async fn get_ship_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<ShipDetailData> {
    let snapshot = state
        .snapshots
        .get(ShipId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("Ship {} not in current snapshot", id)))?;

    Ok(Json(services::build_ship_detail(&snapshot)))
}

/// POST /v1/refresh
///
/// Manually trigger one synthesis cycle.
pub async fn refresh_snapshots(State(state): State<AppState>) -> HandlerResult<RefreshResponse> {
    let ships = services::refresh_snapshots(
        state.repository.as_ref(),
        state.feed.as_ref(),
        &state.snapshots,
    )
    .await?;

    Ok(Json(RefreshResponse {
        ships,
        refreshed_at: state.snapshots.refreshed_at(),
    }))
}

// =============================================================================
// View Models
// =============================================================================

/// GET /v1/views/ship-list
///
/// Fleet list view render model.
pub async fn get_ship_list_view(State(state): State<AppState>) -> HandlerResult<ShipListData> {
    let snapshots = state.snapshots.current();
    Ok(Json(services::build_ship_list_data(&snapshots)))
}

/// GET /v1/views/regions
///
/// Region summary cards render model.
pub async fn get_region_summary_view(
    State(state): State<AppState>,
) -> HandlerResult<RegionSummaryData> {
    let snapshots = state.snapshots.current();
    Ok(Json(services::build_region_summary_data(&snapshots)))
}

/// GET /v1/views/map?region={id}
///
/// Map view render model for the selected region. With no region selected
/// there is nothing to render and `view` is absent.
pub async fn get_map_view(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> HandlerResult<MapViewResponse> {
    let region_id = match query.region {
        Some(id) => id,
        None => return Ok(Json(MapViewResponse { view: None })),
    };

    let snapshots = state.snapshots.current();
    let view = services::build_map_view_data(&snapshots, &region_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region: {}", region_id)))?;

    Ok(Json(MapViewResponse { view: Some(view) }))
}
