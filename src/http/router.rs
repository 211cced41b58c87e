//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Static region table
        .route("/regions", get(handlers::list_regions))
        // Roster CRUD
        .route("/roster", get(handlers::list_roster))
        .route("/roster", post(handlers::create_ship))
        .route("/roster/{id}", put(handlers::update_ship))
        .route("/roster/{id}", delete(handlers::delete_ship))
        // Snapshots
        .route("/ships", get(handlers::list_ships))
        .route("/ships/{id}", get(handlers::get_ship_detail))
        .route("/refresh", post(handlers::refresh_snapshots))
        // View models
        .route("/views/ship-list", get(handlers::get_ship_list_view))
        .route("/views/regions", get(handlers::get_region_summary_view))
        .route("/views/map", get(handlers::get_map_view));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
