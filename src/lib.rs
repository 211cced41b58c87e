//! # FMS Rust Backend
//!
//! Fleet-monitoring backend for a ship-operations dashboard.
//!
//! This crate maintains a persisted roster of ships (master data), merges the
//! roster with positional/draft telemetry, classifies each ship's loading
//! condition, groups ships into fixed geographic regions, and serves
//! presentation-ready view models to the browser frontend via an Axum REST API.
//!
//! ## Features
//!
//! - **Master Data**: CRUD over the editable ship roster with whole-roster
//!   persistence
//! - **Telemetry**: Synthetic AIS snapshots behind a feed trait, ready to be
//!   swapped for a live AIS integration
//! - **Classification**: Loading-condition categories derived from the draft
//!   ratio, region bucketing by latitude/longitude
//! - **View Models**: List view, per-region summary cards, map markers, and a
//!   ship detail panel as pure data projections
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Domain types — master records, snapshots, conditions, regions
//! - [`db`]: Roster persistence, repository pattern, and service layer
//! - [`services`]: Telemetry synthesis, snapshot state, and view-model builders
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
