//! Router assembly.
//!
//! The two fixture routes serve the validated catalog rather than the raw
//! files, so a record that did not decode at startup can never reach the
//! browser. Everything else falls through to the static directory, which
//! holds the index page, the wasm bundle and the planet textures.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use atlas::catalog::{Marker, Planet};

use crate::state::AppState;

/// Entity counts reported by `/healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub planets: usize,
    pub markers: usize,
    pub rendered: usize,
}

/// Fixture routes and health check, without the static fallback.
fn data_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/data/planets.json", get(planets))
        .route("/data/markers.json", get(markers))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application router: data routes plus static assets from `static_dir`.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let assets = ServeDir::new(static_dir).append_index_html_on_directories(true);

    data_routes(state)
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn planets(State(state): State<AppState>) -> Json<Vec<Planet>> {
    Json(state.catalog.planets.clone())
}

async fn markers(State(state): State<AppState>) -> Json<Vec<Marker>> {
    Json(state.catalog.markers.clone())
}

async fn healthz(State(state): State<AppState>) -> Json<Health> {
    let catalog = &state.catalog;
    Json(Health {
        status: "ok",
        planets: catalog.planets.len(),
        markers: catalog.markers.len(),
        rendered: catalog.rendered_count(),
    })
}
