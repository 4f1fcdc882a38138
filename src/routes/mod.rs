//! Rutas de la API
//!
//! Cada recurso expone su propio router; aquí se montan bajo `/api` junto
//! con el health check y las capas de CORS y trazas.

pub mod refuel_routes;
pub mod station_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::middleware::cors_middleware;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    if state.config.is_production() && state.config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se aceptan peticiones de cualquier origen");
    }
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/refuel", refuel_routes::create_refuel_router())
        .nest("/api/station", station_routes::create_station_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fuel-tracker",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
