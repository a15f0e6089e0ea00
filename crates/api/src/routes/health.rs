//! `GET /health`: liveness plus a database round-trip.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database did not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// Always 200; an unreachable database only downgrades the status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = squad_builder_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }
    Json(HealthResponse::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
