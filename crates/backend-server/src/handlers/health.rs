//! Liveness and dependency status handlers

use crate::AppState;
use axum::{extract::State, Json};
use backend_types::{DependencyStatus, HealthResponse, StatusResponse};
use chrono::NaiveDateTime;
use tracing::debug;

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Process liveness. Touches no dependency.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(now()))
}

/// Probe Redis and PostgreSQL on every call; each degrades independently.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let (redis_up, db_up) = tokio::join!(state.cache.ping(), state.catalog.is_reachable());

    let redis = DependencyStatus::from_reachable(redis_up);
    let database = DependencyStatus::from_reachable(db_up);
    debug!("Dependency status: redis={}, database={}", redis, database);

    Json(StatusResponse {
        api: "running".to_string(),
        redis,
        database,
        timestamp: now(),
    })
}
