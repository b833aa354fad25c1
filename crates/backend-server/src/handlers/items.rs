//! Item handlers

use crate::error::ApiError;
use crate::storage::StoreError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use backend_types::{CreateItemRequest, CreatedItem, Item, NewItem};
use tracing::{debug, error, warn};

fn log_store_error(action: &str, e: &StoreError) {
    match e {
        StoreError::Unavailable(_) => warn!("Cannot {}: database not available", action),
        StoreError::Query(e) => error!("Failed to {}: {}", action, e),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.catalog.list().await.map_err(|e| {
        log_store_error("list items", &e);
        ApiError::from(e)
    })?;

    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedItem>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected item body: {}", e);
        ApiError::Validation(e.body_text())
    })?;

    let item = NewItem::try_from(req).map_err(|e| {
        debug!("Rejected item: {}", e);
        ApiError::from(e)
    })?;

    let id = state.catalog.create(&item).await.map_err(|e| {
        log_store_error("create item", &e);
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(CreatedItem::new(id, item))))
}
