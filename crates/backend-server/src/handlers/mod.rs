//! HTTP handlers

pub mod cache;
pub mod health;
pub mod items;

pub use health::{health, status};

use axum::{http::StatusCode, Json};
use backend_types::ErrorBody;

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
