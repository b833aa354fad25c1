//! HTTP error mapping
//!
//! Every failure path renders `{"error": "..."}` with the status chosen here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use backend_types::{ErrorBody, ValidationError};
use thiserror::Error;

use crate::storage::{CacheError, StoreError};

pub const DATABASE_UNAVAILABLE: &str = "Database not available";
pub const CACHE_UNAVAILABLE: &str = "Redis not available";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad or missing request input
    #[error("{0}")]
    Validation(String),

    /// A backing dependency could not be reached
    #[error("{0}")]
    Unavailable(String),

    /// The store or cache rejected an operation; carries the raw error text
    #[error("{0}")]
    Operation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(_) => ApiError::Unavailable(DATABASE_UNAVAILABLE.to_string()),
            StoreError::Query(e) => ApiError::Operation(e.to_string()),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(e: CacheError) -> Self {
        match e {
            CacheError::Disabled => ApiError::Unavailable(CACHE_UNAVAILABLE.to_string()),
            CacheError::Command(e) => ApiError::Operation(e.to_string()),
        }
    }
}
