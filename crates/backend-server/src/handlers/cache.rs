//! Cache round-trip diagnostic

use crate::error::ApiError;
use crate::storage::CacheError;
use crate::AppState;
use axum::{extract::State, Json};
use backend_types::CacheTestResponse;
use std::time::Duration;
use tracing::error;

pub const TEST_KEY: &str = "test_key";
pub const TEST_VALUE: &str = "Hello from Redis!";
const TEST_TTL: Duration = Duration::from_secs(60);

pub async fn smoke_test(
    State(state): State<AppState>,
) -> Result<Json<CacheTestResponse>, ApiError> {
    if !state.cache.is_enabled() {
        return Err(CacheError::Disabled.into());
    }

    let test_value = round_trip(&state).await.map_err(|e| {
        error!("Cache test failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(CacheTestResponse {
        cache: "working".to_string(),
        test_value,
    }))
}

async fn round_trip(state: &AppState) -> Result<Option<String>, CacheError> {
    state
        .cache
        .set_with_expiry(TEST_KEY, TEST_VALUE, TEST_TTL)
        .await?;
    state.cache.get(TEST_KEY).await
}
