use axum::extract::State;
use std::sync::Arc;

use super::{ApiError, AppState};

pub async fn health(State(state): State<Arc<AppState>>) -> Result<&'static str, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::internal(format!("Store ping failed: {e}")))?;
    Ok("OK")
}
