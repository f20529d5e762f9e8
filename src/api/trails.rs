use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::CoordinatesQuery;
use super::{ApiError, AppState};
use crate::models::Trail;

pub async fn get_trails(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Result<Json<Vec<Trail>>, ApiError> {
    let Query(at) = query?;
    let trails = state.shared.trails.nearby_trails(at.into()).await?;
    Ok(Json(trails))
}
