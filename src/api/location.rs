use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::SearchQuery;
use super::{ApiError, AppState};
use crate::models::Location;

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Location>, ApiError> {
    let Query(search) = query?;
    let location = state.location_service().resolve(&search.text).await?;
    Ok(Json(location))
}
