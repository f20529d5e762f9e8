use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::CoordinatesQuery;
use super::{ApiError, AppState};
use crate::models::Food;

pub async fn get_restaurants(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let Query(at) = query?;
    let places = state.shared.yelp.search_businesses(at.into()).await?;
    Ok(Json(places))
}
