use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::SearchQuery;
use super::{ApiError, AppState};
use crate::models::Movie;

pub async fn get_movies(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(search) = query?;
    let movies = state.shared.movies.search_movies(&search.text).await?;
    Ok(Json(movies))
}
