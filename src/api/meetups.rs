use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::CoordinatesQuery;
use super::{ApiError, AppState};
use crate::models::Meetup;

pub async fn get_meetups(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Result<Json<Vec<Meetup>>, ApiError> {
    let Query(at) = query?;
    let events = state.shared.meetups.upcoming_events(at.into()).await?;
    Ok(Json(events))
}
