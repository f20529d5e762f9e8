use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::types::CoordinatesQuery;
use super::{ApiError, AppState};
use crate::models::Weather;

pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Result<Json<Vec<Weather>>, ApiError> {
    let Query(at) = query?;
    let forecasts = state.shared.weather.daily_forecast(at.into()).await?;
    Ok(Json(forecasts))
}
