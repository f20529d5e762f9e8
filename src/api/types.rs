use serde::Deserialize;

use crate::models::Coordinates;

/// Free-text search, sent as `?data=<text>`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "data", alias = "query", alias = "data[search_query]")]
    pub text: String,
}

/// Coordinates, sent either nested (`?data[latitude]=..&data[longitude]=..`)
/// the way browser clients serialize a location object, or flat.
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    #[serde(rename = "data[latitude]", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "data[longitude]", alias = "longitude")]
    pub longitude: f64,
}

impl From<CoordinatesQuery> for Coordinates {
    fn from(query: CoordinatesQuery) -> Self {
        Self::new(query.latitude, query.longitude)
    }
}
