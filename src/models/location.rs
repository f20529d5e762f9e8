use serde::{Deserialize, Serialize};

use crate::entities::locations;

/// A geocoded search. `search_query` is the cache key; `id` is only present
/// once the record has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
}

impl Location {
    /// Builds an unsaved record stamped with the current time.
    pub fn new(
        search_query: impl Into<String>,
        formatted_query: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: None,
            search_query: search_query.into(),
            formatted_query: formatted_query.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl From<locations::Model> for Location {
    fn from(model: locations::Model) -> Self {
        Self {
            id: Some(model.id),
            search_query: model.search_query,
            formatted_query: model.formatted_query,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_location_is_unsaved_and_stamped() {
        let location = Location::new(
            "mountain view",
            "1600 Amphitheatre Parkway",
            Coordinates::new(37.4, -122.1),
        );

        assert!(!location.is_persisted());
        assert!(chrono::DateTime::parse_from_rfc3339(&location.created_at).is_ok());
        assert!((location.latitude - 37.4).abs() < f64::EPSILON);
        assert!((location.longitude + 122.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unsaved_location_omits_id() {
        let location = Location::new("seattle", "Seattle, WA, USA", Coordinates::new(47.6, -122.3));
        let json = serde_json::to_value(&location).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["search_query"], "seattle");
        assert_eq!(json["formatted_query"], "Seattle, WA, USA");
    }
}
