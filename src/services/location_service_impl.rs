use std::sync::Arc;

use tracing::{debug, info, warn};

use super::location_service::{LocationError, LocationService};
use crate::clients::GeocodeClient;
use crate::db::{CacheLookup, Store};
use crate::models::Location;

pub struct SeaOrmLocationService {
    store: Store,
    geocoder: Arc<GeocodeClient>,
}

impl SeaOrmLocationService {
    #[must_use]
    pub const fn new(store: Store, geocoder: Arc<GeocodeClient>) -> Self {
        Self { store, geocoder }
    }

    async fn lookup(&self, search_query: &str) -> Result<CacheLookup, LocationError> {
        self.store
            .lookup_location(search_query)
            .await
            .map_err(|e| LocationError::Store(e.to_string()))
    }

    /// Best-effort cache write. Returns the stored row when there is one,
    /// otherwise the in-memory record.
    async fn persist(&self, location: Location) -> Location {
        match self.store.save_location(&location).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                warn!(
                    "Location '{}' was not visible after saving; returning unsaved record",
                    location.search_query
                );
                location
            }
            Err(e) => {
                warn!(
                    "Failed to cache location '{}': {}",
                    location.search_query, e
                );
                location
            }
        }
    }
}

#[async_trait::async_trait]
impl LocationService for SeaOrmLocationService {
    async fn resolve(&self, search_query: &str) -> Result<Location, LocationError> {
        if let CacheLookup::Hit(location) = self.lookup(search_query).await? {
            debug!("Location cache hit for '{}'", search_query);
            metrics::counter!("location_cache_lookups_total", "result" => "hit").increment(1);
            return Ok(location);
        }

        metrics::counter!("location_cache_lookups_total", "result" => "miss").increment(1);

        let found = self.geocoder.geocode(search_query).await?;
        let location = Location::new(search_query, found.formatted_address, found.coordinates);

        info!(
            "Geocoded '{}' to {} ({}, {})",
            search_query, location.formatted_query, location.latitude, location.longitude
        );

        Ok(self.persist(location).await)
    }
}
