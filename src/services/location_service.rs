//! Location resolution with a persistent cache in front of the geocoder.

use crate::clients::UpstreamError;
use crate::models::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location store unavailable: {0}")]
    Store(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Resolves free-text searches into geocoded locations.
///
/// Implementations must consult the store before calling the geocoder, so
/// a search text is geocoded at most once for as long as its row lives
/// (two concurrent first lookups may both reach the geocoder; the store
/// keeps only one row).
///
/// # Examples
///
/// ```rust,ignore
/// use city_explorer::services::{LocationError, LocationService};
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn LocationService>) -> Result<(), LocationError> {
///     let location = service.resolve("Seattle").await?;
///     println!("{} -> {},{}", location.formatted_query, location.latitude, location.longitude);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait LocationService: Send + Sync {
    /// Returns the cached location for `search_query`, geocoding and
    /// caching it on a miss.
    ///
    /// # Errors
    ///
    /// - [`LocationError::Store`] if the cache lookup fails
    /// - [`LocationError::Upstream`] if the geocoder fails or finds nothing
    ///
    /// A failure to write the cache after a successful geocode is not an
    /// error; the unsaved record is returned.
    async fn resolve(&self, search_query: &str) -> Result<Location, LocationError>;
}
