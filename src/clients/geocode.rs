use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::models::Coordinates;

const SERVICE: &str = "Geocoding";
const GEOCODE_PATH: &str = "/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// First candidate of a forward geocode.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub formatted_address: String,
    pub coordinates: Coordinates,
}

#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    pub async fn geocode(&self, address: &str) -> Result<GeocodeMatch, UpstreamError> {
        let mut url = endpoint(SERVICE, &self.base_url, GEOCODE_PATH)?;
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        debug!("Geocoding '{}'", address);

        let response: GeocodeResponse = fetch_json(SERVICE, self.client.get(url)).await?;

        let Some(first) = response.results.into_iter().next() else {
            debug!(
                "Geocoding returned no results (status: {}, message: {})",
                response.status.as_deref().unwrap_or("unknown"),
                response.error_message.as_deref().unwrap_or("none")
            );
            return Err(UpstreamError::NoResults { service: SERVICE });
        };

        Ok(GeocodeMatch {
            formatted_address: first.formatted_address,
            coordinates: Coordinates::new(first.geometry.location.lat, first.geometry.location.lng),
        })
    }
}
