use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::models::{Coordinates, Food};

const SERVICE: &str = "Yelp";
const SEARCH_PATH: &str = "/v3/businesses/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
struct Business {
    name: String,
    rating: Option<f64>,
    price: Option<String>,
    image_url: Option<String>,
    url: Option<String>,
}

impl From<Business> for Food {
    fn from(place: Business) -> Self {
        Self {
            name: place.name,
            rating: place.rating,
            price: place.price,
            image_url: place.image_url,
            url: place.url,
        }
    }
}

/// Business search client, authenticated with a bearer token.
#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YelpClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    pub async fn search_businesses(&self, at: Coordinates) -> Result<Vec<Food>, UpstreamError> {
        let mut url = endpoint(SERVICE, &self.base_url, SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("latitude", &at.latitude.to_string())
            .append_pair("longitude", &at.longitude.to_string());

        debug!("Searching businesses near {},{}", at.latitude, at.longitude);

        let request = self.client.get(url).bearer_auth(&self.api_key);
        let response: SearchResponse = fetch_json(SERVICE, request).await?;

        Ok(response.businesses.into_iter().map(Food::from).collect())
    }
}
