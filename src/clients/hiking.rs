use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::constants::providers::TRAILS_MAX_DISTANCE;
use crate::models::resources::split_condition_date;
use crate::models::{Coordinates, Trail};

const SERVICE: &str = "Hiking Project";
const TRAILS_PATH: &str = "/data/get-trails";

#[derive(Debug, Deserialize)]
struct TrailsResponse {
    #[serde(default)]
    trails: Vec<TrailItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrailItem {
    name: String,
    location: Option<String>,
    length: Option<f64>,
    stars: Option<f64>,
    star_votes: Option<i64>,
    summary: Option<String>,
    url: Option<String>,
    condition_status: Option<String>,
    condition_date: Option<String>,
}

impl From<TrailItem> for Trail {
    fn from(item: TrailItem) -> Self {
        let (condition_date, condition_time) = split_condition_date(item.condition_date.as_deref());

        Self {
            name: item.name,
            location: item.location,
            length: item.length,
            stars: item.stars,
            star_votes: item.star_votes,
            summary: item.summary,
            trail_url: item.url,
            conditions: item.condition_status,
            condition_date,
            condition_time,
        }
    }
}

#[derive(Clone)]
pub struct HikingClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HikingClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    pub async fn nearby_trails(&self, at: Coordinates) -> Result<Vec<Trail>, UpstreamError> {
        let mut url = endpoint(SERVICE, &self.base_url, TRAILS_PATH)?;
        url.query_pairs_mut()
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string())
            .append_pair("maxDistance", TRAILS_MAX_DISTANCE)
            .append_pair("key", &self.api_key);

        debug!("Fetching trails near {},{}", at.latitude, at.longitude);

        let response: TrailsResponse = fetch_json(SERVICE, self.client.get(url)).await?;

        Ok(response.trails.into_iter().map(Trail::from).collect())
    }
}
