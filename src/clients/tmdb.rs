use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::constants::providers::TMDB_POSTER_BASE;
use crate::models::Movie;

const SERVICE: &str = "TMDB";
const SEARCH_PATH: &str = "/3/search/movie";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieResult>,
}

#[derive(Debug, Deserialize)]
struct MovieResult {
    title: String,
    release_date: Option<String>,
    vote_count: Option<i64>,
    vote_average: Option<f64>,
    popularity: Option<f64>,
    poster_path: Option<String>,
    overview: Option<String>,
}

impl From<MovieResult> for Movie {
    fn from(item: MovieResult) -> Self {
        Self {
            title: item.title,
            released_on: item.release_date,
            total_votes: item.vote_count,
            average_votes: item.vote_average,
            popularity: item.popularity,
            image_url: item.poster_path.as_deref().map(poster_url),
            overview: item.overview,
        }
    }
}

fn poster_url(poster_path: &str) -> String {
    format!("{TMDB_POSTER_BASE}/{}", poster_path.trim_start_matches('/'))
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    /// The search term is sent as given; `Url` percent-encodes it once.
    pub async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, UpstreamError> {
        let mut url = endpoint(SERVICE, &self.base_url, SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("query", term);

        debug!("Searching movies for '{}'", term);

        let response: SearchResponse = fetch_json(SERVICE, self.client.get(url)).await?;

        Ok(response.results.into_iter().map(Movie::from).collect())
    }
}
