use std::sync::Arc;

use crate::clients::{
    DarkSkyClient, GeocodeClient, HikingClient, MeetupClient, TmdbClient, YelpClient,
};
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::db::Store;
use crate::services::{LocationService, SeaOrmLocationService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client should be reused across all upstream clients to enable
/// connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub geocode: Arc<GeocodeClient>,

    pub weather: Arc<DarkSkyClient>,

    pub yelp: Arc<YelpClient>,

    pub movies: Arc<TmdbClient>,

    pub meetups: Arc<MeetupClient>,

    pub trails: Arc<HikingClient>,

    pub location_service: Arc<dyn LocationService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Self::with_store(config, store)
    }

    /// Wires every client and service around an already connected store.
    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let http_client = build_shared_http_client(config.general.request_timeout_seconds.into())?;
        let providers = &config.providers;

        let geocode = Arc::new(GeocodeClient::with_shared_client(
            http_client.clone(),
            &providers.geocode,
        ));
        let weather = Arc::new(DarkSkyClient::with_shared_client(
            http_client.clone(),
            &providers.weather,
        ));
        let yelp = Arc::new(YelpClient::with_shared_client(
            http_client.clone(),
            &providers.yelp,
        ));
        let movies = Arc::new(TmdbClient::with_shared_client(
            http_client.clone(),
            &providers.movies,
        ));
        let meetups = Arc::new(MeetupClient::with_shared_client(
            http_client.clone(),
            &providers.meetups,
        ));
        let trails = Arc::new(HikingClient::with_shared_client(
            http_client,
            &providers.trails,
        ));

        let location_service = Arc::new(SeaOrmLocationService::new(store.clone(), geocode.clone()))
            as Arc<dyn LocationService + Send + Sync + 'static>;

        Ok(Self {
            config: Arc::new(config),
            store,
            geocode,
            weather,
            yelp,
            movies,
            meetups,
            trails,
            location_service,
        })
    }
}
