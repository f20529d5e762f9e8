use crate::models::{Location, Weather};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::location::CacheLookup;

/// Handle to the relational store. Cloning is cheap; clones share the pool.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        // Every pooled connection to an in-memory database would see its own empty schema
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn location_repo(&self) -> repositories::location::LocationRepository {
        repositories::location::LocationRepository::new(self.conn.clone())
    }

    fn weather_repo(&self) -> repositories::weather::WeatherRepository {
        repositories::weather::WeatherRepository::new(self.conn.clone())
    }

    pub async fn lookup_location(&self, search_query: &str) -> Result<CacheLookup> {
        self.location_repo().lookup(search_query).await
    }

    /// Stores `location` unless its search text is already cached. Returns
    /// the row that ends up stored, which may be another writer's.
    pub async fn save_location(&self, location: &Location) -> Result<Option<Location>> {
        self.location_repo().save(location).await
    }

    pub async fn get_location(&self, id: i32) -> Result<Option<Location>> {
        self.location_repo().get(id).await
    }

    pub async fn count_locations_by_query(&self, search_query: &str) -> Result<u64> {
        self.location_repo().count_by_query(search_query).await
    }

    pub async fn save_weathers(&self, location_id: i32, forecasts: &[Weather]) -> Result<()> {
        self.weather_repo().save_many(location_id, forecasts).await
    }

    pub async fn weathers_for_location(&self, location_id: i32) -> Result<Vec<Weather>> {
        self.weather_repo().list_for_location(location_id).await
    }

    /// Removes the auxiliary rows recorded for one location. The location
    /// row itself is kept.
    pub async fn delete_by_location_id(&self, location_id: i32) -> Result<u64> {
        self.weather_repo().delete_for_location(location_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    async fn memory_store() -> Store {
        Store::new("sqlite::memory:").await.unwrap()
    }

    fn googleplex() -> Location {
        Location::new(
            "mountain view",
            "1600 Amphitheatre Parkway",
            Coordinates::new(37.4, -122.1),
        )
    }

    #[tokio::test]
    async fn test_lookup_miss_then_hit() {
        let store = memory_store().await;

        assert_eq!(
            store.lookup_location("mountain view").await.unwrap(),
            CacheLookup::Miss
        );

        let saved = store.save_location(&googleplex()).await.unwrap().unwrap();
        assert!(saved.is_persisted());

        match store.lookup_location("mountain view").await.unwrap() {
            CacheLookup::Hit(hit) => assert_eq!(hit, saved),
            CacheLookup::Miss => panic!("expected a cache hit"),
        }
    }

    #[tokio::test]
    async fn test_lookup_is_exact_match() {
        let store = memory_store().await;
        store.save_location(&googleplex()).await.unwrap();

        assert_eq!(
            store.lookup_location("Mountain View").await.unwrap(),
            CacheLookup::Miss
        );
        assert_eq!(
            store.lookup_location("mountain view ").await.unwrap(),
            CacheLookup::Miss
        );
    }

    #[tokio::test]
    async fn test_save_ignores_conflicting_search_query() {
        let store = memory_store().await;

        let first = store.save_location(&googleplex()).await.unwrap().unwrap();

        let mut other = googleplex();
        other.formatted_query = "Somewhere else".to_string();
        let second = store.save_location(&other).await.unwrap().unwrap();

        assert_eq!(second, first);
        assert_eq!(
            store.count_locations_by_query("mountain view").await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_weathers_round_trip_and_delete_by_location() {
        let store = memory_store().await;
        let location = store.save_location(&googleplex()).await.unwrap().unwrap();
        let location_id = location.id.unwrap();

        let forecasts = vec![
            Weather {
                forecast: "Clear throughout the day.".to_string(),
                time: "Mon Jan 01 2018".to_string(),
            },
            Weather {
                forecast: "Light rain in the morning.".to_string(),
                time: "Tue Jan 02 2018".to_string(),
            },
        ];

        store.save_weathers(location_id, &forecasts).await.unwrap();
        store.save_weathers(location_id, &[]).await.unwrap();

        assert_eq!(
            store.weathers_for_location(location_id).await.unwrap(),
            forecasts
        );

        assert_eq!(store.delete_by_location_id(location_id).await.unwrap(), 2);
        assert!(store.weathers_for_location(location_id).await.unwrap().is_empty());
        assert!(store.get_location(location_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_ping() {
        let store = memory_store().await;
        assert!(store.ping().await.is_ok());
    }
}
