use crate::entities::{locations, prelude::*};
use crate::models::Location;
use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

/// Outcome of a cache lookup by search text.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(Location),
    Miss,
}

pub struct LocationRepository {
    conn: DatabaseConnection,
}

impl LocationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn lookup(&self, search_query: &str) -> Result<CacheLookup> {
        let row = Locations::find()
            .filter(locations::Column::SearchQuery.eq(search_query))
            .one(&self.conn)
            .await?;

        Ok(row.map_or(CacheLookup::Miss, |m| CacheLookup::Hit(m.into())))
    }

    /// Inserts the record unless a row with the same search text already
    /// exists, then returns whichever row is stored.
    pub async fn save(&self, location: &Location) -> Result<Option<Location>> {
        let active_model = locations::ActiveModel {
            search_query: Set(location.search_query.clone()),
            formatted_query: Set(location.formatted_query.clone()),
            latitude: Set(location.latitude),
            longitude: Set(location.longitude),
            created_at: Set(location.created_at.clone()),
            ..Default::default()
        };

        Locations::insert(active_model)
            .on_conflict(
                OnConflict::column(locations::Column::SearchQuery)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        match self.lookup(&location.search_query).await? {
            CacheLookup::Hit(stored) => Ok(Some(stored)),
            CacheLookup::Miss => Ok(None),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Location>> {
        let row = Locations::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Location::from))
    }

    pub async fn count_by_query(&self, search_query: &str) -> Result<u64> {
        let count = Locations::find()
            .filter(locations::Column::SearchQuery.eq(search_query))
            .count(&self.conn)
            .await?;
        Ok(count)
    }
}
