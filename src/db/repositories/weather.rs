use crate::entities::{prelude::*, weathers};
use crate::models::Weather;
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct WeatherRepository {
    conn: DatabaseConnection,
}

impl WeatherRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn save_many(&self, location_id: i32, forecasts: &[Weather]) -> Result<()> {
        if forecasts.is_empty() {
            return Ok(());
        }

        let created_at = chrono::Utc::now().to_rfc3339();
        let models = forecasts.iter().map(|w| weathers::ActiveModel {
            forecast: Set(w.forecast.clone()),
            time: Set(w.time.clone()),
            created_at: Set(created_at.clone()),
            location_id: Set(location_id),
            ..Default::default()
        });

        Weathers::insert_many(models).exec(&self.conn).await?;
        Ok(())
    }

    pub async fn list_for_location(&self, location_id: i32) -> Result<Vec<Weather>> {
        let rows = Weathers::find()
            .filter(weathers::Column::LocationId.eq(location_id))
            .order_by_asc(weathers::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| Weather {
                forecast: m.forecast,
                time: m.time,
            })
            .collect())
    }

    pub async fn delete_for_location(&self, location_id: i32) -> Result<u64> {
        let result = Weathers::delete_many()
            .filter(weathers::Column::LocationId.eq(location_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
