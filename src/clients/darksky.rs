use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::models::resources::short_date;
use crate::models::{Coordinates, Weather};

const SERVICE: &str = "Dark Sky";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    data: Vec<DailyPoint>,
}

#[derive(Debug, Deserialize)]
struct DailyPoint {
    #[serde(default)]
    summary: String,
    time: i64,
}

impl TryFrom<DailyPoint> for Weather {
    type Error = UpstreamError;

    fn try_from(day: DailyPoint) -> Result<Self, Self::Error> {
        let time = short_date(day.time).ok_or_else(|| UpstreamError::Malformed {
            service: SERVICE,
            message: format!("daily time {} is out of range", day.time),
        })?;

        Ok(Self {
            forecast: day.summary,
            time,
        })
    }
}

/// Daily forecast client. The API key is part of the request path.
#[derive(Clone)]
pub struct DarkSkyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DarkSkyClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    pub async fn daily_forecast(&self, at: Coordinates) -> Result<Vec<Weather>, UpstreamError> {
        let path = format!("/forecast/{}/{},{}", self.api_key, at.latitude, at.longitude);
        let url = endpoint(SERVICE, &self.base_url, &path)?;

        debug!("Fetching daily forecast for {},{}", at.latitude, at.longitude);

        let response: ForecastResponse = fetch_json(SERVICE, self.client.get(url)).await?;

        response
            .daily
            .data
            .into_iter()
            .map(Weather::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_points_map_to_weather() {
        let payload = serde_json::json!({
            "latitude": 47.6,
            "daily": {
                "summary": "Rain all week.",
                "data": [
                    { "time": 1_514_793_600, "summary": "Foggy in the morning.", "icon": "fog" },
                    { "time": 1_514_880_000, "summary": "Rain starting in the afternoon." }
                ]
            }
        });

        let response: ForecastResponse = serde_json::from_value(payload).unwrap();
        let weather: Vec<Weather> = response
            .daily
            .data
            .into_iter()
            .map(Weather::try_from)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(weather.len(), 2);
        assert_eq!(weather[0].forecast, "Foggy in the morning.");
        assert_eq!(weather[0].time, "Mon Jan 01 2018");
        assert_eq!(weather[1].time, "Tue Jan 02 2018");
    }

    #[test]
    fn test_out_of_range_time_is_malformed() {
        let day = DailyPoint {
            summary: "x".to_string(),
            time: i64::MAX,
        };

        let err = Weather::try_from(day).unwrap_err();
        assert!(matches!(err, UpstreamError::Malformed { service: "Dark Sky", .. }));
    }
}
