use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{UpstreamError, endpoint, fetch_json};
use crate::config::ProviderConfig;
use crate::constants::providers::MEETUP_PAGE_SIZE;
use crate::models::resources::short_date_millis;
use crate::models::{Coordinates, Meetup};

const SERVICE: &str = "Meetup";
const EVENTS_PATH: &str = "/find/upcoming_events";

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    link: String,
    name: String,
    group: Option<Group>,
}

#[derive(Debug, Deserialize)]
struct Group {
    name: Option<String>,
    /// Epoch milliseconds. An unrepresentable value yields no `creation_date`.
    created: Option<i64>,
}

impl From<Event> for Meetup {
    fn from(event: Event) -> Self {
        let (host, created) = event
            .group
            .map_or((None, None), |g| (g.name, g.created));

        Self {
            link: event.link,
            name: event.name,
            host,
            creation_date: created.and_then(short_date_millis),
        }
    }
}

#[derive(Clone)]
pub struct MeetupClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MeetupClient {
    #[must_use]
    pub fn with_shared_client(client: Client, provider: &ProviderConfig) -> Self {
        Self {
            client,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    pub async fn upcoming_events(&self, at: Coordinates) -> Result<Vec<Meetup>, UpstreamError> {
        let mut url = endpoint(SERVICE, &self.base_url, EVENTS_PATH)?;
        url.query_pairs_mut()
            .append_pair("sign", "true")
            .append_pair("photo-host", "public")
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string())
            .append_pair("page", MEETUP_PAGE_SIZE)
            .append_pair("key", &self.api_key);

        debug!("Fetching meetups near {},{}", at.latitude, at.longitude);

        let response: EventsResponse = fetch_json(SERVICE, self.client.get(url)).await?;

        Ok(response.events.into_iter().map(Meetup::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_maps_host_and_creation_date() {
        let payload = serde_json::json!({
            "events": [
                {
                    "link": "https://www.meetup.com/seattlerust/events/1/",
                    "name": "Rust Hack Night",
                    "group": { "name": "Seattle Rust User Group", "created": 1_514_793_600_000_i64 }
                },
                { "link": "https://www.meetup.com/x/events/2/", "name": "Orphan event" }
            ]
        });

        let response: EventsResponse = serde_json::from_value(payload).unwrap();
        let meetups: Vec<Meetup> = response.events.into_iter().map(Meetup::from).collect();

        assert_eq!(meetups[0].host.as_deref(), Some("Seattle Rust User Group"));
        assert_eq!(meetups[0].creation_date.as_deref(), Some("Mon Jan 01 2018"));
        assert!(meetups[1].host.is_none());
        assert!(meetups[1].creation_date.is_none());
    }

    #[test]
    fn test_out_of_range_creation_leaves_date_empty() {
        let event = Event {
            link: "https://www.meetup.com/x/events/3/".to_string(),
            name: "Far future".to_string(),
            group: Some(Group {
                name: Some("Time Travellers".to_string()),
                created: Some(i64::MAX),
            }),
        };

        let meetup = Meetup::from(event);
        assert_eq!(meetup.host.as_deref(), Some("Time Travellers"));
        assert!(meetup.creation_date.is_none());
    }
}
