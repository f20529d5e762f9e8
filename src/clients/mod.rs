//! HTTP clients for the third-party content APIs.
//!
//! Each client issues exactly one GET per call and maps the upstream items
//! into the normalized records in [`crate::models`]. Nothing here retries.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub mod darksky;
pub mod geocode;
pub mod hiking;
pub mod meetup;
pub mod tmdb;
pub mod yelp;

pub use darksky::DarkSkyClient;
pub use geocode::{GeocodeClient, GeocodeMatch};
pub use hiking::HikingClient;
pub use meetup::MeetupClient;
pub use tmdb::TmdbClient;
pub use yelp::YelpClient;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{service} request failed: {source}")]
    Unavailable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with status {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
    },

    #[error("{service} returned an unexpected payload: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned no results")]
    NoResults { service: &'static str },

    #[error("invalid {service} URL: {source}")]
    InvalidUrl {
        service: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl UpstreamError {
    #[must_use]
    pub const fn service(&self) -> &'static str {
        match self {
            Self::Unavailable { service, .. }
            | Self::Status { service, .. }
            | Self::Malformed { service, .. }
            | Self::NoResults { service }
            | Self::InvalidUrl { service, .. } => service,
        }
    }
}

/// Joins a configured base URL and an API path.
pub(crate) fn endpoint(service: &'static str, base_url: &str, path: &str) -> Result<Url, UpstreamError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|source| UpstreamError::InvalidUrl { service, source })
}

/// Sends the request and decodes a 2xx JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|source| UpstreamError::Unavailable { service, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { service, status });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| UpstreamError::Unavailable { service, source })?;

    serde_json::from_slice(&body).map_err(|e| UpstreamError::Malformed {
        service,
        message: e.to_string(),
    })
}
