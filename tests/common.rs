//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use city_explorer::api::AppState;
use city_explorer::config::{Config, ProviderConfig};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub const API_KEY: &str = "test-key";

/// Points every provider at `base_url` and uses a throwaway SQLite file.
pub fn test_config(base_url: &str) -> Config {
    let db_path = std::env::temp_dir().join(format!(
        "city-explorer-test-{}.db",
        uuid::Uuid::new_v4()
    ));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.general.request_timeout_seconds = 5;
    config.observability.metrics_enabled = false;

    let provider = ProviderConfig {
        base_url: base_url.to_string(),
        api_key: API_KEY.to_string(),
    };
    config.providers.geocode = provider.clone();
    config.providers.weather = provider.clone();
    config.providers.yelp = provider.clone();
    config.providers.movies = provider.clone();
    config.providers.meetups = provider.clone();
    config.providers.trails = provider;

    config
}

pub async fn spawn_app(base_url: &str) -> (Arc<AppState>, Router) {
    let state = city_explorer::api::create_app_state_from_config(test_config(base_url), None)
        .await
        .expect("failed to create app state");
    let router = city_explorer::api::router(state.clone());
    (state, router)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> serde_json::Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "GET {uri} failed: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).unwrap()
}
