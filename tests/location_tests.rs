//! `/location`: cache lookup in front of the geocoder.

mod common;

use axum::http::StatusCode;
use city_explorer::constants::ERROR_BODY;
use common::{API_KEY, get, get_json, spawn_app};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

fn geocode_payload() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "formatted_address": "1600 Amphitheatre Parkway",
            "geometry": { "location": { "lat": 37.4, "lng": -122.1 } }
        }],
        "status": "OK"
    })
}

#[tokio::test]
async fn test_location_is_geocoded_once_then_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param("address", "mountain view"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let (state, app) = spawn_app(&server.uri()).await;

    let first = get_json(&app, "/location?data=mountain%20view").await;
    assert_eq!(first["search_query"], "mountain view");
    assert_eq!(first["formatted_query"], "1600 Amphitheatre Parkway");
    assert_eq!(first["latitude"], 37.4);
    assert_eq!(first["longitude"], -122.1);
    assert!(first["created_at"].as_str().is_some_and(|s| !s.is_empty()));

    let second = get_json(&app, "/location?data=mountain%20view").await;
    assert_eq!(second, first);

    assert_eq!(
        state
            .store()
            .count_locations_by_query("mountain view")
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_concurrent_first_lookups_store_one_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_payload()))
        .mount(&server)
        .await;

    let (state, app) = spawn_app(&server.uri()).await;

    let uri = "/location?data=googleplex";
    let (a, b, c) = tokio::join!(get_json(&app, uri), get_json(&app, uri), get_json(&app, uri));

    assert_eq!(a["formatted_query"], "1600 Amphitheatre Parkway");
    assert_eq!(a["formatted_query"], b["formatted_query"]);
    assert_eq!(b["formatted_query"], c["formatted_query"]);

    assert_eq!(
        state
            .store()
            .count_locations_by_query("googleplex")
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_distinct_searches_are_cached_separately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let (_, app) = spawn_app(&server.uri()).await;

    let lower = get_json(&app, "/location?data=seattle").await;
    let upper = get_json(&app, "/location?data=Seattle").await;

    assert_ne!(lower["id"], upper["id"]);
}

#[tokio::test]
async fn test_zero_results_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "results": [], "status": "ZERO_RESULTS" })),
        )
        .mount(&server)
        .await;

    let (state, app) = spawn_app(&server.uri()).await;

    let (status, body) = get(&app, "/location?data=atlantis").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, ERROR_BODY.as_bytes());

    assert_eq!(
        state.store().count_locations_by_query("atlantis").await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_missing_query_is_500() {
    let server = MockServer::start().await;
    let (_, app) = spawn_app(&server.uri()).await;

    let (status, body) = get(&app, "/location").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, ERROR_BODY.as_bytes());
}
