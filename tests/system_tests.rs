mod common;

use axum::http::StatusCode;
use common::{get, spawn_app};

#[tokio::test]
async fn test_health_pings_store() {
    let (_, app) = spawn_app("http://127.0.0.1:1").await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let (_, app) = spawn_app("http://127.0.0.1:1").await;

    let (status, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("not enabled"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (_, app) = spawn_app("http://127.0.0.1:1").await;

    let (status, _) = get(&app, "/restaurants").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
