//! Router-level behavior: status probe, fallback, database wiring

use axum::{body::Body, http::Request};
use conduit::backend::create_app;
use conduit::shared::AppConfig;
use serde_json::json;
use tower::ServiceExt;

use crate::assert_error_body;
use crate::common::TestApp;

#[tokio::test]
async fn test_status() {
    let app = TestApp::new().await;
    let response = app.get("/status", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"status": "ok", "database": true}));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let response = app.get("/api/nope", None).await;
    assert_error_body!(response, 404, "route not found");
}

#[tokio::test]
async fn test_tags_empty() {
    let app = TestApp::new().await;
    let response = app.get("/api/tags", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"tags": []}));
}

#[tokio::test]
async fn test_file_database_is_created_and_migrated() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("conduit.db");
    let config = AppConfig::builder()
        .database_url(format!("sqlite://{}", path.display()))
        .bcrypt_cost(4)
        .build()
        .expect("config");

    let router = create_app(config).await;
    assert!(path.exists());
    let response = router
        .oneshot(Request::builder().uri("/api/tags").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_missing_database_answers_503() {
    let config = AppConfig::builder()
        .database_url("sqlite:///nonexistent-conduit-dir/nested/conduit.db")
        .build()
        .expect("config");

    let router = create_app(config).await;
    let response = router
        .oneshot(Request::builder().uri("/api/tags").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 503);
}
