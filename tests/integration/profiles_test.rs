//! Profile API integration tests

use serde_json::json;

use crate::assert_error_body;
use crate::common::{register_user, TestApp};

#[tokio::test]
async fn test_get_profile_anonymous() {
    let app = TestApp::new().await;
    register_user(&app, "jake").await;

    let response = app.get("/api/profiles/jake", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["profile"]["username"], "jake");
    assert_eq!(response.body["profile"]["following"], false);
}

#[tokio::test]
async fn test_unknown_profile() {
    let app = TestApp::new().await;
    let response = app.get("/api/profiles/nobody", None).await;
    assert_error_body!(response, 404, "profile not found");
}

#[tokio::test]
async fn test_follow_and_unfollow() {
    let app = TestApp::new().await;
    register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;

    let followed = app
        .post("/api/profiles/jake/follow", json!({}), Some(&ann.token))
        .await;
    assert_eq!(followed.status, 200);
    assert_eq!(followed.body["profile"]["following"], true);

    let seen = app.get("/api/profiles/jake", Some(&ann.token)).await;
    assert_eq!(seen.body["profile"]["following"], true);

    let unfollowed = app.delete("/api/profiles/jake/follow", Some(&ann.token)).await;
    assert_eq!(unfollowed.status, 200);
    assert_eq!(unfollowed.body["profile"]["following"], false);
}

#[tokio::test]
async fn test_follow_requires_auth() {
    let app = TestApp::new().await;
    register_user(&app, "jake").await;

    let response = app.post("/api/profiles/jake/follow", json!({}), None).await;
    assert_eq!(response.status, 401);
}

#[tokio::test]
async fn test_cannot_follow_self() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;

    let response = app
        .post("/api/profiles/jake/follow", json!({}), Some(&jake.token))
        .await;
    assert_error_body!(response, 422, "you cannot follow yourself");
}
