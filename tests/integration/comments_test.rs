//! Comment API integration tests

use serde_json::json;

use crate::common::{create_article, register_user, TestApp};
use crate::{assert_error_body, assert_field_error};

#[tokio::test]
async fn test_comment_lifecycle() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let slug = create_article(&app, &jake, "Talk to me", &[]).await;
    let uri = format!("/api/articles/{}/comments", slug);

    let added = app
        .post(&uri, json!({"comment": {"body": "Thank you so much!"}}), Some(&jake.token))
        .await;
    assert_eq!(added.status, 200);
    let comment = &added.body["comment"];
    assert_eq!(comment["body"], "Thank you so much!");
    assert_eq!(comment["author"]["username"], "jake");
    assert!(comment["createdAt"].as_str().is_some_and(|t| t.ends_with('Z')));
    let id = comment["id"].as_i64().expect("comment id");

    let listed = app.get(&uri, None).await;
    assert_eq!(listed.body["comments"].as_array().map(Vec::len), Some(1));

    let deleted = app
        .delete(&format!("{}/{}", uri, id), Some(&jake.token))
        .await;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body, json!({}));

    let listed = app.get(&uri, None).await;
    assert_eq!(listed.body["comments"], json!([]));
}

#[tokio::test]
async fn test_comments_newest_first() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let slug = create_article(&app, &jake, "Busy thread", &[]).await;
    let uri = format!("/api/articles/{}/comments", slug);

    for body in ["one", "two", "three"] {
        app.post(&uri, json!({"comment": {"body": body}}), Some(&jake.token))
            .await;
    }

    let listed = app.get(&uri, None).await;
    let bodies: Vec<&str> = listed.body["comments"]
        .as_array()
        .expect("comments array")
        .iter()
        .filter_map(|c| c["body"].as_str())
        .collect();
    assert_eq!(bodies, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_blank_comment() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let slug = create_article(&app, &jake, "Quiet", &[]).await;

    let response = app
        .post(
            &format!("/api/articles/{}/comments", slug),
            json!({"comment": {"body": ""}}),
            Some(&jake.token),
        )
        .await;
    assert_field_error!(response, "body");
}

#[tokio::test]
async fn test_delete_someone_elses_comment() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    let slug = create_article(&app, &jake, "Mine", &[]).await;
    let uri = format!("/api/articles/{}/comments", slug);

    let added = app
        .post(&uri, json!({"comment": {"body": "hello"}}), Some(&jake.token))
        .await;
    let id = added.body["comment"]["id"].as_i64().expect("comment id");

    let response = app.delete(&format!("{}/{}", uri, id), Some(&ann.token)).await;
    assert_error_body!(response, 403, "author");
}

#[tokio::test]
async fn test_comments_on_missing_article() {
    let app = TestApp::new().await;
    let response = app.get("/api/articles/missing/comments", None).await;
    assert_error_body!(response, 404, "article not found");
}
