//! Article API integration tests
//!
//! Listing, filtering, pagination, the feed, and article writes.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_article, register_user, TestApp, TestResponse};
use crate::{assert_contains, assert_error_body, assert_field_error, assert_ok};

fn titles(response: &TestResponse) -> Vec<String> {
    response.body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .filter_map(|a| a["title"].as_str().map(String::from))
        .collect()
}

fn count(response: &TestResponse) -> i64 {
    response.body["articlesCount"].as_i64().expect("articlesCount")
}

#[tokio::test]
async fn test_create_article_shape() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;

    let response = app
        .post(
            "/api/articles",
            json!({"article": {
                "title": "How to train your dragon",
                "description": "Ever wonder how?",
                "body": "You have to believe",
                "tagList": ["training", "dragons", "training"]
            }}),
            Some(&jake.token),
        )
        .await;

    assert_eq!(response.status, 200);
    let article = &response.body["article"];
    assert_contains!(article["slug"].as_str().unwrap_or_default(), "how-to-train-your-dragon-");
    assert_eq!(article["tagList"], json!(["dragons", "training"]));
    assert_eq!(article["favorited"], false);
    assert_eq!(article["favoritesCount"], 0);
    assert_eq!(article["author"]["username"], "jake");
    assert!(article.get("id").is_none());
    assert!(article["createdAt"].as_str().is_some_and(|t| t.ends_with('Z')));
}

#[tokio::test]
async fn test_create_article_validation() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;

    let response = app
        .post("/api/articles", json!({"article": {"title": "  "}}), Some(&jake.token))
        .await;
    assert_field_error!(response, "title");
    assert_field_error!(response, "description");
    assert_field_error!(response, "body");

    let anonymous = app.post("/api/articles", json!({"article": {}}), None).await;
    assert_eq!(anonymous.status, 401);
}

#[tokio::test]
async fn test_same_title_gets_distinct_slugs() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;

    let first = create_article(&app, &jake, "Same title", &[]).await;
    let second = create_article(&app, &jake, "Same title", &[]).await;
    assert!(first != second);
}

#[tokio::test]
async fn test_list_newest_first_with_total_count() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    for title in ["one", "two", "three"] {
        create_article(&app, &jake, title, &[]).await;
    }

    let response = app.get("/api/articles", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(titles(&response), vec!["three", "two", "one"]);
    assert_eq!(count(&response), 3);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    for title in ["a", "b", "c", "d", "e"] {
        create_article(&app, &jake, title, &[]).await;
    }

    let page = app.get("/api/articles?limit=2&offset=1", None).await;
    assert_eq!(titles(&page), vec!["d", "c"]);
    assert_eq!(count(&page), 5);

    let past_end = app.get("/api/articles?offset=50", None).await;
    assert!(titles(&past_end).is_empty());
    assert_eq!(count(&past_end), 5);

    let garbage = app.get("/api/articles?limit=abc&offset=-3", None).await;
    assert_eq!(garbage.status, 200);
    assert_eq!(titles(&garbage).len(), 5);
}

#[tokio::test]
async fn test_list_filters() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    create_article(&app, &jake, "rust by jake", &["rust"]).await;
    create_article(&app, &jake, "go by jake", &["go"]).await;
    create_article(&app, &ann, "rust by ann", &["rust", "sqlx"]).await;

    let by_tag = app.get("/api/articles?tag=rust", None).await;
    assert_eq!(titles(&by_tag), vec!["rust by ann", "rust by jake"]);
    assert_eq!(count(&by_tag), 2);

    let by_author = app.get("/api/articles?author=jake", None).await;
    assert_eq!(titles(&by_author), vec!["go by jake", "rust by jake"]);

    let both = app.get("/api/articles?tag=rust&author=jake", None).await;
    assert_eq!(titles(&both), vec!["rust by jake"]);
    assert_eq!(count(&both), 1);

    let either_tag = app.get("/api/articles?tag=go&tag=sqlx", None).await;
    assert_eq!(titles(&either_tag), vec!["rust by ann", "go by jake"]);

    let unknown = app.get("/api/articles?author=nobody", None).await;
    assert!(titles(&unknown).is_empty());
    assert_eq!(count(&unknown), 0);

    let blank = app.get("/api/articles?tag=", None).await;
    assert_eq!(count(&blank), 3);
}

#[tokio::test]
async fn test_filter_by_favorited() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    let liked = create_article(&app, &jake, "liked", &[]).await;
    create_article(&app, &jake, "ignored", &[]).await;

    let fav = app
        .post(&format!("/api/articles/{}/favorite", liked), json!({}), Some(&ann.token))
        .await;
    assert_eq!(fav.status, 200);
    assert_eq!(fav.body["article"]["favorited"], true);
    assert_eq!(fav.body["article"]["favoritesCount"], 1);

    let favorited = app.get("/api/articles?favorited=ann", None).await;
    assert_eq!(titles(&favorited), vec!["liked"]);

    let alias = app.get("/api/articles?favorite=ann", None).await;
    assert_eq!(titles(&alias), vec!["liked"]);

    // Viewer-relative flag
    let as_ann = app.get("/api/articles", Some(&ann.token)).await;
    let flags: Vec<Value> = as_ann.body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["favorited"].clone())
        .collect();
    assert_eq!(flags, vec![json!(false), json!(true)]);

    let unfav = app
        .delete(&format!("/api/articles/{}/favorite", liked), Some(&ann.token))
        .await;
    assert_eq!(unfav.body["article"]["favorited"], false);
    assert_eq!(unfav.body["article"]["favoritesCount"], 0);
}

#[tokio::test]
async fn test_feed_shows_followed_authors_only() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    let bob = register_user(&app, "bob").await;
    create_article(&app, &jake, "from jake", &["rust"]).await;
    create_article(&app, &bob, "from bob", &[]).await;

    let empty = app.get("/api/articles/feed", Some(&ann.token)).await;
    assert_eq!(empty.status, 200);
    assert_eq!(count(&empty), 0);

    app.post("/api/profiles/jake/follow", json!({}), Some(&ann.token))
        .await;

    let feed = app.get("/api/articles/feed", Some(&ann.token)).await;
    assert_eq!(titles(&feed), vec!["from jake"]);
    assert_eq!(count(&feed), 1);
    assert_eq!(feed.body["articles"][0]["author"]["following"], true);

    let filtered = app.get("/api/articles/feed?tag=go", Some(&ann.token)).await;
    assert_eq!(count(&filtered), 0);

    let anonymous = app.get("/api/articles/feed", None).await;
    assert_eq!(anonymous.status, 401);
}

#[tokio::test]
async fn test_get_article() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let slug = create_article(&app, &jake, "Readable", &["a"]).await;

    let response = app.get(&format!("/api/articles/{}", slug), None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["article"]["slug"], slug.as_str());

    let missing = app.get("/api/articles/not-a-slug", None).await;
    assert_error_body!(missing, 404, "article not found");
}

#[tokio::test]
async fn test_update_article() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    let slug = create_article(&app, &jake, "Draft", &["old"]).await;
    let uri = format!("/api/articles/{}", slug);

    let forbidden = app
        .put(&uri, json!({"article": {"body": "mine now"}}), Some(&ann.token))
        .await;
    assert_eq!(forbidden.status, 403);

    let empty = app.put(&uri, json!({"article": {}}), Some(&jake.token)).await;
    assert_error_body!(empty, 422, "no changes detected");

    let updated = app
        .put(
            &uri,
            json!({"article": {"title": "Final", "tagList": ["new"]}}),
            Some(&jake.token),
        )
        .await;
    assert_eq!(updated.status, 200);
    let article = &updated.body["article"];
    assert_eq!(article["title"], "Final");
    assert_eq!(article["body"], "All about Draft");
    assert_eq!(article["tagList"], json!(["new"]));
    let new_slug = article["slug"].as_str().expect("slug");
    assert!(new_slug.starts_with("final-"));

    let tags = app.get("/api/tags", None).await;
    assert_eq!(tags.body, json!({"tags": ["new"]}));
}

#[tokio::test]
async fn test_delete_article_cascades() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    let slug = create_article(&app, &jake, "Doomed", &["gone"]).await;
    let uri = format!("/api/articles/{}", slug);

    app.post(&format!("{}/comments", uri), json!({"comment": {"body": "bye"}}), Some(&ann.token))
        .await;
    app.post(&format!("{}/favorite", uri), json!({}), Some(&ann.token))
        .await;

    let forbidden = app.delete(&uri, Some(&ann.token)).await;
    assert_eq!(forbidden.status, 403);

    let deleted = app.delete(&uri, Some(&jake.token)).await;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body, json!({}));

    for table in ["articles", "article_tags", "favorites", "comments"] {
        let rows: i64 = assert_ok!(
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(app.db.pool())
                .await
        );
        assert_eq!(rows, 0, "{} should be empty", table);
    }
}

#[tokio::test]
async fn test_anonymous_list_shows_every_author_unfollowed() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let ann = register_user(&app, "ann").await;
    create_article(&app, &jake, "from jake", &[]).await;
    create_article(&app, &ann, "from ann", &[]).await;

    let followed = app
        .post("/api/profiles/jake/follow", json!({}), Some(&ann.token))
        .await;
    assert_eq!(followed.status, 200);

    let response = app.get("/api/articles", None).await;
    assert_eq!(response.status, 200);
    assert_eq!(count(&response), 2);
    let following: Vec<Value> = response.body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["author"]["following"].clone())
        .collect();
    assert_eq!(following, vec![json!(false), json!(false)]);
}

#[tokio::test]
async fn test_tag_text_survives_round_trip() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    let slug = create_article(&app, &jake, "Languages", &["c||c++", "a,b"]).await;

    let article = app.get(&format!("/api/articles/{}", slug), None).await;
    assert_eq!(article.body["article"]["tagList"], json!(["a,b", "c||c++"]));

    let exact = app.get("/api/articles?tag=c%7C%7Cc%2B%2B", None).await;
    assert_eq!(titles(&exact), vec!["Languages"]);

    let partial = app.get("/api/articles?tag=c", None).await;
    assert_eq!(count(&partial), 0);

    let tags = app.get("/api/tags", None).await;
    assert_eq!(tags.body, json!({"tags": ["a,b", "c||c++"]}));
}

#[tokio::test]
async fn test_filter_values_are_not_trimmed() {
    let app = TestApp::new().await;
    let jake = register_user(&app, "jake").await;
    create_article(&app, &jake, "Mine", &[]).await;

    let padded = app.get("/api/articles?author=%20jake%20", None).await;
    assert_eq!(padded.status, 200);
    assert_eq!(count(&padded), 0);

    let exact = app.get("/api/articles?author=jake", None).await;
    assert_eq!(count(&exact), 1);
}
