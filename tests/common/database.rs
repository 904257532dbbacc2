//! Database and application fixtures
//!
//! Every `TestApp` owns a fresh in-memory SQLite database with all
//! migrations applied, so tests never share rows.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use conduit::backend::routes::create_router;
use conduit::backend::server::config::connect;
use conduit::backend::AppState;
use conduit::shared::AppConfig;

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Configuration used by every fixture
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret("integration-test-secret")
        .bcrypt_cost(4)
        .build()
        .expect("test configuration should validate")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// The full router over a private database
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: TestDatabase,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let state = AppState::new(test_config(), Some(db.pool().clone()));
        let router = create_router(state.clone());
        Self { router, state, db }
    }

    /// Send a request with an optional JSON body and `Token` auth
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, None, token).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, Some(body), token).await
    }

    pub async fn put(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::PUT, uri, Some(body), token).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, None, token).await
    }
}
