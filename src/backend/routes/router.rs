/**
 * Router Configuration
 *
 * Combines the API route table with the status probe, the JSON 404
 * fallback and the tower-http layers.
 *
 * # Layer Order (outermost first)
 *
 * 1. `CatchPanicLayer` - a panicking handler becomes a 500
 * 2. `TraceLayer` - request/response spans
 * 3. `CorsLayer` - permissive CORS for browser front ends
 * 4. `auth_middleware` - resolves the `Authorization` header
 */

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, token service, configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/status", get(status));
    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.clone(), auth_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(app_state)
}

/// Liveness probe, also reports whether a database is attached
async fn status(axum::extract::State(app_state): axum::extract::State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "database": app_state.db_pool.is_some(),
    }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("route")
}
