/**
 * Server Initialization
 *
 * Loads the database named in the configuration, builds `AppState` and
 * hands it to the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. If the database could
/// not be opened the router is still returned; data routes answer 503.
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing Conduit backend server");

    let db_pool = load_database(&config.database_url).await;
    let app_state = AppState::new(config, db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
