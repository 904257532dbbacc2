/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. It holds:
 * - The SQLite pool (`None` when the database failed to load)
 * - The token service, built from configuration
 * - The configuration itself, for limits such as the page-size ceiling
 *
 * All fields are cheap to clone: the pool and the token keys are
 * reference-counted internally, the configuration sits behind an `Arc`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if the database could not be opened at startup. Handlers go
    /// through [`AppState::pool`], which turns that into a 503.
    pub db_pool: Option<SqlitePool>,

    /// Token issuing and verification
    pub tokens: TokenService,

    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from configuration and an optional pool
    pub fn new(config: AppConfig, db_pool: Option<SqlitePool>) -> Self {
        Self {
            db_pool,
            tokens: TokenService::from_config(&config),
            config: Arc::new(config),
        }
    }

    /// Borrow the pool, or fail with `DatabaseUnavailable`
    pub fn pool(&self) -> Result<&SqlitePool, BackendError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            BackendError::DatabaseUnavailable
        })
    }

    /// bcrypt work factor for new password hashes
    pub fn bcrypt_cost(&self) -> u32 {
        self.config.bcrypt_cost
    }
}

/// Implement FromRef for Option<SqlitePool>
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for TokenService
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
