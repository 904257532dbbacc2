/**
 * Database Loading
 *
 * Opens the SQLite pool and runs the embedded migrations. Failures are
 * logged and do not stop the server: state is created without a pool and
 * data routes answer 503.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Database configuration result
pub type DatabaseConfig = Option<SqlitePool>;

const FILE_POOL_SIZE: u32 = 8;

/// Whether the URL names an in-memory database
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Connect to SQLite and apply migrations
///
/// In-memory databases live only as long as their connection, so they get
/// a single connection that is never recycled.
///
/// # Errors
///
/// Returns the sqlx error if the URL is malformed, the database cannot be
/// opened, or a migration fails.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(FILE_POOL_SIZE)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Load and initialize the database connection pool
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database opened and migrated
/// - `None` otherwise (the error is logged)
pub async fn load_database(database_url: &str) -> DatabaseConfig {
    tracing::info!("Connecting to database...");

    match connect(database_url).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created successfully");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to open database: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            None
        }
    }
}
