//! Conduit - Main Library
//!
//! A REST backend for the Conduit blogging platform: user accounts, articles
//! with tags and favorites, comments, and author following, stored in SQLite
//! through sqlx and served with axum.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no HTTP or database dependency
//!   - Application configuration (`AppConfig`)
//!   - Validation and serialization errors
//!   - Timestamp formatting
//!
//! - **`backend`** - The HTTP server
//!   - Router assembly and middleware
//!   - Token authentication
//!   - The article query builder (filters, joins, pagination)
//!   - Data access and handlers for users, profiles, articles, comments, tags
//!
//! # Example
//!
//! ```rust,no_run
//! use conduit::backend::server::create_app;
//! use conduit::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types (configuration, errors, timestamps)
pub mod shared;

/// Server-side code
pub mod backend;
