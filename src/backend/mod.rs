//! Backend Module
//!
//! All server-side code: the Axum router, token authentication, the article
//! query builder and the SQLite data access behind each resource.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database loading, app creation
//! - **`routes`** - Route table and tower-http layers
//! - **`middleware`** - Token-to-user resolution and extractors
//! - **`auth`** - Users, tokens, registration/login/current-user handlers
//! - **`profiles`** - Public profiles and following
//! - **`articles`** - Article CRUD, favorites and the list/feed query builder
//! - **`comments`** - Comments on articles
//! - **`tags`** - Tag listing
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - State and initialization
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware
//! ├── auth/           - Authentication
//! ├── profiles/       - Profiles and following
//! ├── articles/       - Articles and the query builder
//! ├── comments/       - Comments
//! ├── tags/           - Tags
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the optional SQLite pool, the token service and the
//! configuration. Handlers receive it through `State<AppState>`; the pool
//! is the only shared resource and sqlx manages its concurrency.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Profiles and following
pub mod profiles;

/// Articles, favorites and the article query builder
pub mod articles;

/// Comments on articles
pub mod comments;

/// Tag listing
pub mod tags;


/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
