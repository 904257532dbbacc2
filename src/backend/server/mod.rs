//! Server Module
//!
//! Builds the application state and the Axum router.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Database connection and migrations
//! - **`init`** - `create_app`, the entry point used by the binary
//!
//! # Initialization Flow
//!
//! 1. **Database**: connect to SQLite and run embedded migrations
//! 2. **State**: wrap the pool, the token service and the configuration
//! 3. **Router**: mount the API routes, the auth middleware and the
//!    tower-http layers

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
