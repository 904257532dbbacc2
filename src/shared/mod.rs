//! Shared Module
//!
//! Types that do not depend on the HTTP layer or the database: application
//! configuration, validation/serialization errors and timestamp formatting.
//! The backend builds on these, and integration tests use them directly to
//! configure an application instance.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Timestamp storage and API formatting
pub mod timestamp;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{FieldErrors, SharedError};
