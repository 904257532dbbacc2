//! Backend Error Module
//!
//! This module defines the error type returned by every handler and
//! data-access function in the backend.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Response Format
//!
//! Errors render in the Conduit error envelope:
//!
//! ```json
//! { "errors": { "body": ["article not found"] } }
//! ```
//!
//! Validation failures list messages per field instead of under `body`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
