//! Shared Error Types
//!
//! This module defines error types that do not depend on the HTTP layer.
//! They are produced by input validation and (de)serialization helpers and
//! converted into `BackendError` at the handler boundary.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more request fields failed validation
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use conduit::shared::error::{FieldErrors, SharedError};
//!
//! let mut errors = FieldErrors::new();
//! errors.add("email", "can't be blank");
//! let error: SharedError = errors.into();
//! ```
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Validation messages grouped by field name
///
/// Serializes as `{"field": ["message", ...]}`, which is the shape the
/// Conduit API uses under its `errors` key. Fields are kept sorted so the
/// rendered JSON is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error
    pub fn into_result(self) -> Result<(), SharedError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{} {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Request data failed validation
    #[error("Validation error: {errors}")]
    ValidationError {
        /// Messages per offending field
        errors: FieldErrors,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        Self::ValidationError { errors }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<FieldErrors> for SharedError {
    fn from(errors: FieldErrors) -> Self {
        Self::ValidationError { errors }
    }
}

/// Helper trait for converting serialization errors
impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
