/**
 * Backend Error Types
 *
 * `BackendError` is the single error type handlers return. Lower layers
 * (sqlx, jsonwebtoken, bcrypt, the query builder, shared validation)
 * convert into it with `?`.
 *
 * # Status Code Mapping
 *
 * | Variant               | Status |
 * |-----------------------|--------|
 * | `HandlerError`        | carried status |
 * | `Unauthorized`        | 401 |
 * | `Forbidden`           | 403 |
 * | `NotFound`            | 404 |
 * | `DatabaseUnavailable` | 503 |
 * | `SharedError` (validation) | 422 |
 * | `Database` (`RowNotFound`) | 404 |
 * | everything else       | 500 |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::articles::query::QueryError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use conduit::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::UNPROCESSABLE_ENTITY, "no changes detected");
/// assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
///
/// let err = BackendError::not_found("article");
/// assert_eq!(err.message(), "article not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing, invalid or expired credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The named resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The server started without a database connection
    #[error("Database unavailable")]
    DatabaseUnavailable,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token signing or verification failed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Article query could not be assembled
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Shared error (validation or serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) | Self::Password(_) | Self::Query(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures are reported generically; their detail goes to
    /// the log instead of the response.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized(message) | Self::Forbidden(message) => message.clone(),
            Self::NotFound(_) => self.to_string(),
            Self::DatabaseUnavailable => "database unavailable".to_string(),
            Self::Database(sqlx::Error::RowNotFound) => "not found".to_string(),
            Self::SharedError(err @ SharedError::ValidationError { .. }) => err.to_string(),
            _ => "internal server error".to_string(),
        }
    }

    /// Whether this error indicates a server-side fault
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
