/**
 * Error Conversion
 *
 * Renders `BackendError` as an HTTP response in the Conduit error
 * envelope:
 *
 * ```json
 * { "errors": { "body": ["message"] } }
 * ```
 *
 * Validation errors put their messages under each field name instead.
 * Server-side faults are logged here with their full detail, and the
 * client only sees a generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = match &self {
            BackendError::SharedError(SharedError::ValidationError { errors }) => {
                json!({ "errors": errors })
            }
            _ => json!({ "errors": { "body": [self.message()] } }),
        };

        (status, Json(body)).into_response()
    }
}
