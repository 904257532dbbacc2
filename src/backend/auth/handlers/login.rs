/**
 * Login Handler
 *
 * `POST /api/users/login`
 *
 * Looks the user up by (lower-cased) email and verifies the password with
 * bcrypt. Unknown email and wrong password give the same 401 so the
 * response does not reveal which accounts exist.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, UserResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "email or password is invalid";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing fields, unknown email or wrong password
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - Query, bcrypt or token failure
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = app_state.pool()?;

    let email = request.user.email.unwrap_or_default().trim().to_lowercase();
    let password = request.user.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let user = get_user_by_email(pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Login attempt for unknown email");
        BackendError::unauthorized(INVALID_CREDENTIALS)
    })?;

    let valid = verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Failed to verify password: {:?}", e);
        BackendError::from(e)
    })?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = app_state.tokens.issue(user.id, &user.username)?;
    tracing::info!("User logged in: {}", user.username);

    Ok(Json(UserResponse::new(user, token)))
}
