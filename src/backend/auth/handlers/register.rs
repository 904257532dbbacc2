/**
 * Registration Handler
 *
 * `POST /api/users`
 *
 * # Registration Process
 *
 * 1. Validate username, email and password, collecting every failure
 * 2. Check username and email are not already taken
 * 3. Hash the password with bcrypt at the configured cost
 * 4. Create the user and issue a token
 *
 * The email is stored lower-cased.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{create_user, email_taken, is_unique_violation, username_taken};
use crate::backend::auth::validation::{check_email, check_password, check_username};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::FieldErrors;

/// Register handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Field errors, including
///   `has already been taken` for a duplicate username or email
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - Hashing, insert or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// {"user": {"username": "jake", "email": "jake@jake.jake", "password": "jakejake"}}
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = app_state.pool()?;

    let username = request.user.username.unwrap_or_default().trim().to_string();
    let email = request.user.email.unwrap_or_default().trim().to_lowercase();
    let password = request.user.password.unwrap_or_default();
    tracing::info!("Register request for username: {}", username);

    let mut errors = FieldErrors::new();
    check_username(&username, &mut errors);
    check_email(&email, &mut errors);
    check_password(&password, &mut errors);

    if errors.get("username").is_none() && username_taken(pool, &username, None).await? {
        errors.add("username", "has already been taken");
    }
    if errors.get("email").is_none() && email_taken(pool, &email, None).await? {
        errors.add("email", "has already been taken");
    }
    if !errors.is_empty() {
        tracing::warn!("Registration rejected: {}", errors);
    }
    errors.into_result()?;

    let password_hash = bcrypt::hash(&password, app_state.bcrypt_cost()).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::from(e)
    })?;

    let user = create_user(pool, &username, &email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::validation("username or email", "has already been taken")
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                BackendError::from(e)
            }
        })?;

    let token = app_state.tokens.issue(user.id, &user.username)?;
    tracing::info!("User created successfully: {}", user.username);

    Ok(Json(UserResponse::new(user, token)))
}
