/**
 * Current User Handlers
 *
 * `GET /api/user` returns the authenticated user with the token that was
 * presented. `PUT /api/user` applies a partial update: only the fields
 * present in the body change, and a body with no fields is rejected with
 * "no changes detected".
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{UpdateUserRequest, UserResponse};
use crate::backend::auth::users::{
    email_taken, get_user_by_id, is_unique_violation, update_user, username_taken, UserChanges,
};
use crate::backend::auth::validation::{check_email, check_password, check_username};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::FieldErrors;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid token
/// * `404 Not Found` - The user was deleted after the token was resolved
pub async fn get_current_user(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = app_state.pool()?;
    let user = get_user_by_id(pool, current.id)
        .await?
        .ok_or_else(|| BackendError::not_found("user"))?;

    Ok(Json(UserResponse::new(user, current.token)))
}

/// Update current user handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Empty body, invalid fields, or a
///   username/email already held by someone else
/// * `401 Unauthorized` - No valid token
pub async fn update_current_user(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = app_state.pool()?;
    let update = request.user;

    if update.is_empty() {
        return Err(BackendError::handler(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no changes detected",
        ));
    }

    let username = update.username.map(|u| u.trim().to_string());
    let email = update.email.map(|e| e.trim().to_lowercase());

    let mut errors = FieldErrors::new();
    if let Some(username) = &username {
        check_username(username, &mut errors);
        if errors.get("username").is_none() && username_taken(pool, username, Some(current.id)).await? {
            errors.add("username", "has already been taken");
        }
    }
    if let Some(email) = &email {
        check_email(email, &mut errors);
        if errors.get("email").is_none() && email_taken(pool, email, Some(current.id)).await? {
            errors.add("email", "has already been taken");
        }
    }
    if let Some(password) = &update.password {
        check_password(password, &mut errors);
    }
    errors.into_result()?;

    let password_hash = match &update.password {
        Some(password) => Some(bcrypt::hash(password, app_state.bcrypt_cost())?),
        None => None,
    };

    let changes = UserChanges {
        username,
        email,
        password_hash,
        bio: update.bio,
        image: update.image,
    };
    let user = update_user(pool, current.id, changes).await.map_err(|e| {
        if is_unique_violation(&e) {
            BackendError::validation("username or email", "has already been taken")
        } else {
            BackendError::from(e)
        }
    })?;
    tracing::info!("User updated: {}", user.username);

    Ok(Json(UserResponse::new(user, current.token)))
}
