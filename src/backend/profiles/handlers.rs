/**
 * Profile Handlers
 *
 * # Routes
 *
 * - `GET /api/profiles/{username}` - optional auth
 * - `POST /api/profiles/{username}/follow` - requires auth
 * - `DELETE /api/profiles/{username}/follow` - requires auth
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, MaybeUser};
use crate::backend::profiles::db::{find_profile, follow, unfollow, Profile};
use crate::backend::server::state::AppState;

/// `{"profile": {...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Get a profile
pub async fn get_profile(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let pool = app_state.pool()?;
    let (_, profile) = find_profile(pool, viewer.viewer_id(), &username)
        .await?
        .ok_or_else(|| BackendError::not_found("profile"))?;

    Ok(Json(ProfileResponse { profile }))
}

/// Follow a user
///
/// # Errors
///
/// * `404 Not Found` - No such user
/// * `422 Unprocessable Entity` - Following yourself
pub async fn follow_user(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let pool = app_state.pool()?;
    let (followee_id, mut profile) = find_profile(pool, current.id, &username)
        .await?
        .ok_or_else(|| BackendError::not_found("profile"))?;

    if followee_id == current.id {
        return Err(BackendError::handler(
            StatusCode::UNPROCESSABLE_ENTITY,
            "you cannot follow yourself",
        ));
    }

    follow(pool, current.id, followee_id).await?;
    tracing::info!("{} followed {}", current.username, profile.username);
    profile.following = true;

    Ok(Json(ProfileResponse { profile }))
}

/// Unfollow a user
pub async fn unfollow_user(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let pool = app_state.pool()?;
    let (followee_id, mut profile) = find_profile(pool, current.id, &username)
        .await?
        .ok_or_else(|| BackendError::not_found("profile"))?;

    unfollow(pool, current.id, followee_id).await?;
    tracing::info!("{} unfollowed {}", current.username, profile.username);
    profile.following = false;

    Ok(Json(ProfileResponse { profile }))
}
