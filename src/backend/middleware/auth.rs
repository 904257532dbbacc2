/**
 * Authentication Middleware
 *
 * Runs on every request. A request without an `Authorization` header
 * passes through anonymously. A request with one must carry a valid token
 * for an existing user (`Token <jwt>`, or `Bearer <jwt>`); the resolved
 * `CurrentUser` is stored in the request extensions. Anything else is
 * rejected with 401 before the handler runs.
 *
 * Handlers read the user through the `AuthUser` (required) and
 * `MaybeUser` (optional) extractors.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// The user a request is authenticated as
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    /// The token presented with the request, echoed back in user responses
    pub token: String,
}

/// Extract the token from an `Authorization` header value
pub fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    value
        .strip_prefix("Token ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// 1. No `Authorization` header: continue anonymously
/// 2. Parse the token and verify it with the state's `TokenService`
/// 3. Load the user named in the claims
/// 4. Attach `CurrentUser` to the request extensions
///
/// # Errors
///
/// * `401 Unauthorized` - Malformed header, invalid or expired token, or
///   the user no longer exists
/// * `503 Service Unavailable` - A token was presented but there is no database
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let Some(header) = request.headers().get(AUTHORIZATION).cloned() else {
        return Ok(next.run(request).await);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(token_from_header)
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("invalid authorization header")
        })?
        .to_string();

    let claims = app_state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized("invalid or expired token")
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Invalid user ID in token: {}", claims.sub);
        BackendError::unauthorized("invalid or expired token")
    })?;

    let pool = app_state.pool()?;
    let user = get_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for unknown user {}", user_id);
        BackendError::unauthorized("invalid or expired token")
    })?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
        token,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for a required authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized("authentication required"))
    }
}

/// Axum extractor for an optional authenticated user
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl MaybeUser {
    /// Viewer id for queries; 0 when anonymous
    pub fn viewer_id(&self) -> i64 {
        self.0.as_ref().map(|user| user.id).unwrap_or(0)
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<CurrentUser>().cloned()))
    }
}
