/**
 * Comment Handlers
 *
 * # Routes
 *
 * - `GET /api/articles/{slug}/comments` - optional auth
 * - `POST /api/articles/{slug}/comments` - requires auth
 * - `DELETE /api/articles/{slug}/comments/{id}` - comment author only
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::backend::articles::handlers::existing_article;
use crate::backend::comments::db;
use crate::backend::comments::types::{
    AddCommentRequest, MultipleCommentsResponse, SingleCommentResponse,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, MaybeUser};
use crate::backend::server::state::AppState;

/// List the comments on an article
pub async fn list_comments(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Path(slug): Path<String>,
) -> Result<Json<MultipleCommentsResponse>, BackendError> {
    let pool = app_state.pool()?;
    let article = existing_article(pool, &slug).await?;

    let comments = db::list_comments(pool, viewer.viewer_id(), article.id).await?;
    Ok(Json(MultipleCommentsResponse { comments }))
}

/// Add a comment to an article
///
/// # Errors
///
/// * `404 Not Found` - No article with this slug
/// * `422 Unprocessable Entity` - Blank body
pub async fn add_comment(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<SingleCommentResponse>, BackendError> {
    let pool = app_state.pool()?;
    let body = request
        .comment
        .body
        .map(|b| b.trim().to_string())
        .unwrap_or_default();
    if body.is_empty() {
        return Err(BackendError::validation("body", "can't be blank"));
    }

    let article = existing_article(pool, &slug).await?;
    let id = db::create_comment(pool, article.id, current.id, &body).await?;
    tracing::info!("{} commented on {} (comment {})", current.username, slug, id);

    let comment = db::find_comment(pool, current.id, article.id, id)
        .await?
        .ok_or_else(|| BackendError::not_found("comment"))?;
    Ok(Json(SingleCommentResponse { comment }))
}

/// Delete a comment
///
/// # Errors
///
/// * `403 Forbidden` - Caller did not write the comment
/// * `404 Not Found` - No such article, or no such comment on it
pub async fn delete_comment(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path((slug, id)): Path<(String, i64)>,
) -> Result<Json<Value>, BackendError> {
    let pool = app_state.pool()?;
    let article = existing_article(pool, &slug).await?;

    let comment = db::find_comment(pool, current.id, article.id, id)
        .await?
        .ok_or_else(|| BackendError::not_found("comment"))?;
    if comment.author_id != current.id {
        tracing::warn!("User {} tried to delete comment {}", current.id, id);
        return Err(BackendError::forbidden(
            "you may only delete comments you are the author of",
        ));
    }

    db::delete_comment(pool, id).await?;
    Ok(Json(json!({})))
}
