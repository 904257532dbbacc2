/**
 * Article Handlers
 *
 * # Routes
 *
 * - `GET /api/articles` - list with `limit`, `offset`, `tag`, `author`,
 *   `favorited` (optional auth)
 * - `GET /api/articles/feed` - articles by followed authors (auth)
 * - `POST /api/articles` - create (auth)
 * - `GET /api/articles/{slug}` - single article (optional auth)
 * - `PUT /api/articles/{slug}` - update, author only
 * - `DELETE /api/articles/{slug}` - delete, author only
 * - `POST`/`DELETE /api/articles/{slug}/favorite` - favorite toggles (auth)
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::backend::articles::db::{self, ArticleRef, ArticleUpdate, NewArticleData};
use crate::backend::articles::query::{ArticleQuery, ListOptions};
use crate::backend::articles::types::{
    normalize_tags, Article, CreateArticleRequest, MultipleArticlesResponse, SingleArticleResponse,
    UpdateArticleRequest,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, MaybeUser};
use crate::backend::server::state::AppState;
use crate::shared::FieldErrors;

/// List articles
///
/// Anonymous callers and callers who follow nobody still see every
/// article; `author.following` tells them apart.
pub async fn list_articles(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MultipleArticlesResponse>, BackendError> {
    let options = ListOptions::from_pairs(&pairs, app_state.config.max_page_size);
    let query = ArticleQuery::from_options(viewer.viewer_id(), &options);
    run_list(&app_state, &query, &options).await
}

/// Feed of articles by authors the caller follows
pub async fn feed_articles(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MultipleArticlesResponse>, BackendError> {
    let options = ListOptions::from_pairs(&pairs, app_state.config.max_page_size);
    let query = ArticleQuery::from_options(current.id, &options).feed(true);
    run_list(&app_state, &query, &options).await
}

async fn run_list(
    app_state: &AppState,
    query: &ArticleQuery,
    options: &ListOptions,
) -> Result<Json<MultipleArticlesResponse>, BackendError> {
    let pool = app_state.pool()?;
    tracing::info!(
        "Getting {} records offset by {}",
        options.pagination.limit,
        options.pagination.offset
    );

    let (articles, articles_count) = db::list_articles(pool, query).await?;
    tracing::info!("Got {} of {} records", articles.len(), articles_count);

    Ok(Json(MultipleArticlesResponse {
        articles,
        articles_count,
    }))
}

/// Get one article
pub async fn get_article(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, BackendError> {
    let pool = app_state.pool()?;
    let article = load(pool, viewer.viewer_id(), &slug).await?;
    Ok(Json(SingleArticleResponse { article }))
}

/// Create an article
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Blank title, description or body
pub async fn create_article(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Json<SingleArticleResponse>, BackendError> {
    let pool = app_state.pool()?;
    let input = request.article;

    let mut errors = FieldErrors::new();
    let title = required(input.title, "title", &mut errors);
    let description = required(input.description, "description", &mut errors);
    let body = required(input.body, "body", &mut errors);
    errors.into_result()?;

    let data = NewArticleData {
        title,
        description,
        body,
        tags: normalize_tags(&input.tag_list.unwrap_or_default()),
    };
    let slug = db::create_article(pool, current.id, &data).await.map_err(|e| {
        tracing::error!("Failed to create article: {:?}", e);
        BackendError::from(e)
    })?;
    tracing::info!("{} created article {}", current.username, slug);

    let article = load(pool, current.id, &slug).await?;
    Ok(Json(SingleArticleResponse { article }))
}

/// Update an article
///
/// # Errors
///
/// * `403 Forbidden` - Caller is not the author
/// * `404 Not Found` - No article with this slug
/// * `422 Unprocessable Entity` - No fields, or a field set to blank
pub async fn update_article(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(slug): Path<String>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<SingleArticleResponse>, BackendError> {
    let pool = app_state.pool()?;
    let changes = request.article;
    if changes.is_empty() {
        return Err(BackendError::handler(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no changes detected",
        ));
    }

    let target = owned_article(pool, &slug, current.id, "update").await?;

    let mut errors = FieldErrors::new();
    let update = ArticleUpdate {
        title: optional(changes.title, "title", &mut errors),
        description: optional(changes.description, "description", &mut errors),
        body: optional(changes.body, "body", &mut errors),
        tags: changes.tag_list.as_deref().map(normalize_tags),
    };
    errors.into_result()?;

    let new_slug = db::update_article(pool, target.id, &update).await?;
    tracing::info!("{} updated article {} -> {}", current.username, slug, new_slug);

    let article = load(pool, current.id, &new_slug).await?;
    Ok(Json(SingleArticleResponse { article }))
}

/// Delete an article
pub async fn delete_article(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let pool = app_state.pool()?;
    let target = owned_article(pool, &slug, current.id, "delete").await?;

    db::delete_article(pool, target.id).await?;
    tracing::info!("{} deleted article {}", current.username, slug);

    Ok(Json(json!({})))
}

/// Favorite an article
pub async fn favorite_article(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, BackendError> {
    let pool = app_state.pool()?;
    let target = existing_article(pool, &slug).await?;

    db::favorite(pool, current.id, target.id).await?;
    let article = load(pool, current.id, &slug).await?;
    Ok(Json(SingleArticleResponse { article }))
}

/// Unfavorite an article
pub async fn unfavorite_article(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<SingleArticleResponse>, BackendError> {
    let pool = app_state.pool()?;
    let target = existing_article(pool, &slug).await?;

    db::unfavorite(pool, current.id, target.id).await?;
    let article = load(pool, current.id, &slug).await?;
    Ok(Json(SingleArticleResponse { article }))
}

async fn load(pool: &sqlx::SqlitePool, viewer_id: i64, slug: &str) -> Result<Article, BackendError> {
    db::find_article(pool, viewer_id, slug)
        .await?
        .ok_or_else(|| BackendError::not_found("article"))
}

pub(crate) async fn existing_article(
    pool: &sqlx::SqlitePool,
    slug: &str,
) -> Result<ArticleRef, BackendError> {
    db::find_article_ref(pool, slug)
        .await?
        .ok_or_else(|| BackendError::not_found("article"))
}

async fn owned_article(
    pool: &sqlx::SqlitePool,
    slug: &str,
    user_id: i64,
    action: &str,
) -> Result<ArticleRef, BackendError> {
    let target = existing_article(pool, slug).await?;
    if target.author_id != user_id {
        tracing::warn!("User {} tried to {} article {}", user_id, action, slug);
        return Err(BackendError::forbidden(format!(
            "you may only {} articles you are the author of",
            action
        )));
    }
    Ok(target)
}

/// Trimmed value, or a "can't be blank" error
fn required(value: Option<String>, field: &str, errors: &mut FieldErrors) -> String {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        errors.add(field, "can't be blank");
    }
    value
}

/// Like `required`, but absence means "leave unchanged"
fn optional(value: Option<String>, field: &str, errors: &mut FieldErrors) -> Option<String> {
    value.map(|v| required(Some(v), field, errors))
}
