/**
 * Article Database Operations
 *
 * Reads go through the assembled statements from `query`; writes are
 * plain parameterized statements. Creating and updating an article touch
 * both `articles` and `article_tags`, so they run in a transaction.
 */

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::backend::articles::query::ArticleQuery;
use crate::backend::articles::slug::new_slug;
use crate::backend::articles::types::{Article, ArticleRow};
use crate::backend::auth::users::is_unique_violation;
use crate::backend::error::BackendError;
use crate::shared::timestamp;

/// Attempts at drawing a fresh slug suffix before giving up
const SLUG_ATTEMPTS: usize = 3;

/// Id and author of an article, used for ownership checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ArticleRef {
    pub id: i64,
    pub author_id: i64,
}

/// Validated fields for a new article
#[derive(Debug, Clone)]
pub struct NewArticleData {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Validated changes to an existing article
#[derive(Debug, Clone, Default)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Run a list or feed query and its count
///
/// # Returns
/// The requested page and the total number of matching articles
///
/// # Errors
/// `BackendError::Query` if the statement cannot be assembled, or the
/// database error
pub async fn list_articles(
    pool: &SqlitePool,
    query: &ArticleQuery,
) -> Result<(Vec<Article>, i64), BackendError> {
    let select = query.build()?;
    let count = query.build_count()?;

    let rows: Vec<ArticleRow> = select.bind::<ArticleRow>().fetch_all(pool).await?;
    let (total,): (i64,) = count.bind::<(i64,)>().fetch_one(pool).await?;

    Ok((rows.into_iter().map(Article::from).collect(), total))
}

/// Fetch one article by slug as seen by `viewer_id`
pub async fn find_article(
    pool: &SqlitePool,
    viewer_id: i64,
    slug: &str,
) -> Result<Option<Article>, sqlx::Error> {
    let lookup = ArticleQuery::by_slug(viewer_id, slug);
    let row = lookup.bind::<ArticleRow>().fetch_optional(pool).await?;
    Ok(row.map(Article::from))
}

/// Fetch id and author for a slug
pub async fn find_article_ref(pool: &SqlitePool, slug: &str) -> Result<Option<ArticleRef>, sqlx::Error> {
    sqlx::query_as::<_, ArticleRef>("SELECT id, author_id FROM articles WHERE slug = ?")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

async fn insert_tags(
    tx: &mut Transaction<'_, Sqlite>,
    article_id: i64,
    tags: &[String],
) -> Result<(), sqlx::Error> {
    for tag in tags {
        sqlx::query("INSERT OR IGNORE INTO article_tags (article_id, tag) VALUES (?, ?)")
            .bind(article_id)
            .bind(tag)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Insert an article with its tags
///
/// # Returns
/// The slug of the new article
pub async fn create_article(
    pool: &SqlitePool,
    author_id: i64,
    data: &NewArticleData,
) -> Result<String, sqlx::Error> {
    let mut last_err = None;

    for _ in 0..SLUG_ATTEMPTS {
        let slug = new_slug(&data.title);
        let now = timestamp::now();
        let mut tx = pool.begin().await?;

        let inserted = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO articles (slug, title, description, body, author_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&slug)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.body)
        .bind(author_id)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok((id,)) => {
                insert_tags(&mut tx, id, &data.tags).await?;
                tx.commit().await?;
                return Ok(slug);
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!("Slug collision on {}, retrying", slug);
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or(sqlx::Error::RowNotFound))
}

/// Apply changes to an article
///
/// A new title also gives the article a new slug, drawn again on a
/// collision like `create_article`. A tag list replaces the existing tags.
///
/// # Returns
/// The (possibly new) slug
pub async fn update_article(
    pool: &SqlitePool,
    article_id: i64,
    update: &ArticleUpdate,
) -> Result<String, sqlx::Error> {
    update_article_with(pool, article_id, update, new_slug).await
}

async fn update_article_with<F>(
    pool: &SqlitePool,
    article_id: i64,
    update: &ArticleUpdate,
    mut slug_for: F,
) -> Result<String, sqlx::Error>
where
    F: FnMut(&str) -> String,
{
    let mut last_err = None;

    for _ in 0..SLUG_ATTEMPTS {
        let slug = update.title.as_deref().map(&mut slug_for);
        let mut tx = pool.begin().await?;

        let updated = sqlx::query_as::<_, (String,)>(
            "UPDATE articles SET \
             slug = COALESCE(?, slug), \
             title = COALESCE(?, title), \
             description = COALESCE(?, description), \
             body = COALESCE(?, body), \
             updated_at = ? \
             WHERE id = ? RETURNING slug",
        )
        .bind(&slug)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.body)
        .bind(timestamp::now())
        .bind(article_id)
        .fetch_one(&mut *tx)
        .await;

        let current = match updated {
            Ok((current,)) => current,
            Err(e) if slug.is_some() && is_unique_violation(&e) => {
                tracing::warn!("Slug collision on {:?}, retrying", slug);
                last_err = Some(e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(tags) = &update.tags {
            sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
                .bind(article_id)
                .execute(&mut *tx)
                .await?;
            insert_tags(&mut tx, article_id, tags).await?;
        }

        tx.commit().await?;
        return Ok(current);
    }

    Err(last_err.unwrap_or(sqlx::Error::RowNotFound))
}

/// Delete an article; tags, favorites and comments cascade
pub async fn delete_article(pool: &SqlitePool, article_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(article_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Mark an article as a user's favorite (idempotent)
pub async fn favorite(pool: &SqlitePool, user_id: i64, article_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO favorites (user_id, article_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(article_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a favorite (idempotent)
pub async fn unfavorite(pool: &SqlitePool, user_id: i64, article_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favorites WHERE user_id = ? AND article_id = ?")
        .bind(user_id)
        .bind(article_id)
        .execute(pool)
        .await?;
    Ok(())
}
