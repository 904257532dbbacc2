/**
 * Comment Database Operations
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::comments::types::Comment;
use crate::backend::profiles::Profile;
use crate::shared::timestamp;

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
    following: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            author_id: row.author_id,
            author: Profile {
                username: row.author_username,
                bio: row.author_bio,
                image: row.author_image,
                following: row.following != 0,
            },
        }
    }
}

const COMMENT_SELECT: &str = r#"
    SELECT c.id, c.body, c.created_at, c.updated_at, c.author_id,
           u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
           CASE WHEN f.follower_id IS NULL THEN 0 ELSE 1 END AS following
    FROM comments c
    INNER JOIN users u ON u.id = c.author_id
    LEFT OUTER JOIN follows f ON f.followee_id = u.id AND f.follower_id = ?
"#;

/// Comments on an article, newest first
pub async fn list_comments(
    pool: &SqlitePool,
    viewer_id: i64,
    article_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let sql = format!(
        "{} WHERE c.article_id = ? ORDER BY c.created_at DESC, c.id DESC",
        COMMENT_SELECT
    );
    let rows = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(viewer_id)
        .bind(article_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Comment::from).collect())
}

/// Load one comment, restricted to the given article
pub async fn find_comment(
    pool: &SqlitePool,
    viewer_id: i64,
    article_id: i64,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error> {
    let sql = format!("{} WHERE c.article_id = ? AND c.id = ?", COMMENT_SELECT);
    let row = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(viewer_id)
        .bind(article_id)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Comment::from))
}

/// Insert a comment
///
/// # Returns
/// The new comment's id
pub async fn create_comment(
    pool: &SqlitePool,
    article_id: i64,
    author_id: i64,
    body: &str,
) -> Result<i64, sqlx::Error> {
    let now = timestamp::now();
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO comments (body, article_id, author_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(body)
    .bind(article_id)
    .bind(author_id)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn delete_comment(pool: &SqlitePool, comment_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(comment_id)
        .execute(pool)
        .await?;
    Ok(())
}
