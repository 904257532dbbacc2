use sqlx::SqlitePool;

/// Every distinct tag attached to an article, alphabetically
pub async fn all_tags(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT tag FROM article_tags ORDER BY tag")
        .fetch_all(pool)
        .await
}
