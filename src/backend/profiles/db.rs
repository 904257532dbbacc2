/**
 * Profile Database Operations
 *
 * A profile is a user as seen by a viewer: public fields plus whether the
 * viewer follows them. Anonymous viewers use id 0, which matches no
 * follow row.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A user's public profile as seen by a viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    username: String,
    bio: Option<String>,
    image: Option<String>,
    following: i64,
}

impl ProfileRow {
    fn into_parts(self) -> (i64, Profile) {
        (
            self.id,
            Profile {
                username: self.username,
                bio: self.bio,
                image: self.image,
                following: self.following != 0,
            },
        )
    }
}

/// Look up a profile by username
///
/// # Returns
/// The user's id and profile, or `None` if no such user
pub async fn find_profile(
    pool: &SqlitePool,
    viewer_id: i64,
    username: &str,
) -> Result<Option<(i64, Profile)>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT u.id, u.username, u.bio, u.image,
               CASE WHEN f.follower_id IS NULL THEN 0 ELSE 1 END AS following
        FROM users u
        LEFT OUTER JOIN follows f ON f.followee_id = u.id AND f.follower_id = ?
        WHERE u.username = ?
        "#,
    )
    .bind(viewer_id)
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ProfileRow::into_parts))
}

/// Record that `follower_id` follows `followee_id` (idempotent)
pub async fn follow(pool: &SqlitePool, follower_id: i64, followee_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO follows (follower_id, followee_id) VALUES (?, ?)")
        .bind(follower_id)
        .bind(followee_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a follow (idempotent)
pub async fn unfollow(pool: &SqlitePool, follower_id: i64, followee_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followee_id = ?")
        .bind(follower_id)
        .bind(followee_id)
        .execute(pool)
        .await?;
    Ok(())
}
