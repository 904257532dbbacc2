/**
 * User Model and Database Operations
 *
 * Rows of the `users` table and the queries the auth, profile and
 * middleware layers run against it.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::timestamp;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changes applied by `update_user`; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, bio, image, created_at, updated_at";

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error (a unique violation if the username or email is taken)
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = timestamp::now();

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (username, email, password_hash, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING {}",
        USER_COLUMNS
    ))
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS))
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Whether another user already holds this username
pub async fn username_taken(
    pool: &SqlitePool,
    username: &str,
    except_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ? AND id != ?")
            .bind(username)
            .bind(except_id.unwrap_or(0))
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Whether another user already holds this email
pub async fn email_taken(
    pool: &SqlitePool,
    email: &str,
    except_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ? AND id != ?")
        .bind(email)
        .bind(except_id.unwrap_or(0))
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Whether a sqlx error is a UNIQUE constraint failure
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

/// Apply changes to a user and return the updated row
///
/// # Errors
/// `sqlx::Error::RowNotFound` if the user does not exist
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    changes: UserChanges,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET \
         username = COALESCE(?, username), \
         email = COALESCE(?, email), \
         password_hash = COALESCE(?, password_hash), \
         bio = COALESCE(?, bio), \
         image = COALESCE(?, image), \
         updated_at = ? \
         WHERE id = ? RETURNING {}",
        USER_COLUMNS
    ))
    .bind(changes.username)
    .bind(changes.email)
    .bind(changes.password_hash)
    .bind(changes.bio)
    .bind(changes.image)
    .bind(timestamp::now())
    .bind(id)
    .fetch_one(pool)
    .await
}
