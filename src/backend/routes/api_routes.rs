/**
 * API Route Table
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users` - Register
 * - `POST /api/users/login` - Login
 * - `GET /api/user` - Current user (auth)
 * - `PUT /api/user` - Update current user (auth)
 *
 * ## Profiles
 * - `GET /api/profiles/{username}`
 * - `POST`/`DELETE /api/profiles/{username}/follow` (auth)
 *
 * ## Articles
 * - `GET /api/articles`, `POST /api/articles` (auth)
 * - `GET /api/articles/feed` (auth)
 * - `GET`/`PUT`/`DELETE /api/articles/{slug}`
 * - `POST`/`DELETE /api/articles/{slug}/favorite` (auth)
 *
 * ## Comments
 * - `GET`/`POST /api/articles/{slug}/comments`
 * - `DELETE /api/articles/{slug}/comments/{id}` (auth)
 *
 * ## Tags
 * - `GET /api/tags`
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::articles::{
    create_article, delete_article, favorite_article, feed_articles, get_article, list_articles,
    unfavorite_article, update_article,
};
use crate::backend::auth::handlers::{get_current_user, login, register, update_current_user};
use crate::backend::comments::{add_comment, delete_comment, list_comments};
use crate::backend::profiles::{follow_user, get_profile, unfollow_user};
use crate::backend::server::state::AppState;
use crate::backend::tags::list_tags;

/// Configure API routes
///
/// Authentication is resolved by the middleware layered in `create_router`;
/// handlers that need a user take the `AuthUser` extractor.
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Users
        .route("/api/users", post(register))
        .route("/api/users/login", post(login))
        .route("/api/user", get(get_current_user).put(update_current_user))
        // Profiles
        .route("/api/profiles/{username}", get(get_profile))
        .route(
            "/api/profiles/{username}/follow",
            post(follow_user).delete(unfollow_user),
        )
        // Articles
        .route("/api/articles", get(list_articles).post(create_article))
        .route("/api/articles/feed", get(feed_articles))
        .route(
            "/api/articles/{slug}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .route(
            "/api/articles/{slug}/favorite",
            post(favorite_article).delete(unfavorite_article),
        )
        // Comments
        .route(
            "/api/articles/{slug}/comments",
            get(list_comments).post(add_comment),
        )
        .route("/api/articles/{slug}/comments/{id}", delete(delete_comment))
        // Tags
        .route("/api/tags", get(list_tags))
}
