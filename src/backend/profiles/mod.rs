//! Profiles Module
//!
//! Public user profiles and the follow relation between users.
//!
//! - **`db`** - Profile lookup and follow/unfollow queries
//! - **`handlers`** - `GET /api/profiles/{username}` and
//!   `POST`/`DELETE /api/profiles/{username}/follow`

pub mod db;
pub mod handlers;

pub use db::Profile;
pub use handlers::{follow_user, get_profile, unfollow_user};
