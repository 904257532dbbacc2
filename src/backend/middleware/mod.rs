//! Middleware Module
//!
//! - **`auth`** - Resolves the `Authorization` token to a `CurrentUser`
//!   and provides the `AuthUser` / `MaybeUser` extractors

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser, MaybeUser};
