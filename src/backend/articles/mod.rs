//! Articles Module
//!
//! Article CRUD, favorites and the list/feed query builder.
//!
//! # Module Structure
//!
//! ```text
//! articles/
//! ├── mod.rs      - Module exports and documentation
//! ├── query/      - Dynamic list/feed statement assembly
//! ├── types.rs    - Row, API and request types
//! ├── slug.rs     - Slug generation
//! ├── db.rs       - Database operations
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Request Flow (list and feed)
//!
//! query string → `ListOptions` → `ArticleQuery` → `AssembledQuery`
//! (select and count) → sqlx → `Article` rows → JSON

/// Article query builder
pub mod query;

/// Article types
pub mod types;

/// Slug generation
pub mod slug;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    create_article, delete_article, favorite_article, feed_articles, get_article, list_articles,
    unfavorite_article, update_article,
};
pub use types::Article;
