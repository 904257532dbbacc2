//! Comments Module
//!
//! Comments hang off an article and are deleted with it.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{add_comment, delete_comment, list_comments};
pub use types::Comment;
