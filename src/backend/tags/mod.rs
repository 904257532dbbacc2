//! Tags Module
//!
//! `GET /api/tags` lists every tag in use.

pub mod db;
pub mod handlers;

pub use handlers::list_tags;
