//! Article Query Builder
//!
//! Assembles the parameterized SQL used to list, look up and count
//! articles. Raw request options flow through three stages:
//!
//! 1. [`options`] turns query-string pairs into a typed [`ListOptions`]
//! 2. [`filters`] renders each populated [`ArticleFilter`] as a predicate
//!    plus its bound values
//! 3. [`builder`] joins the base select, the follow join, the ANDed
//!    predicates, the fixed ordering and the [`pagination`] clause into one
//!    [`AssembledQuery`]
//!
//! Every value that comes from a caller is bound through a `?` placeholder.
//! Limit and offset are typed integers rendered as literals.
//!
//! # Module Structure
//!
//! ```text
//! query/
//! ├── mod.rs        - Module exports and QueryError
//! ├── args.rs       - Bound arguments and sqlx binding
//! ├── filters.rs    - Filter clause builder
//! ├── joins.rs      - JOIN rendering
//! ├── pagination.rs - LIMIT/OFFSET applier
//! ├── options.rs    - Request options parsing
//! └── builder.rs    - Query assembler
//! ```

use thiserror::Error;

pub mod args;
pub mod builder;
pub mod filters;
pub mod joins;
pub mod options;
pub mod pagination;

pub use args::{AssembledQuery, SqlArg};
pub use builder::ArticleQuery;
pub use filters::{ArticleFilter, MAX_FILTER_VALUES};
pub use joins::{Join, JoinType};
pub use options::ListOptions;
pub use pagination::Pagination;

/// Errors raised while assembling an article query
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A single filter carried more values than the statement allows
    #[error("too many values for filter '{filter}': {count} (maximum is {max})")]
    TooManyValues {
        filter: &'static str,
        count: usize,
        max: usize,
    },
}
