//! Bound arguments
//!
//! An [`AssembledQuery`] keeps its arguments as plain values so that the
//! statement can be inspected (and compared) before it reaches the pool.
//! [`AssembledQuery::bind`] hands them to sqlx in placeholder order.

use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    Int(i64),
    Text(String),
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        SqlArg::Int(value)
    }
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        SqlArg::Text(value.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        SqlArg::Text(value)
    }
}

/// A finished statement and its arguments, in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledQuery {
    pub sql: String,
    pub args: Vec<SqlArg>,
}

impl AssembledQuery {
    /// Number of `?` placeholders in the statement
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Prepare the statement with sqlx and bind every argument
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let rows: Vec<ArticleRow> = assembled.bind::<ArticleRow>().fetch_all(pool).await?;
    /// ```
    pub fn bind<'q, O>(&'q self) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
    where
        O: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow>,
    {
        let query = sqlx::query_as::<Sqlite, O>(&self.sql);
        self.args.iter().fold(query, |query, arg| match arg {
            SqlArg::Int(value) => query.bind(*value),
            SqlArg::Text(value) => query.bind(value.as_str()),
        })
    }
}
