//! Filter Clause Builder
//!
//! Each [`ArticleFilter`] kind maps to one predicate over the article
//! select. Values are always bound; the predicate text depends only on the
//! filter kind and the number of values.

use super::args::SqlArg;
use super::QueryError;

/// Upper bound on the number of values a single filter may carry
pub const MAX_FILTER_VALUES: usize = 100;

/// A filter over the article list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    /// Articles carrying any of the given tags
    Tag(Vec<String>),
    /// Articles written by any of the given usernames
    Author(Vec<String>),
    /// Articles favorited by any of the given usernames
    FavoritedBy(Vec<String>),
}

impl ArticleFilter {
    /// Query-string key for this filter kind
    pub fn name(&self) -> &'static str {
        match self {
            ArticleFilter::Tag(_) => "tag",
            ArticleFilter::Author(_) => "author",
            ArticleFilter::FavoritedBy(_) => "favorited",
        }
    }

    /// Values carried by this filter
    pub fn values(&self) -> &[String] {
        match self {
            ArticleFilter::Tag(values)
            | ArticleFilter::Author(values)
            | ArticleFilter::FavoritedBy(values) => values,
        }
    }

    /// Position in the fixed AND order (tag, author, favorited)
    pub(crate) fn rank(&self) -> u8 {
        match self {
            ArticleFilter::Tag(_) => 0,
            ArticleFilter::Author(_) => 1,
            ArticleFilter::FavoritedBy(_) => 2,
        }
    }

    /// Render the predicate and its arguments
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The filter has no values and contributes nothing
    /// * `Ok(Some((sql, args)))` - A predicate with one argument per value
    ///
    /// # Errors
    ///
    /// * `QueryError::TooManyValues` - More than `MAX_FILTER_VALUES` values
    pub fn to_sql(&self) -> Result<Option<(String, Vec<SqlArg>)>, QueryError> {
        let values = self.values();
        if values.is_empty() {
            return Ok(None);
        }
        if values.len() > MAX_FILTER_VALUES {
            return Err(QueryError::TooManyValues {
                filter: self.name(),
                count: values.len(),
                max: MAX_FILTER_VALUES,
            });
        }

        let matcher = value_matcher(values.len());
        let sql = match self {
            ArticleFilter::Tag(_) => format!(
                "a.id IN (SELECT at.article_id FROM article_tags at WHERE at.tag {})",
                matcher
            ),
            ArticleFilter::Author(_) => format!("u.username {}", matcher),
            ArticleFilter::FavoritedBy(_) => format!(
                "a.id IN (SELECT f.article_id FROM favorites f \
                 INNER JOIN users fu ON f.user_id = fu.id WHERE fu.username {})",
                matcher
            ),
        };
        let args = values.iter().map(|v| SqlArg::Text(v.clone())).collect();

        Ok(Some((sql, args)))
    }
}

/// `= ?` for one value, `IN (?, ?, ...)` for several
fn value_matcher(count: usize) -> String {
    if count == 1 {
        "= ?".to_string()
    } else {
        format!("IN ({})", vec!["?"; count].join(", "))
    }
}
