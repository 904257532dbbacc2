//! Query Assembler
//!
//! [`ArticleQuery`] collects the viewer, the mode (list or feed), the
//! filters and the pagination, then renders one statement in a fixed
//! clause order:
//!
//! ```text
//! SELECT <columns> FROM articles a
//! INNER JOIN users u ...
//! LEFT OUTER JOIN (<tags per article>) t ...
//! {INNER | LEFT OUTER} JOIN follows uf ... AND uf.follower_id = ?
//! [WHERE p1 AND p2 ...]
//! ORDER BY a.created_at DESC, a.id DESC
//! LIMIT n [OFFSET m]
//! ```
//!
//! Assembly is pure: the same inputs always give byte-identical SQL and
//! arguments.

use super::args::{AssembledQuery, SqlArg};
use super::filters::ArticleFilter;
use super::joins::Join;
use super::options::ListOptions;
use super::pagination::Pagination;
use super::QueryError;

/// Columns read by `ArticleRow`. The single placeholder is the viewer id
/// used for the `favorited` flag.
const ARTICLE_COLUMNS: &str = "a.id, a.slug, a.title, a.description, a.body, \
a.created_at, a.updated_at, \
u.username AS author_username, u.bio AS author_bio, u.image AS author_image, \
CASE WHEN uf.followee_id IS NULL THEN 0 ELSE 1 END AS following, \
t.tags AS tags, \
(SELECT COUNT(*) FROM favorites fc WHERE fc.article_id = a.id) AS favorites_count, \
EXISTS (SELECT 1 FROM favorites fv WHERE fv.article_id = a.id AND fv.user_id = ?) AS favorited";

/// Tags per article as a JSON array, so any tag text survives the trip
const TAGS_TABLE: &str =
    "(SELECT article_id, json_group_array(tag) AS tags FROM article_tags GROUP BY article_id) t";

const ORDER_BY: &str = " ORDER BY a.created_at DESC, a.id DESC";

/// Builder for article list and feed statements
///
/// # Example
///
/// ```rust
/// use conduit::backend::articles::query::{ArticleFilter, ArticleQuery, Pagination};
///
/// let query = ArticleQuery::new(5)
///     .feed(true)
///     .filter(ArticleFilter::Tag(vec!["rust".to_string()]))
///     .pagination(Pagination::limit_offset(10, 0))
///     .build()
///     .unwrap();
/// assert!(query.sql.ends_with(" LIMIT 10"));
/// ```
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    viewer_id: i64,
    feed: bool,
    filters: Vec<ArticleFilter>,
    pagination: Pagination,
}

impl ArticleQuery {
    /// Start a query for the given viewer (`0` for anonymous)
    pub fn new(viewer_id: i64) -> Self {
        Self {
            viewer_id,
            feed: false,
            filters: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    /// Start a query from parsed request options
    pub fn from_options(viewer_id: i64, options: &ListOptions) -> Self {
        Self::new(viewer_id)
            .filters(options.filters.clone())
            .pagination(options.pagination)
    }

    /// Restrict to authors the viewer follows
    pub fn feed(mut self, feed: bool) -> Self {
        self.feed = feed;
        self
    }

    pub fn filters(mut self, filters: Vec<ArticleFilter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn filter(mut self, filter: ArticleFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Assemble the paged select
    ///
    /// # Errors
    ///
    /// * `QueryError::TooManyValues` - A filter exceeded the value limit;
    ///   no partial statement is produced
    pub fn build(&self) -> Result<AssembledQuery, QueryError> {
        let (where_sql, filter_args) = self.where_clause()?;

        let mut sql = select_from(self.feed);
        sql.push_str(&where_sql);
        sql.push_str(ORDER_BY);
        sql.push_str(&self.pagination.to_sql());

        let mut args = vec![SqlArg::Int(self.viewer_id), SqlArg::Int(self.viewer_id)];
        args.extend(filter_args);

        Ok(AssembledQuery { sql, args })
    }

    /// Assemble the total-count statement for the same filters and mode
    pub fn build_count(&self) -> Result<AssembledQuery, QueryError> {
        let (where_sql, filter_args) = self.where_clause()?;

        let mut sql = format!(
            "SELECT COUNT(*) FROM articles a {} {}",
            Join::inner("users u", "a.author_id = u.id").to_sql(),
            Join::follows(self.feed).to_sql()
        );
        sql.push_str(&where_sql);

        let mut args = vec![SqlArg::Int(self.viewer_id)];
        args.extend(filter_args);

        Ok(AssembledQuery { sql, args })
    }

    /// Assemble the lookup of one article by slug
    pub fn by_slug(viewer_id: i64, slug: &str) -> AssembledQuery {
        let mut sql = select_from(false);
        sql.push_str(" WHERE a.slug = ?");

        AssembledQuery {
            sql,
            args: vec![
                SqlArg::Int(viewer_id),
                SqlArg::Int(viewer_id),
                SqlArg::Text(slug.to_string()),
            ],
        }
    }

    /// ANDed predicates in tag, author, favorited order
    fn where_clause(&self) -> Result<(String, Vec<SqlArg>), QueryError> {
        let mut ordered: Vec<&ArticleFilter> = self.filters.iter().collect();
        ordered.sort_by_key(|f| f.rank());

        let mut predicates = Vec::new();
        let mut args = Vec::new();
        for filter in ordered {
            if let Some((predicate, values)) = filter.to_sql()? {
                predicates.push(predicate);
                args.extend(values);
            }
        }

        if predicates.is_empty() {
            Ok((String::new(), args))
        } else {
            Ok((format!(" WHERE {}", predicates.join(" AND ")), args))
        }
    }
}

fn select_from(feed: bool) -> String {
    let joins = [
        Join::inner("users u", "a.author_id = u.id"),
        Join::left_outer(TAGS_TABLE, "a.id = t.article_id"),
        Join::follows(feed),
    ];
    let mut sql = format!("SELECT {} FROM articles a", ARTICLE_COLUMNS);
    for join in &joins {
        sql.push(' ');
        sql.push_str(&join.to_sql());
    }
    sql
}
