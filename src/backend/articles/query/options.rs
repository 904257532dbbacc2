//! List options
//!
//! Parsed once per request from the query string and immutable afterwards.

use super::filters::ArticleFilter;
use super::pagination::Pagination;

/// Pagination and filters for an article list or feed request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub pagination: Pagination,
    /// Populated filters only, in tag/author/favorited order
    pub filters: Vec<ArticleFilter>,
}

impl ListOptions {
    /// Build options from query-string pairs
    ///
    /// Repeated keys accumulate (`?tag=a&tag=b`). Blank (empty or
    /// whitespace-only) values are dropped; every other value is kept
    /// verbatim, surrounding whitespace included. Filter kinds left without
    /// values are not represented. `favorite`
    /// is accepted as an alias of `favorited`. Unknown keys are ignored.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Decoded query-string pairs in request order
    /// * `max_page_size` - Ceiling applied to `limit`
    pub fn from_pairs(pairs: &[(String, String)], max_page_size: u32) -> Self {
        let mut limit = None;
        let mut offset = None;
        let mut tags = Vec::new();
        let mut authors = Vec::new();
        let mut favorited = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "limit" => limit = Some(value.as_str()),
                "offset" => offset = Some(value.as_str()),
                "tag" | "author" | "favorited" | "favorite" => {
                    if value.trim().is_empty() {
                        continue;
                    }
                    let bucket = match key.as_str() {
                        "tag" => &mut tags,
                        "author" => &mut authors,
                        _ => &mut favorited,
                    };
                    bucket.push(value.clone());
                }
                _ => {}
            }
        }

        let filters = [
            ArticleFilter::Tag(tags),
            ArticleFilter::Author(authors),
            ArticleFilter::FavoritedBy(favorited),
        ]
        .into_iter()
        .filter(|f| !f.values().is_empty())
        .collect();

        Self {
            pagination: Pagination::from_raw(limit, offset, max_page_size),
            filters,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_filter(mut self, filter: ArticleFilter) -> Self {
        self.filters.push(filter);
        self
    }
}
