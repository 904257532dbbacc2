//! Property-based tests for the article query builder
//!
//! Filter values carry a `~~` marker that never occurs in generated SQL,
//! so finding it in the statement text would mean a value was interpolated.

use conduit::backend::articles::query::{
    ArticleFilter, ArticleQuery, ListOptions, Pagination, SqlArg, MAX_FILTER_VALUES,
};
use proptest::prelude::*;

fn filter_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("~~[a-z0-9 ']{1,10}", 0..6)
}

fn query_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = prop_oneof![
        Just("tag".to_string()),
        Just("author".to_string()),
        Just("favorited".to_string()),
        Just("favorite".to_string()),
        Just("limit".to_string()),
        Just("offset".to_string()),
        "[a-z]{1,6}",
    ];
    prop::collection::vec((key, ".{0,12}"), 0..12)
}

proptest! {
    #[test]
    fn test_placeholders_match_args(
        viewer in 0i64..1000,
        feed in any::<bool>(),
        tags in filter_values(),
        authors in filter_values(),
        favorited in filter_values(),
    ) {
        let query = ArticleQuery::new(viewer)
            .feed(feed)
            .filter(ArticleFilter::Tag(tags))
            .filter(ArticleFilter::Author(authors))
            .filter(ArticleFilter::FavoritedBy(favorited));

        let select = query.build().unwrap();
        prop_assert_eq!(select.placeholder_count(), select.args.len());

        let count = query.build_count().unwrap();
        prop_assert_eq!(count.placeholder_count(), count.args.len());
    }

    #[test]
    fn test_values_are_never_interpolated(
        tags in filter_values(),
        authors in filter_values(),
    ) {
        let query = ArticleQuery::new(0)
            .filter(ArticleFilter::Tag(tags.clone()))
            .filter(ArticleFilter::Author(authors.clone()));

        let select = query.build().unwrap();
        prop_assert!(!select.sql.contains("~~"));

        let bound: Vec<SqlArg> = tags
            .iter()
            .chain(authors.iter())
            .map(|v| SqlArg::from(v.as_str()))
            .collect();
        prop_assert_eq!(&select.args[2..], bound.as_slice());
    }

    #[test]
    fn test_filter_order_does_not_change_statement(
        tags in filter_values(),
        authors in filter_values(),
    ) {
        let forward = ArticleQuery::new(1)
            .filter(ArticleFilter::Tag(tags.clone()))
            .filter(ArticleFilter::Author(authors.clone()))
            .build()
            .unwrap();
        let backward = ArticleQuery::new(1)
            .filter(ArticleFilter::Author(authors))
            .filter(ArticleFilter::Tag(tags))
            .build()
            .unwrap();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_too_many_values_rejected(extra in 1usize..20) {
        let values = vec!["x".to_string(); MAX_FILTER_VALUES + extra];
        let query = ArticleQuery::new(0).filter(ArticleFilter::Tag(values));
        prop_assert!(query.build().is_err());
        prop_assert!(query.build_count().is_err());
    }

    #[test]
    fn test_pagination_within_bounds(
        limit in proptest::option::of(".{0,8}"),
        offset in proptest::option::of(".{0,8}"),
        ceiling in 1u32..500,
    ) {
        let pagination = Pagination::from_raw(limit.as_deref(), offset.as_deref(), ceiling);
        prop_assert!(pagination.limit >= 1);
        prop_assert!(pagination.limit <= ceiling);

        let sql = pagination.to_sql();
        prop_assert!(sql.starts_with(" LIMIT "));
        prop_assert_eq!(sql.contains("OFFSET"), pagination.offset > 0);
    }

    #[test]
    fn test_numeric_limit_respected(limit in 1u32..=100) {
        let pagination = Pagination::from_raw(Some(&limit.to_string()), None, 100);
        prop_assert_eq!(pagination.limit, limit);
    }

    #[test]
    fn test_list_options_never_keep_empty_filters(pairs in query_pairs()) {
        let options = ListOptions::from_pairs(&pairs, 100);
        prop_assert!(options.filters.len() <= 3);
        for filter in &options.filters {
            prop_assert!(!filter.values().is_empty());
            prop_assert!(filter.values().iter().all(|v| !v.trim().is_empty()));
        }
        prop_assert!(options.pagination.limit <= 100);
    }
}
