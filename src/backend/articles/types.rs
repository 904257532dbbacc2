/**
 * Article Types
 *
 * `ArticleRow` is the shape produced by the assembled article select;
 * `Article` is the API representation built from it. Request bodies are
 * wrapped in an `article` key.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::profiles::Profile;
use crate::shared::timestamp;

/// Row produced by the article select
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleRow {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_bio: Option<String>,
    pub author_image: Option<String>,
    pub following: i64,
    pub tags: Option<String>,
    pub favorites_count: i64,
    pub favorited: i64,
}

/// An article as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(skip)]
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(serialize_with = "timestamp::serialize_api")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize_api")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: Profile,
}

/// Decode the JSON tag column into a sorted list
///
/// Articles without tags have no row in the tag join and arrive as `None`.
pub fn decode_tags(tags: Option<&str>) -> Vec<String> {
    let Some(raw) = tags.filter(|raw| !raw.is_empty()) else {
        return Vec::new();
    };
    let mut list: Vec<String> = match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Unreadable tag column {:?}: {}", raw, e);
            return Vec::new();
        }
    };
    list.sort();
    list
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            tag_list: decode_tags(row.tags.as_deref()),
            slug: row.slug,
            title: row.title,
            description: row.description,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
            favorited: row.favorited != 0,
            favorites_count: row.favorites_count,
            author: Profile {
                username: row.author_username,
                bio: row.author_bio,
                image: row.author_image,
                following: row.following != 0,
            },
        }
    }
}

/// `POST /api/articles` body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub article: NewArticle,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

/// `PUT /api/articles/{slug}` body; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub article: ArticleChanges,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    /// Replaces the whole tag set when present
    pub tag_list: Option<Vec<String>>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.tag_list.is_none()
    }
}

/// `{"article": {...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SingleArticleResponse {
    pub article: Article,
}

/// `{"articles": [...], "articlesCount": n}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleArticlesResponse {
    pub articles: Vec<Article>,
    pub articles_count: i64,
}

/// Trim, drop blanks and duplicates, keep first-seen order
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !seen.iter().any(|s: &String| s == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}
