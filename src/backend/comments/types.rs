use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::profiles::Profile;
use crate::shared::timestamp;

/// A comment as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    #[serde(serialize_with = "timestamp::serialize_api")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize_api")]
    pub updated_at: DateTime<Utc>,
    pub body: String,
    #[serde(skip)]
    pub author_id: i64,
    pub author: Profile,
}

/// `{"comment": {"body": ...}}`
#[derive(Debug, Default, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub comment: NewComment,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewComment {
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SingleCommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct MultipleCommentsResponse {
    pub comments: Vec<Comment>,
}
