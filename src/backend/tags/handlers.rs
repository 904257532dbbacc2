use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::tags::db::all_tags;

/// `{"tags": [...]}`
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// List all tags
pub async fn list_tags(State(app_state): State<AppState>) -> Result<Json<TagsResponse>, BackendError> {
    let pool = app_state.pool()?;
    let tags = all_tags(pool).await?;
    tracing::debug!("Returning {} tags", tags.len());
    Ok(Json(TagsResponse { tags }))
}
