//! Tag API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use triage_core::{NewTag, Tag, TagPatch};

use super::error::ApiError;
use crate::state::AppState;

pub async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tag>>, ApiError> {
    Ok(Json(state.service().list_tags().await?))
}

pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTag>,
) -> Result<(StatusCode, Json<Tag>), ApiError> {
    let tag = state.service().create_tag(body).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TagPatch>,
) -> Result<Json<Tag>, ApiError> {
    Ok(Json(state.service().update_tag(&id, patch).await?))
}

/// Delete a tag and strip it from every ticket
pub async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service().delete_tag(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
