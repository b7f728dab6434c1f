//! Canned response API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use triage_core::{CannedResponse, CannedResponsePatch};

use super::error::{require_text, ApiError};
use crate::state::AppState;

pub async fn list_canned_responses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CannedResponse>>, ApiError> {
    Ok(Json(state.service().list_canned_responses().await?))
}

pub async fn create_canned_response(
    State(state): State<Arc<AppState>>,
    Json(text): Json<String>,
) -> Result<(StatusCode, Json<CannedResponse>), ApiError> {
    require_text("canned response", &text)?;
    let response = state.service().create_canned_response(&text).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_canned_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CannedResponsePatch>,
) -> Result<Json<CannedResponse>, ApiError> {
    if let Some(text) = &patch.response {
        require_text("canned response", text)?;
    }
    Ok(Json(state.service().update_canned_response(&id, patch).await?))
}

pub async fn delete_canned_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service().delete_canned_response(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
