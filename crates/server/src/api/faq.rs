use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use triage_core::{FaqAutoResponse, FaqAutoResponsePatch};

use super::error::ApiError;
use crate::state::AppState;

/// The greeting text alone, as a JSON string
pub async fn get_faq_auto_response(
    State(state): State<Arc<AppState>>,
) -> Result<Json<String>, ApiError> {
    Ok(Json(state.service().get_faq_auto_response().await?))
}

pub async fn update_faq_auto_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<FaqAutoResponsePatch>,
) -> Result<Json<FaqAutoResponse>, ApiError> {
    Ok(Json(
        state.service().update_faq_auto_response(&id, patch).await?,
    ))
}
