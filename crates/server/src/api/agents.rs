//! Agent API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use triage_core::{Agent, AgentPatch};

use super::error::{require_text, ApiError};
use crate::state::AppState;

pub async fn list_agents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Agent>>, ApiError> {
    Ok(Json(state.service().list_agents().await?))
}

/// Create an agent; the body is the bare name as a JSON string
pub async fn create_agent(
    State(state): State<Arc<AppState>>,
    Json(name): Json<String>,
) -> Result<(StatusCode, Json<Agent>), ApiError> {
    require_text("agent name", &name)?;
    let agent = state.service().create_agent(&name).await?;
    Ok((StatusCode::CREATED, Json(agent)))
}

pub async fn update_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<AgentPatch>,
) -> Result<Json<Agent>, ApiError> {
    if let Some(name) = &patch.name {
        require_text("agent name", name)?;
    }
    Ok(Json(state.service().update_agent(&id, patch).await?))
}

/// Delete an agent; their tickets become unassigned
pub async fn delete_agent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service().delete_agent(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
