//! Ticket API handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::sync::Arc;
use triage_core::{Tag, Ticket, TicketFilter, TicketPatch};

use super::error::{require_text, ApiError};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for listing tickets.
///
/// Values stay raw strings so parse failures come back as JSON errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTicketsParams {
    /// Case-insensitive substring over customer name, ticket ID and messages
    pub search: Option<String>,
    /// "New", "In Progress" or "Completed"
    pub ticket_status: Option<String>,
    /// "Low", "Medium" or "High"
    pub priority: Option<String>,
    /// Agent name, or "Unassigned"
    pub assigned_to: Option<String>,
    /// JSON array of tags; a ticket must carry all of them
    pub tags: Option<String>,
    /// RFC 3339 inclusive lower bound on the conversation start
    pub start_date: Option<String>,
    /// RFC 3339 inclusive upper bound on the conversation start
    pub end_date: Option<String>,
}

impl ListTicketsParams {
    pub fn into_filter(self) -> Result<TicketFilter, ApiError> {
        let mut filter = TicketFilter::new();

        if let Some(search) = present(self.search) {
            filter = filter.with_search(search);
        }
        if let Some(status) = present(self.ticket_status) {
            filter = filter.with_status(parse_enum("ticketStatus", status)?);
        }
        if let Some(priority) = present(self.priority) {
            filter = filter.with_priority(parse_enum("priority", priority)?);
        }
        if let Some(agent) = present(self.assigned_to) {
            filter = filter.with_assigned_to(agent);
        }
        if let Some(tags) = present(self.tags) {
            let tags: Vec<Tag> = serde_json::from_str(&tags)
                .map_err(|e| ApiError::bad_request(format!("Invalid tags: {}", e)))?;
            for tag in tags {
                filter = filter.with_tag(tag);
            }
        }
        if let Some(start) = present(self.start_date) {
            filter = filter.with_start_date(parse_date("startDate", &start)?);
        }
        if let Some(end) = present(self.end_date) {
            filter = filter.with_end_date(parse_date("endDate", &end)?);
        }

        Ok(filter)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_enum<T: DeserializeOwned>(name: &str, value: String) -> Result<T, ApiError> {
    serde_json::from_value(Value::String(value.clone()))
        .map_err(|_| ApiError::bad_request(format!("Invalid {}: {}", name, value)))
}

fn parse_date(name: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| ApiError::bad_request(format!("Invalid {}: {}", name, value)))
}

// ============================================================================
// Handlers
// ============================================================================

/// List tickets with optional filters
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTicketsParams>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let filter = params.into_filter()?;
    let tickets = state.service().list_tickets(&filter).await?;
    Ok(Json(tickets))
}

/// Get a ticket by ID
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    Ok(Json(state.service().get_ticket(&id).await?))
}

/// Shallow-merge a patch into a ticket
pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TicketPatch>,
) -> Result<Json<Ticket>, ApiError> {
    Ok(Json(state.service().update_ticket(&id, patch).await?))
}

/// Append an agent reply; the body is a bare JSON string
pub async fn reply_to_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(reply): Json<String>,
) -> Result<Json<Ticket>, ApiError> {
    require_text("reply", &reply)?;
    Ok(Json(state.service().reply_to_ticket(&id, &reply).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{Priority, TicketStatus};

    #[test]
    fn test_empty_params_give_empty_filter() {
        let filter = ListTicketsParams::default().into_filter().unwrap();
        assert!(filter.is_empty());

        let filter = ListTicketsParams {
            search: Some("".to_string()),
            assigned_to: Some(" ".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_params_parse_into_filter() {
        let filter = ListTicketsParams {
            ticket_status: Some("In Progress".to_string()),
            priority: Some("High".to_string()),
            tags: Some(r##"[{"ID":"1","name":"Return","color":"#ff0000"}]"##.to_string()),
            start_date: Some("2025-12-01T00:00:00.000Z".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter.ticket_status, Some(TicketStatus::InProgress));
        assert_eq!(filter.priority, Some(Priority::High));
        assert_eq!(filter.tags[0].id, "1");
        assert!(filter.start_date.is_some());
        assert!(filter.end_date.is_none());
    }

    #[test]
    fn test_bad_params_are_rejected() {
        for params in [
            ListTicketsParams {
                tags: Some("not json".to_string()),
                ..Default::default()
            },
            ListTicketsParams {
                ticket_status: Some("Archived".to_string()),
                ..Default::default()
            },
            ListTicketsParams {
                end_date: Some("yesterday".to_string()),
                ..Default::default()
            },
        ] {
            assert!(matches!(params.into_filter(), Err(ApiError::BadRequest(_))));
        }
    }
}
