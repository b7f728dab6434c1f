//! Ticket filtering.
//!
//! Every criterion is optional. A ticket is kept only if it satisfies all
//! present criteria; empty strings and empty tag lists count as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, Tag, Ticket, TicketStatus};

/// Filter for querying tickets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilter {
    /// Case-insensitive substring of customer name, ticket ID or any message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Exact agent name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Tickets must carry every one of these tags (matched by ID).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Inclusive lower bound on the conversation start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the conversation start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TicketFilter {
    /// Create a filter with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.ticket_status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assigned_to(mut self, agent: impl Into<String>) -> Self {
        self.assigned_to = Some(agent.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_start_date(mut self, date: DateTime<Utc>) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: DateTime<Utc>) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Trimmed search text that actually constrains results, if any.
    pub fn active_search(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Trimmed agent name that actually constrains results, if any.
    pub fn active_assignee(&self) -> Option<&str> {
        self.assigned_to
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// True when no criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.active_search().is_none()
            && self.ticket_status.is_none()
            && self.priority.is_none()
            && self.active_assignee().is_none()
            && self.tags.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check whether a single ticket satisfies all present criteria.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(query) = self.active_search() {
            let query = query.to_lowercase();
            let found = ticket.customer_name.to_lowercase().contains(&query)
                || ticket.id.to_lowercase().contains(&query)
                || ticket
                    .messages
                    .iter()
                    .any(|m| m.message.to_lowercase().contains(&query));
            if !found {
                return false;
            }
        }

        if let Some(status) = self.ticket_status {
            if ticket.ticket_status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }

        if let Some(agent) = self.active_assignee() {
            if ticket.assigned_to != agent {
                return false;
            }
        }

        if !self.tags.iter().all(|tag| ticket.has_tag(&tag.id)) {
            return false;
        }

        if let Some(start) = self.start_date {
            if ticket.conversation_start_date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if ticket.conversation_start_date > end {
                return false;
            }
        }

        true
    }

    /// Keep matching tickets, preserving their order.
    pub fn apply<'a, I>(&self, tickets: I) -> Vec<Ticket>
    where
        I: IntoIterator<Item = &'a Ticket>,
    {
        tickets
            .into_iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}
