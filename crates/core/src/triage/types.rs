//! Core triage data types.
//!
//! Field names on the wire follow the board UI's camelCase JSON
//! (`ticketID`, `marketplaceConversationID`, `relatedListingURL`, `ID`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent name used for tickets nobody is working on.
pub const UNASSIGNED: &str = "Unassigned";

/// Fixed ID of the singleton FAQ auto-response record.
pub const FAQ_AUTO_RESPONSE_ID: &str = "1";

// ============================================================================
// Enumerations
// ============================================================================

/// Marketplace a conversation was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    Reverb,
    #[serde(rename = "eBay")]
    Ebay,
    Amazon,
    Etsy,
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Position of a ticket on the board.
///
/// Any status may move to any other status; there is no enforced ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TicketStatus {
    /// All statuses in board column order.
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::New,
        TicketStatus::InProgress,
        TicketStatus::Completed,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "New",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Completed => "Completed",
        }
    }

    /// Zero-based column index on the board.
    pub fn column(&self) -> usize {
        match self {
            TicketStatus::New => 0,
            TicketStatus::InProgress => 1,
            TicketStatus::Completed => 2,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A label attached to tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    /// Display color, usually a hex code like `#FF6B6B`.
    pub color: String,
}

/// A support agent. Tickets refer to agents by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
}

/// A reusable reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    #[serde(rename = "ID")]
    pub id: String,
    pub response: String,
}

/// The greeting sent automatically to new inquiries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqAutoResponse {
    #[serde(rename = "ID")]
    pub id: String,
    pub faq_auto_response: String,
}

/// One entry of a ticket conversation. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message body.
    pub message: String,
    /// True when written by an agent, false when written by the customer.
    pub authored: bool,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub image_attachments: Vec<String>,
}

impl Message {
    /// Build an agent-authored message without attachments.
    pub fn agent_reply(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            message: text.into(),
            authored: true,
            date,
            image_attachments: Vec::new(),
        }
    }
}

/// A customer conversation tracked on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "ticketID")]
    pub id: String,
    pub marketplace: Marketplace,
    #[serde(rename = "marketplaceConversationID")]
    pub marketplace_conversation_id: String,
    pub customer_name: String,
    pub priority: Priority,
    pub ticket_status: TicketStatus,
    /// Agent name, or [`UNASSIGNED`].
    pub assigned_to: String,
    /// Tags embedded by value. Renaming a tag does not touch these copies.
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub conversation_start_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_history: Option<Vec<String>>,
    #[serde(
        rename = "relatedListingURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub related_listing_url: Option<String>,
}

impl Ticket {
    /// Check whether the ticket carries a tag with the given ID.
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    /// Mark the ticket as modified at `now`, never moving the timestamp backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_updated_date {
            self.last_updated_date = now;
        }
    }
}

// ============================================================================
// Creation and patch types
// ============================================================================

/// Request to create a tag. The ID is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

impl NewTag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial ticket update. Present fields replace the stored value.
///
/// Messages are absent: conversations only grow through replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<Marketplace>,
    #[serde(
        rename = "marketplaceConversationID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub marketplace_conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_history: Option<Vec<String>>,
    #[serde(
        rename = "relatedListingURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub related_listing_url: Option<String>,
}

impl TicketPatch {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_related_listing_url(mut self, url: impl Into<String>) -> Self {
        self.related_listing_url = Some(url.into());
        self
    }

    /// Merge into `ticket`. Does not touch `last_updated_date`.
    pub fn apply_to(self, ticket: &mut Ticket) {
        if let Some(marketplace) = self.marketplace {
            ticket.marketplace = marketplace;
        }
        if let Some(id) = self.marketplace_conversation_id {
            ticket.marketplace_conversation_id = id;
        }
        if let Some(name) = self.customer_name {
            ticket.customer_name = name;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(status) = self.ticket_status {
            ticket.ticket_status = status;
        }
        if let Some(agent) = self.assigned_to {
            ticket.assigned_to = agent;
        }
        if let Some(tags) = self.tags {
            ticket.tags = tags;
        }
        if let Some(date) = self.conversation_start_date {
            ticket.conversation_start_date = date;
        }
        if let Some(history) = self.order_history {
            ticket.order_history = Some(history);
        }
        if let Some(url) = self.related_listing_url {
            ticket.related_listing_url = Some(url);
        }
    }
}

/// Partial tag update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TagPatch {
    pub fn apply_to(self, tag: &mut Tag) {
        if let Some(name) = self.name {
            tag.name = name;
        }
        if let Some(color) = self.color {
            tag.color = color;
        }
    }
}

/// Partial agent update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AgentPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Partial canned response update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponsePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl CannedResponsePatch {
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
        }
    }
}

/// Partial FAQ auto-response update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqAutoResponsePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_auto_response: Option<String>,
}

impl FaqAutoResponsePatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            faq_auto_response: Some(text.into()),
        }
    }
}
