//! The query facade every caller goes through.

use async_trait::async_trait;

use super::{
    Agent, AgentPatch, CannedResponse, CannedResponsePatch, FaqAutoResponse,
    FaqAutoResponsePatch, NewTag, Tag, TagPatch, Ticket, TicketFilter, TicketPatch, TriageError,
};

/// Triage operations, shared by the in-memory and the HTTP backends.
///
/// Every method returns owned snapshots; mutating a returned value never
/// affects the backend.
#[async_trait]
pub trait TriageService: Send + Sync {
    // Tickets

    /// List tickets matching the filter, in store order.
    async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, TriageError>;

    /// Get a ticket by ID.
    async fn get_ticket(&self, id: &str) -> Result<Ticket, TriageError>;

    /// Shallow-merge `patch` into the ticket and refresh its last-updated time.
    async fn update_ticket(&self, id: &str, patch: TicketPatch) -> Result<Ticket, TriageError>;

    /// Append an agent-authored reply.
    async fn reply_to_ticket(&self, id: &str, reply: &str) -> Result<Ticket, TriageError>;

    // Tags

    async fn list_tags(&self) -> Result<Vec<Tag>, TriageError>;

    async fn create_tag(&self, tag: NewTag) -> Result<Tag, TriageError>;

    async fn update_tag(&self, id: &str, patch: TagPatch) -> Result<Tag, TriageError>;

    /// Delete a tag and remove it from every ticket.
    async fn delete_tag(&self, id: &str) -> Result<(), TriageError>;

    // Agents

    async fn list_agents(&self) -> Result<Vec<Agent>, TriageError>;

    async fn create_agent(&self, name: &str) -> Result<Agent, TriageError>;

    async fn update_agent(&self, id: &str, patch: AgentPatch) -> Result<Agent, TriageError>;

    /// Delete an agent and reassign their tickets to "Unassigned".
    async fn delete_agent(&self, id: &str) -> Result<(), TriageError>;

    // Canned responses

    async fn list_canned_responses(&self) -> Result<Vec<CannedResponse>, TriageError>;

    async fn create_canned_response(&self, text: &str) -> Result<CannedResponse, TriageError>;

    async fn update_canned_response(
        &self,
        id: &str,
        patch: CannedResponsePatch,
    ) -> Result<CannedResponse, TriageError>;

    async fn delete_canned_response(&self, id: &str) -> Result<(), TriageError>;

    // FAQ auto-response

    /// Current greeting text.
    async fn get_faq_auto_response(&self) -> Result<String, TriageError>;

    async fn update_faq_auto_response(
        &self,
        id: &str,
        patch: FaqAutoResponsePatch,
    ) -> Result<FaqAutoResponse, TriageError>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}
