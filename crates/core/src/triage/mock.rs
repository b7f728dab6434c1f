//! In-memory triage service with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{
    Agent, AgentPatch, CannedResponse, CannedResponsePatch, FaqAutoResponse,
    FaqAutoResponsePatch, NewTag, Tag, TagPatch, Ticket, TicketFilter, TicketPatch, TriageError,
    TriageService, TriageStore,
};
use crate::config::StoreConfig;

/// Default simulated round-trip time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Triage service backed by an injected [`TriageStore`].
///
/// Each call sleeps for the configured latency, then runs against the store
/// under a single lock, so cascades are all-or-nothing as seen by other
/// callers.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use triage_core::{MockTriageService, TicketFilter, TriageService, TriageStore};
///
/// let service = MockTriageService::new(TriageStore::fixtures(), Duration::ZERO);
/// let tickets = service.list_tickets(&TicketFilter::new().with_search("amp")).await?;
/// ```
pub struct MockTriageService {
    store: Mutex<TriageStore>,
    latency: Duration,
}

impl std::fmt::Debug for MockTriageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTriageService")
            .field("store", &"<store>")
            .field("latency", &self.latency)
            .finish()
    }
}

impl MockTriageService {
    pub fn new(store: TriageStore, latency: Duration) -> Self {
        Self {
            store: Mutex::new(store),
            latency,
        }
    }

    /// Build from the `[store]` config section.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            TriageStore::seeded(config.seed),
            Duration::from_millis(config.latency_ms),
        )
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Replace the whole store. Test-support hook.
    pub async fn reset(&self, store: TriageStore) {
        *self.store.lock().await = store;
        info!("Triage store reset");
    }

    /// Add or replace a ticket, bypassing latency. Test-support hook.
    pub async fn insert_ticket(&self, ticket: Ticket) {
        self.store.lock().await.insert_ticket(ticket);
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl TriageService for MockTriageService {
    async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, TriageError> {
        self.delay().await;
        debug!(?filter, "Listing tickets");
        Ok(self.store.lock().await.tickets(filter))
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket, TriageError> {
        self.delay().await;
        debug!(ticket_id = id, "Getting ticket");
        self.store.lock().await.ticket(id)
    }

    async fn update_ticket(&self, id: &str, patch: TicketPatch) -> Result<Ticket, TriageError> {
        self.delay().await;
        debug!(ticket_id = id, ?patch, "Updating ticket");
        self.store.lock().await.update_ticket(id, patch, Utc::now())
    }

    async fn reply_to_ticket(&self, id: &str, reply: &str) -> Result<Ticket, TriageError> {
        self.delay().await;
        debug!(ticket_id = id, len = reply.len(), "Replying to ticket");
        self.store.lock().await.reply(id, reply, Utc::now())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, TriageError> {
        self.delay().await;
        debug!("Listing tags");
        Ok(self.store.lock().await.tags())
    }

    async fn create_tag(&self, tag: NewTag) -> Result<Tag, TriageError> {
        self.delay().await;
        debug!(name = %tag.name, color = %tag.color, "Creating tag");
        Ok(self.store.lock().await.create_tag(tag))
    }

    async fn update_tag(&self, id: &str, patch: TagPatch) -> Result<Tag, TriageError> {
        self.delay().await;
        debug!(tag_id = id, ?patch, "Updating tag");
        self.store.lock().await.update_tag(id, patch)
    }

    async fn delete_tag(&self, id: &str) -> Result<(), TriageError> {
        self.delay().await;
        debug!(tag_id = id, "Deleting tag");
        let affected = self.store.lock().await.delete_tag(id)?;
        info!(tag_id = id, tickets = affected, "Tag deleted");
        Ok(())
    }

    async fn list_agents(&self) -> Result<Vec<Agent>, TriageError> {
        self.delay().await;
        debug!("Listing agents");
        Ok(self.store.lock().await.agents())
    }

    async fn create_agent(&self, name: &str) -> Result<Agent, TriageError> {
        self.delay().await;
        debug!(name, "Creating agent");
        Ok(self.store.lock().await.create_agent(name))
    }

    async fn update_agent(&self, id: &str, patch: AgentPatch) -> Result<Agent, TriageError> {
        self.delay().await;
        debug!(agent_id = id, ?patch, "Updating agent");
        self.store.lock().await.update_agent(id, patch)
    }

    async fn delete_agent(&self, id: &str) -> Result<(), TriageError> {
        self.delay().await;
        debug!(agent_id = id, "Deleting agent");
        let affected = self.store.lock().await.delete_agent(id)?;
        info!(agent_id = id, tickets = affected, "Agent deleted, tickets unassigned");
        Ok(())
    }

    async fn list_canned_responses(&self) -> Result<Vec<CannedResponse>, TriageError> {
        self.delay().await;
        debug!("Listing canned responses");
        Ok(self.store.lock().await.canned_responses())
    }

    async fn create_canned_response(&self, text: &str) -> Result<CannedResponse, TriageError> {
        self.delay().await;
        debug!(len = text.len(), "Creating canned response");
        Ok(self.store.lock().await.create_canned_response(text))
    }

    async fn update_canned_response(
        &self,
        id: &str,
        patch: CannedResponsePatch,
    ) -> Result<CannedResponse, TriageError> {
        self.delay().await;
        debug!(response_id = id, "Updating canned response");
        self.store.lock().await.update_canned_response(id, patch)
    }

    async fn delete_canned_response(&self, id: &str) -> Result<(), TriageError> {
        self.delay().await;
        debug!(response_id = id, "Deleting canned response");
        self.store.lock().await.delete_canned_response(id)
    }

    async fn get_faq_auto_response(&self) -> Result<String, TriageError> {
        self.delay().await;
        debug!("Getting FAQ auto response");
        Ok(self.store.lock().await.faq_auto_response().faq_auto_response)
    }

    async fn update_faq_auto_response(
        &self,
        id: &str,
        patch: FaqAutoResponsePatch,
    ) -> Result<FaqAutoResponse, TriageError> {
        self.delay().await;
        debug!(faq_id = id, "Updating FAQ auto response");
        self.store.lock().await.update_faq_auto_response(id, patch)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
