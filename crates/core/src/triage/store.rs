//! In-memory entity store.
//!
//! Plain synchronous collections plus the mutation rules (shallow patches,
//! cascades, ID assignment). Latency, logging and locking live in the
//! service layer on top.

use chrono::{DateTime, Utc};

use super::{
    fixtures, Agent, AgentPatch, CannedResponse, CannedResponsePatch, EntityKind,
    FaqAutoResponse, FaqAutoResponsePatch, Message, NewTag, Tag, TagPatch, Ticket, TicketFilter,
    TicketPatch, TriageError, FAQ_AUTO_RESPONSE_ID, UNASSIGNED,
};
use crate::config::StoreSeed;

/// Monotonic ID source for one collection.
///
/// Starts past the largest numeric ID seen at construction, so IDs freed by
/// deletions are never handed out again.
#[derive(Debug, Clone)]
struct IdSequence {
    next: u64,
}

impl IdSequence {
    fn after<'a>(ids: impl Iterator<Item = &'a str>) -> Self {
        let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
        Self {
            next: max.saturating_add(1),
        }
    }

    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id.to_string()
    }
}

/// All triage entities for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct TriageStore {
    tickets: Vec<Ticket>,
    tags: Vec<Tag>,
    agents: Vec<Agent>,
    canned_responses: Vec<CannedResponse>,
    faq: FaqAutoResponse,
    tag_ids: IdSequence,
    agent_ids: IdSequence,
    canned_response_ids: IdSequence,
}

impl Default for TriageStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl TriageStore {
    /// Build a store from explicit collections.
    pub fn new(
        tickets: Vec<Ticket>,
        tags: Vec<Tag>,
        agents: Vec<Agent>,
        canned_responses: Vec<CannedResponse>,
        faq: FaqAutoResponse,
    ) -> Self {
        let tag_ids = IdSequence::after(tags.iter().map(|t| t.id.as_str()));
        let agent_ids = IdSequence::after(agents.iter().map(|a| a.id.as_str()));
        let canned_response_ids =
            IdSequence::after(canned_responses.iter().map(|r| r.id.as_str()));
        Self {
            tickets,
            tags,
            agents,
            canned_responses,
            faq,
            tag_ids,
            agent_ids,
            canned_response_ids,
        }
    }

    /// Store with no entities and a blank FAQ greeting.
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            FaqAutoResponse {
                id: FAQ_AUTO_RESPONSE_ID.to_string(),
                faq_auto_response: String::new(),
            },
        )
    }

    /// Store seeded with the demo conversations.
    pub fn fixtures() -> Self {
        Self::new(
            fixtures::tickets(),
            fixtures::tags(),
            fixtures::agents(),
            fixtures::canned_responses(),
            fixtures::faq_auto_response(),
        )
    }

    pub fn seeded(seed: StoreSeed) -> Self {
        match seed {
            StoreSeed::Fixtures => Self::fixtures(),
            StoreSeed::Empty => Self::empty(),
        }
    }

    /// Add a ticket. Tickets arrive from marketplaces, not from the facade.
    ///
    /// An existing ticket with the same ID is replaced in place.
    pub fn insert_ticket(&mut self, ticket: Ticket) {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => self.tickets.push(ticket),
        }
    }

    // ------------------------------------------------------------------
    // Tickets
    // ------------------------------------------------------------------

    pub fn tickets(&self, filter: &TicketFilter) -> Vec<Ticket> {
        filter.apply(&self.tickets)
    }

    pub fn ticket(&self, id: &str) -> Result<Ticket, TriageError> {
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TriageError::not_found(EntityKind::Ticket, id))
    }

    fn ticket_mut(&mut self, id: &str) -> Result<&mut Ticket, TriageError> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::Ticket, id))
    }

    pub fn update_ticket(
        &mut self,
        id: &str,
        patch: TicketPatch,
        now: DateTime<Utc>,
    ) -> Result<Ticket, TriageError> {
        let ticket = self.ticket_mut(id)?;
        patch.apply_to(ticket);
        ticket.touch(now);
        Ok(ticket.clone())
    }

    /// Append an agent-authored message.
    pub fn reply(
        &mut self,
        id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Ticket, TriageError> {
        let ticket = self.ticket_mut(id)?;
        ticket.messages.push(Message::agent_reply(text, now));
        ticket.touch(now);
        Ok(ticket.clone())
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    pub fn tags(&self) -> Vec<Tag> {
        self.tags.clone()
    }

    pub fn create_tag(&mut self, new_tag: NewTag) -> Tag {
        let tag = Tag {
            id: self.tag_ids.next_id(),
            name: new_tag.name,
            color: new_tag.color,
        };
        self.tags.push(tag.clone());
        tag
    }

    /// Update the tag record only. Copies already embedded in tickets keep
    /// their old name and color.
    pub fn update_tag(&mut self, id: &str, patch: TagPatch) -> Result<Tag, TriageError> {
        let tag = self
            .tags
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::Tag, id))?;
        patch.apply_to(tag);
        Ok(tag.clone())
    }

    /// Remove a tag and strip it from every ticket.
    ///
    /// Returns the number of tickets that lost the tag.
    pub fn delete_tag(&mut self, id: &str) -> Result<usize, TriageError> {
        let index = self
            .tags
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::Tag, id))?;

        let mut affected = 0;
        for ticket in &mut self.tickets {
            let before = ticket.tags.len();
            ticket.tags.retain(|t| t.id != id);
            if ticket.tags.len() != before {
                affected += 1;
            }
        }

        self.tags.remove(index);
        Ok(affected)
    }

    // ------------------------------------------------------------------
    // Agents
    // ------------------------------------------------------------------

    pub fn agents(&self) -> Vec<Agent> {
        self.agents.clone()
    }

    pub fn create_agent(&mut self, name: &str) -> Agent {
        let agent = Agent {
            id: self.agent_ids.next_id(),
            name: name.to_string(),
        };
        self.agents.push(agent.clone());
        agent
    }

    /// Rename an agent. Tickets keep the name they were assigned under.
    pub fn update_agent(&mut self, id: &str, patch: AgentPatch) -> Result<Agent, TriageError> {
        let agent = self
            .agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::Agent, id))?;
        if let Some(name) = patch.name {
            agent.name = name;
        }
        Ok(agent.clone())
    }

    /// Remove an agent and hand their tickets back to [`UNASSIGNED`].
    ///
    /// Returns the number of tickets reassigned.
    pub fn delete_agent(&mut self, id: &str) -> Result<usize, TriageError> {
        let index = self
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::Agent, id))?;
        let name = self.agents[index].name.clone();

        let mut affected = 0;
        for ticket in self.tickets.iter_mut().filter(|t| t.assigned_to == name) {
            ticket.assigned_to = UNASSIGNED.to_string();
            affected += 1;
        }

        self.agents.remove(index);
        Ok(affected)
    }

    // ------------------------------------------------------------------
    // Canned responses
    // ------------------------------------------------------------------

    pub fn canned_responses(&self) -> Vec<CannedResponse> {
        self.canned_responses.clone()
    }

    pub fn create_canned_response(&mut self, text: &str) -> CannedResponse {
        let response = CannedResponse {
            id: self.canned_response_ids.next_id(),
            response: text.to_string(),
        };
        self.canned_responses.push(response.clone());
        response
    }

    pub fn update_canned_response(
        &mut self,
        id: &str,
        patch: CannedResponsePatch,
    ) -> Result<CannedResponse, TriageError> {
        let response = self
            .canned_responses
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::CannedResponse, id))?;
        if let Some(text) = patch.response {
            response.response = text;
        }
        Ok(response.clone())
    }

    pub fn delete_canned_response(&mut self, id: &str) -> Result<(), TriageError> {
        let index = self
            .canned_responses
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| TriageError::not_found(EntityKind::CannedResponse, id))?;
        self.canned_responses.remove(index);
        Ok(())
    }

    // ------------------------------------------------------------------
    // FAQ auto-response
    // ------------------------------------------------------------------

    pub fn faq_auto_response(&self) -> FaqAutoResponse {
        self.faq.clone()
    }

    pub fn update_faq_auto_response(
        &mut self,
        id: &str,
        patch: FaqAutoResponsePatch,
    ) -> Result<FaqAutoResponse, TriageError> {
        if self.faq.id != id {
            return Err(TriageError::not_found(EntityKind::FaqAutoResponse, id));
        }
        if let Some(text) = patch.faq_auto_response {
            self.faq.faq_auto_response = text;
        }
        Ok(self.faq.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{Priority, TicketStatus};

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_id_sequence_skips_past_existing() {
        let mut seq = IdSequence::after(["1", "7", "x", "3"].into_iter());
        assert_eq!(seq.next_id(), "8");
        assert_eq!(seq.next_id(), "9");

        let mut empty = IdSequence::after(std::iter::empty());
        assert_eq!(empty.next_id(), "1");
    }

    #[test]
    fn test_id_sequence_does_not_overflow() {
        let max = u64::MAX.to_string();
        let mut seq = IdSequence::after([max.as_str()].into_iter());
        assert_eq!(seq.next_id(), max);
        assert_eq!(seq.next_id(), max);
    }

    #[test]
    fn test_update_ticket_merges_and_touches() {
        let mut store = TriageStore::fixtures();
        let before = store.ticket("TKT-002").unwrap();

        let updated = store
            .update_ticket(
                "TKT-002",
                TicketPatch::new().with_status(TicketStatus::Completed),
                now(),
            )
            .unwrap();

        assert_eq!(updated.ticket_status, TicketStatus::Completed);
        assert_eq!(updated.priority, before.priority);
        assert_eq!(updated.messages, before.messages);
        assert!(updated.last_updated_date > before.last_updated_date);
        assert_eq!(store.ticket("TKT-002").unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_ticket_leaves_store_unchanged() {
        let mut store = TriageStore::fixtures();
        let before = store.tickets(&TicketFilter::new());

        let result = store.update_ticket(
            "TKT-404",
            TicketPatch::new().with_priority(Priority::Low),
            now(),
        );

        assert!(matches!(
            result,
            Err(TriageError::NotFound {
                kind: EntityKind::Ticket,
                ..
            })
        ));
        assert_eq!(store.tickets(&TicketFilter::new()), before);
    }

    #[test]
    fn test_reply_appends_agent_message() {
        let mut store = TriageStore::fixtures();
        let before = store.ticket("TKT-007").unwrap();

        let updated = store.reply("TKT-007", "Hello", now()).unwrap();

        assert_eq!(updated.messages.len(), before.messages.len() + 1);
        assert_eq!(&updated.messages[..before.messages.len()], &before.messages[..]);
        let last = updated.messages.last().unwrap();
        assert_eq!(last.message, "Hello");
        assert!(last.authored);
        assert!(last.image_attachments.is_empty());
        assert!(updated.last_updated_date >= before.last_updated_date);
        // Reply does not move the card
        assert_eq!(updated.ticket_status, TicketStatus::New);
    }

    #[test]
    fn test_delete_tag_cascades() {
        let mut store = TriageStore::fixtures();

        let affected = store.delete_tag("2").unwrap();

        assert_eq!(affected, 2);
        assert!(store.tags().iter().all(|t| t.id != "2"));
        assert!(store
            .tickets(&TicketFilter::new())
            .iter()
            .all(|t| !t.has_tag("2")));
        // TKT-005 keeps its other tag
        assert!(store.ticket("TKT-005").unwrap().has_tag("3"));
    }

    #[test]
    fn test_delete_unknown_tag_mutates_nothing() {
        let mut store = TriageStore::fixtures();
        let tickets = store.tickets(&TicketFilter::new());

        assert!(store.delete_tag("99").unwrap_err().is_not_found());
        assert_eq!(store.tags().len(), 5);
        assert_eq!(store.tickets(&TicketFilter::new()), tickets);
    }

    #[test]
    fn test_delete_agent_reassigns_tickets() {
        let mut store = TriageStore::fixtures();
        let adam_tickets: Vec<String> = store
            .tickets(&TicketFilter::new().with_assigned_to("Adam"))
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(adam_tickets.len(), 4);

        let affected = store.delete_agent("1").unwrap();

        assert_eq!(affected, 4);
        for id in &adam_tickets {
            assert_eq!(store.ticket(id).unwrap().assigned_to, UNASSIGNED);
        }
        assert!(store.agents().iter().all(|a| a.name != "Adam"));
        assert_eq!(
            store
                .tickets(&TicketFilter::new().with_assigned_to("Daniel"))
                .len(),
            4
        );
    }

    #[test]
    fn test_created_ids_not_reused_after_delete() {
        let mut store = TriageStore::fixtures();

        let first = store.create_tag(NewTag::new("VIP", "#123456"));
        assert_eq!(first.id, "6");

        store.delete_tag("3").unwrap();
        let second = store.create_tag(NewTag::new("Refund", "#654321"));
        assert_eq!(second.id, "7");

        let ids: Vec<String> = store.tags().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_update_tag_does_not_touch_embedded_copies() {
        let mut store = TriageStore::fixtures();

        let renamed = store
            .update_tag(
                "1",
                TagPatch {
                    name: Some("WaitingOnWarehouse".to_string()),
                    color: None,
                },
            )
            .unwrap();

        assert_eq!(renamed.name, "WaitingOnWarehouse");
        assert_eq!(renamed.color, "#FF6B6B");
        let embedded = &store.ticket("TKT-001").unwrap().tags[0];
        assert_eq!(embedded.name, "WaitingOnShop");
    }

    #[test]
    fn test_agent_crud() {
        let mut store = TriageStore::fixtures();

        let agent = store.create_agent("Priya");
        assert_eq!(agent.id, "4");

        let renamed = store.update_agent("4", AgentPatch::name("Priya K")).unwrap();
        assert_eq!(renamed.name, "Priya K");

        assert!(store
            .update_agent("40", AgentPatch::name("Nobody"))
            .unwrap_err()
            .is_not_found());
        assert!(store.delete_agent("40").unwrap_err().is_not_found());
    }

    #[test]
    fn test_canned_response_crud() {
        let mut store = TriageStore::fixtures();

        let created = store.create_canned_response("We shipped it today.");
        assert_eq!(created.id, "6");

        let updated = store
            .update_canned_response("6", CannedResponsePatch::response("Shipped!"))
            .unwrap();
        assert_eq!(updated.response, "Shipped!");

        store.delete_canned_response("6").unwrap();
        assert!(store
            .delete_canned_response("6")
            .unwrap_err()
            .is_not_found());
        assert_eq!(store.canned_responses().len(), 5);
    }

    #[test]
    fn test_faq_update_requires_singleton_id() {
        let mut store = TriageStore::fixtures();

        let updated = store
            .update_faq_auto_response("1", FaqAutoResponsePatch::text("Hi there!"))
            .unwrap();
        assert_eq!(updated.faq_auto_response, "Hi there!");

        let err = store
            .update_faq_auto_response("2", FaqAutoResponsePatch::text("nope"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.faq_auto_response().faq_auto_response, "Hi there!");
    }

    #[test]
    fn test_insert_ticket_replaces_same_id() {
        let mut store = TriageStore::empty();
        let mut ticket = fixtures::tickets().remove(0);
        store.insert_ticket(ticket.clone());

        ticket.customer_name = "Sarah J.".to_string();
        store.insert_ticket(ticket);

        let all = store.tickets(&TicketFilter::new());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].customer_name, "Sarah J.");
    }

    #[test]
    fn test_seeded_empty() {
        let store = TriageStore::seeded(StoreSeed::Empty);
        assert!(store.tickets(&TicketFilter::new()).is_empty());
        assert!(store.tags().is_empty());
        assert_eq!(store.faq_auto_response().id, FAQ_AUTO_RESPONSE_ID);
    }
}
