//! Unsent reply drafts, keyed per ticket.

use std::collections::HashMap;

/// Key prefix the board UI uses for its stored drafts.
pub const DEFAULT_DRAFT_PREFIX: &str = "ticket-draft-";

/// Key-value side channel holding reply text an agent has not sent yet.
#[derive(Debug, Clone)]
pub struct ReplyDrafts {
    prefix: String,
    entries: HashMap<String, String>,
}

impl Default for ReplyDrafts {
    fn default() -> Self {
        Self::new(DEFAULT_DRAFT_PREFIX)
    }
}

impl ReplyDrafts {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: HashMap::new(),
        }
    }

    /// Storage key for a ticket's draft.
    pub fn key(&self, ticket_id: &str) -> String {
        format!("{}{}", self.prefix, ticket_id)
    }

    /// Store `text`, or drop the draft when it is blank.
    pub fn save(&mut self, ticket_id: &str, text: &str) {
        let key = self.key(ticket_id);
        if text.trim().is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, text.to_string());
        }
    }

    pub fn load(&self, ticket_id: &str) -> Option<&str> {
        self.entries.get(&self.key(ticket_id)).map(String::as_str)
    }

    /// Forget a draft, typically after the reply was sent.
    pub fn clear(&mut self, ticket_id: &str) -> Option<String> {
        self.entries.remove(&self.key(ticket_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
