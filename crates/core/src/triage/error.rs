//! Error type shared by every triage service implementation.

use std::fmt;

use thiserror::Error;

/// Kind of entity an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ticket,
    Tag,
    Agent,
    CannedResponse,
    FaqAutoResponse,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Ticket => "Ticket",
            EntityKind::Tag => "Tag",
            EntityKind::Agent => "Agent",
            EntityKind::CannedResponse => "Canned response",
            EntityKind::FaqAutoResponse => "FAQ auto response",
        };
        f.write_str(name)
    }
}

/// Error type for triage operations.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// The HTTP request itself failed (connection, timeout, decoding).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("Remote error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },
}

impl TriageError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        TriageError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TriageError::NotFound { .. })
    }
}
