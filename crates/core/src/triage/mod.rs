//! Customer-support ticket triage: entities, filtering, and the service facade.

mod board;
mod drafts;
mod error;
mod filter;
pub mod fixtures;
mod http;
mod mock;
mod service;
mod store;
mod types;

pub use board::{move_ticket, BoardColumns, DragPayload, DragTracker};
pub use drafts::{ReplyDrafts, DEFAULT_DRAFT_PREFIX};
pub use error::{EntityKind, TriageError};
pub use filter::TicketFilter;
pub use http::{filter_query, HttpTriageService};
pub use mock::{MockTriageService, DEFAULT_LATENCY};
pub use service::TriageService;
pub use store::TriageStore;
pub use types::{
    Agent, AgentPatch, CannedResponse, CannedResponsePatch, FaqAutoResponse,
    FaqAutoResponsePatch, Marketplace, Message, NewTag, Priority, Tag, TagPatch, Ticket,
    TicketPatch, TicketStatus, FAQ_AUTO_RESPONSE_ID, UNASSIGNED,
};
