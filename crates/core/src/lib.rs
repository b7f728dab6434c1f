pub mod config;
pub mod triage;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RemoteConfig,
    SanitizedConfig, ServerConfig, StoreConfig, StoreSeed,
};
pub use triage::{
    move_ticket, Agent, AgentPatch, BoardColumns, CannedResponse, CannedResponsePatch,
    DragPayload, DragTracker, EntityKind, FaqAutoResponse, FaqAutoResponsePatch,
    HttpTriageService, Marketplace, Message, MockTriageService, NewTag, Priority, ReplyDrafts,
    Tag, TagPatch, Ticket, TicketFilter, TicketPatch, TicketStatus, TriageError, TriageService,
    TriageStore, FAQ_AUTO_RESPONSE_ID, UNASSIGNED,
};
