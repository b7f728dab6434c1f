pub mod agents;
pub mod canned_responses;
pub mod error;
pub mod faq;
pub mod handlers;
pub mod routes;
pub mod tags;
pub mod tickets;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
