use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{agents, canned_responses, faq, handlers, tags, tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Tickets
        .route("/tickets", get(tickets::list_tickets))
        .route(
            "/tickets/{id}",
            get(tickets::get_ticket).put(tickets::update_ticket),
        )
        .route("/tickets/{id}/reply", put(tickets::reply_to_ticket))
        // Tags
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/{id}", put(tags::update_tag).delete(tags::delete_tag))
        // Agents
        .route("/agents", get(agents::list_agents).post(agents::create_agent))
        .route(
            "/agents/{id}",
            put(agents::update_agent).delete(agents::delete_agent),
        )
        // Canned responses
        .route(
            "/cannedResponses",
            get(canned_responses::list_canned_responses)
                .post(canned_responses::create_canned_response),
        )
        .route(
            "/cannedResponses/{id}",
            put(canned_responses::update_canned_response)
                .delete(canned_responses::delete_canned_response),
        )
        // FAQ auto-response
        .route("/faqAutoResponse", get(faq::get_faq_auto_response))
        .route("/faqAutoResponse/{id}", put(faq::update_faq_auto_response))
        .with_state(state);

    // The board UI is served from another origin
    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
