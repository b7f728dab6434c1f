//! Triage service backed by a remote triage REST API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use super::{
    Agent, AgentPatch, CannedResponse, CannedResponsePatch, EntityKind, FaqAutoResponse,
    FaqAutoResponsePatch, NewTag, Tag, TagPatch, Ticket, TicketFilter, TicketPatch, TriageError,
    TriageService,
};
use crate::config::RemoteConfig;

/// HTTP client for the `/api` routes served by the triage server.
///
/// A 404 on an entity route maps to [`TriageError::NotFound`], other
/// non-success statuses (including a 404 on a collection route) to
/// [`TriageError::Remote`], and transport failures pass through untouched as
/// [`TriageError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpTriageService {
    client: Client,
    base_url: String,
}

impl HttpTriageService {
    /// Create a client for the API rooted at `config.base_url`
    /// (e.g. `http://localhost:5000/api`).
    pub fn new(config: &RemoteConfig) -> Result<Self, TriageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and check the status, mapping failures.
    async fn execute(
        &self,
        request: RequestBuilder,
        kind: EntityKind,
        id: &str,
    ) -> Result<Response, TriageError> {
        let response = request.send().await?;
        let status = response.status();

        // Collection routes have no entity to miss; a 404 there is a bad route.
        if status == StatusCode::NOT_FOUND && !id.is_empty() {
            return Err(TriageError::not_found(kind, id));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(TriageError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        kind: EntityKind,
        id: &str,
    ) -> Result<T, TriageError> {
        let response = self.execute(request, kind, id).await?;
        Ok(response.json().await?)
    }
}

/// Query parameters understood by `GET /api/tickets`.
pub fn filter_query(filter: &TicketFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(search) = filter.active_search() {
        params.push(("search", search.to_string()));
    }
    if let Some(status) = filter.ticket_status {
        params.push(("ticketStatus", status.as_str().to_string()));
    }
    if let Some(priority) = filter.priority {
        params.push(("priority", priority.as_str().to_string()));
    }
    if let Some(agent) = filter.active_assignee() {
        params.push(("assignedTo", agent.to_string()));
    }
    if !filter.tags.is_empty() {
        let tags: Vec<Value> = filter
            .tags
            .iter()
            .map(|t| json!({ "ID": t.id, "name": t.name, "color": t.color }))
            .collect();
        params.push(("tags", Value::Array(tags).to_string()));
    }
    if let Some(start) = filter.start_date {
        params.push(("startDate", start.to_rfc3339_opts(SecondsFormat::Millis, true)));
    }
    if let Some(end) = filter.end_date {
        params.push(("endDate", end.to_rfc3339_opts(SecondsFormat::Millis, true)));
    }

    params
}

#[async_trait]
impl TriageService for HttpTriageService {
    async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, TriageError> {
        let params = filter_query(filter);
        debug!(params = params.len(), "GET /tickets");
        let request = self.client.get(self.url("/tickets")).query(&params);
        self.fetch(request, EntityKind::Ticket, "").await
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket, TriageError> {
        let request = self.client.get(self.url(&format!("/tickets/{}", id)));
        self.fetch(request, EntityKind::Ticket, id).await
    }

    async fn update_ticket(&self, id: &str, patch: TicketPatch) -> Result<Ticket, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/tickets/{}", id)))
            .json(&patch);
        self.fetch(request, EntityKind::Ticket, id).await
    }

    async fn reply_to_ticket(&self, id: &str, reply: &str) -> Result<Ticket, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/tickets/{}/reply", id)))
            .json(&reply);
        self.fetch(request, EntityKind::Ticket, id).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, TriageError> {
        let request = self.client.get(self.url("/tags"));
        self.fetch(request, EntityKind::Tag, "").await
    }

    async fn create_tag(&self, tag: NewTag) -> Result<Tag, TriageError> {
        let request = self.client.post(self.url("/tags")).json(&tag);
        self.fetch(request, EntityKind::Tag, "").await
    }

    async fn update_tag(&self, id: &str, patch: TagPatch) -> Result<Tag, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/tags/{}", id)))
            .json(&patch);
        self.fetch(request, EntityKind::Tag, id).await
    }

    async fn delete_tag(&self, id: &str) -> Result<(), TriageError> {
        let request = self.client.delete(self.url(&format!("/tags/{}", id)));
        self.execute(request, EntityKind::Tag, id).await?;
        Ok(())
    }

    async fn list_agents(&self) -> Result<Vec<Agent>, TriageError> {
        let request = self.client.get(self.url("/agents"));
        self.fetch(request, EntityKind::Agent, "").await
    }

    async fn create_agent(&self, name: &str) -> Result<Agent, TriageError> {
        let request = self.client.post(self.url("/agents")).json(&name);
        self.fetch(request, EntityKind::Agent, "").await
    }

    async fn update_agent(&self, id: &str, patch: AgentPatch) -> Result<Agent, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/agents/{}", id)))
            .json(&patch);
        self.fetch(request, EntityKind::Agent, id).await
    }

    async fn delete_agent(&self, id: &str) -> Result<(), TriageError> {
        let request = self.client.delete(self.url(&format!("/agents/{}", id)));
        self.execute(request, EntityKind::Agent, id).await?;
        Ok(())
    }

    async fn list_canned_responses(&self) -> Result<Vec<CannedResponse>, TriageError> {
        let request = self.client.get(self.url("/cannedResponses"));
        self.fetch(request, EntityKind::CannedResponse, "").await
    }

    async fn create_canned_response(&self, text: &str) -> Result<CannedResponse, TriageError> {
        let request = self.client.post(self.url("/cannedResponses")).json(&text);
        self.fetch(request, EntityKind::CannedResponse, "").await
    }

    async fn update_canned_response(
        &self,
        id: &str,
        patch: CannedResponsePatch,
    ) -> Result<CannedResponse, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/cannedResponses/{}", id)))
            .json(&patch);
        self.fetch(request, EntityKind::CannedResponse, id).await
    }

    async fn delete_canned_response(&self, id: &str) -> Result<(), TriageError> {
        let request = self
            .client
            .delete(self.url(&format!("/cannedResponses/{}", id)));
        self.execute(request, EntityKind::CannedResponse, id).await?;
        Ok(())
    }

    async fn get_faq_auto_response(&self) -> Result<String, TriageError> {
        let request = self.client.get(self.url("/faqAutoResponse"));
        self.fetch(request, EntityKind::FaqAutoResponse, "").await
    }

    async fn update_faq_auto_response(
        &self,
        id: &str,
        patch: FaqAutoResponsePatch,
    ) -> Result<FaqAutoResponse, TriageError> {
        let request = self
            .client
            .put(self.url(&format!("/faqAutoResponse/{}", id)))
            .json(&patch);
        self.fetch(request, EntityKind::FaqAutoResponse, id).await
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
