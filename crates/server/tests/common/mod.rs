//! Common test utilities for in-process API testing.
//!
//! The fixture builds the real router over an in-memory triage service
//! with zero latency, so requests never leave the process.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use triage_core::{Config, MockTriageService, TriageService, TriageStore};

/// Test fixture wrapping the router and the service behind it.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_reply() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.put("/api/tickets/TKT-001/reply", json!("Hi")).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// In-memory service, for direct inspection
    pub service: Arc<MockTriageService>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Fixture seeded with the demo data.
    pub fn new() -> Self {
        Self::with_store(TriageStore::fixtures())
    }

    pub fn with_store(store: TriageStore) -> Self {
        let service = Arc::new(MockTriageService::new(store, Duration::ZERO));
        let state = Arc::new(triage_server::state::AppState::new(
            Config::default(),
            Arc::clone(&service) as Arc<dyn TriageService>,
        ));
        let router = triage_server::api::create_router(state);

        Self { router, service }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a PUT request with raw string body (for testing malformed JSON).
    #[allow(dead_code)]
    pub async fn put_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}

/// Ticket IDs from a list response body.
pub fn ticket_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .map(|tickets| {
            tickets
                .iter()
                .filter_map(|t| t["ticketID"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
