//! Loopback chat completions endpoint for tests
//!
//! Serves a fixed status and body on `/v1/chat/completions` and records every
//! request it receives.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// A request as seen by the mock endpoint
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    /// Base URL to hand to the client, e.g. `http://127.0.0.1:PORT/v1`
    pub base_url: String,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: Arc::new(body.into()),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            received,
            handle,
        }
    }

    pub fn received(&self) -> Vec<RecordedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn chat_completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .unwrap()
        .push(RecordedRequest { headers, body });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_ref().clone(),
    )
}

/// Base URL of a loopback port with nothing listening on it
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}
