//! Scripted doubles for the transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::api_utils::ApiConfig;
use crate::shared::http::{
    ApiClient, HttpRequest, HttpResponse, HttpTransport, TransportError,
};
use crate::shared::storage::MemoryStorage;
use crate::system::auth::{Navigator, SessionStore};

pub const TEST_BASE_URL: &str = "http://api.test";

#[derive(Debug, Default)]
struct StubState {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request.
/// An exhausted queue answers with a network error.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    state: Arc<Mutex<StubState>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(HttpResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }));
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            content_type: Some("text/plain".to_string()),
            body: body.to_string(),
        }));
    }

    pub fn push_body(&self, status: u16, content_type: Option<&str>, body: &str) {
        self.push(Ok(HttpResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }));
    }

    pub fn push_status(&self, status: u16) {
        self.push(Ok(HttpResponse {
            status,
            status_text: reason_phrase(status).to_string(),
            content_type: None,
            body: String::new(),
        }));
    }

    pub fn push_network_error(&self, message: &str) {
        self.push(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

#[derive(Debug, Default)]
struct NavigatorState {
    path: String,
    redirects: Vec<String>,
}

/// Fixed current path; redirects are recorded and also move the path.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    state: Arc<Mutex<NavigatorState>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        navigator.state.lock().unwrap().path = path.to_string();
        navigator
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state.lock().unwrap().redirects.clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.state.lock().unwrap().path.clone()
    }

    fn redirect(&self, path: &str) {
        let mut state = self.state.lock().unwrap();
        state.redirects.push(path.to_string());
        state.path = path.to_string();
    }
}

pub type TestClient = ApiClient<StubTransport, MemoryStorage, RecordingNavigator>;

pub fn test_client(
    transport: StubTransport,
    storage: MemoryStorage,
    navigator: RecordingNavigator,
) -> TestClient {
    ApiClient::new(
        ApiConfig::default().with_base_url(TEST_BASE_URL),
        transport,
        SessionStore::new(storage),
        navigator,
    )
}

/// Client whose session and mirror share one fresh in-memory storage.
pub fn offline_client() -> (TestClient, StubTransport, MemoryStorage) {
    let transport = StubTransport::new();
    let storage = MemoryStorage::new();
    let client = test_client(transport.clone(), storage.clone(), RecordingNavigator::at("/admin"));
    (client, transport, storage)
}
