//! In-process mock of the user-management admin API
//!
//! Records every request it receives and answers with a configurable status
//! and body.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

/// One request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Mock admin API server state
#[derive(Clone)]
pub struct MockAdminState {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    pub reply: Arc<Mutex<(StatusCode, Value)>>,
}

impl MockAdminState {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new((StatusCode::OK, json!({"success": true})))),
        }
    }

    /// Answer every following request with `status` and `body`
    pub fn reply_with(&self, status: StatusCode, body: Value) {
        *self.reply.lock().unwrap() = (status, body);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockAdminState {
    fn default() -> Self {
        Self::new()
    }
}

async fn record(
    State(state): State<MockAdminState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        authorization,
        body,
    });

    let (status, body) = state.reply.lock().unwrap().clone();
    (status, Json(body))
}

/// Start a mock admin API server
///
/// Returns the base URL and a handle to the server task
pub async fn start_mock_admin_server(state: MockAdminState) -> (String, JoinHandle<()>) {
    let app = Router::new()
        .route("/user/admin-api/verify", post(record))
        .route("/user/admin-api/ban", post(record))
        .route("/user/admin-api/restrict", post(record))
        .route("/user/admin-api/access", post(record))
        .route("/user/admin-api/custom-data", put(record))
        .with_state(state);

    // Bind to random port
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, handle)
}
