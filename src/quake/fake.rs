//! Test doubles: a recording fake of the backing API and an in-memory source

use crate::error::{Error, Result};
use crate::quake::{AroundQuery, Document, EarthquakeSource, RecentQuery};
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::value::RawValue;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request as seen by the fake upstream
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub api_key: Option<String>,
}

struct FakeState {
    status: StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Fake backing API answering every path with a fixed status and body
pub(crate) struct FakeUpstream {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeUpstream {
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_bytes(status, body.as_bytes().to_vec()).await
    }

    /// Like [`FakeUpstream::start`], for bodies that need not be UTF-8
    pub async fn start_bytes(status: u16, body: Vec<u8>) -> Self {
        let state = Arc::new(FakeState {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().unwrap_or_default().to_string(),
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Base URL of a port nobody is listening on
pub(crate) fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// What a [`StubSource`] answers with
#[derive(Debug, Clone)]
pub(crate) enum StubReply {
    Body(String),
    Status(u16, String),
}

/// In-memory source recording the queries it receives
pub(crate) struct StubSource {
    reply: StubReply,
    pub recent_calls: Mutex<Vec<RecentQuery>>,
    pub around_calls: Mutex<Vec<AroundQuery>>,
}

impl StubSource {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            recent_calls: Mutex::new(Vec::new()),
            around_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn body(body: &str) -> Self {
        Self::new(StubReply::Body(body.to_string()))
    }

    fn answer(&self) -> Result<Document> {
        match &self.reply {
            StubReply::Body(body) => Ok(RawValue::from_string(body.clone())?),
            StubReply::Status(status, body) => Err(Error::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

impl EarthquakeSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn recent(&self, query: &RecentQuery) -> Result<Document> {
        self.recent_calls.lock().unwrap().push(query.clone());
        self.answer()
    }

    async fn around(&self, query: &AroundQuery) -> Result<Document> {
        self.around_calls.lock().unwrap().push(query.clone());
        self.answer()
    }
}
