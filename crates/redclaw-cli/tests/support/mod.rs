//! Test helpers: an axum service that records every request it receives.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as seen by the fake service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, e.g. `/api/v1/alerts?limit=5`.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Canned { status: StatusCode, body: String },
    Never,
}

#[derive(Debug, Clone)]
struct Shared {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply: Reply,
}

/// Fake RedClaw service answering every path the same way.
pub struct FakeService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl FakeService {
    /// Answers every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        Self::serve(Reply::Canned {
            status,
            body: body.to_string(),
        })
        .await
    }

    /// Accepts requests and never answers them.
    pub async fn hanging() -> Self {
        Self::serve(Reply::Never).await
    }

    async fn serve(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let router = Router::new().fallback(record_and_reply).with_state(Shared {
            requests: requests.clone(),
            reply,
        });
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fake service runs");
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Base URL to put in `REDCLAW_URL`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Records first, so a client holding its response always finds its
/// request in the log.
async fn record_and_reply(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared.requests.lock().expect("requests lock").push(RecordedRequest {
        method: method.to_string(),
        target: uri.to_string(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match shared.reply {
        Reply::Canned { status, body } => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Reply::Never => std::future::pending().await,
    }
}
