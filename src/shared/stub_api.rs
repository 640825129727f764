//! In-process stand-in for the character endpoint, used by tests.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Holds every response until `release` is notified, signalling `arrived`
/// once the request has been received.
#[derive(Default)]
pub struct Gate {
    pub arrived: Notify,
    pub release: Notify,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Gate>>,
}

pub struct StubApi {
    pub api_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub async fn spawn_stub_api(status: StatusCode, body: &str) -> StubApi {
    spawn(status, body, None).await
}

pub async fn spawn_gated_stub_api(status: StatusCode, body: &str, gate: Arc<Gate>) -> StubApi {
    spawn(status, body, Some(gate)).await
}

/// A URL nothing listens on.
pub async fn unreachable_api_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/character", address)
}

async fn spawn(status: StatusCode, body: &str, gate: Option<Arc<Gate>>) -> StubApi {
    let requests = Arc::new(Mutex::new(vec![]));
    let state = StubState {
        status,
        body: body.to_string(),
        requests: requests.clone(),
        gate,
    };
    let app = Router::new().fallback(respond).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubApi {
        api_url: format!("http://{}/api/character", address),
        requests,
    }
}

async fn respond(State(state): State<StubState>, uri: Uri) -> Response {
    state.requests.lock().unwrap().push(uri.to_string());
    if let Some(gate) = &state.gate {
        gate.arrived.notify_one();
        gate.release.notified().await;
    }

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}
