//! Scripted transport for exercising the REST layer without a browser.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::client::ApiClient;
use super::error::ApiError;
use super::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::util::token_store::{MemoryTokenStore, TokenStore};

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued replies in order and records every request it sees.
///
/// Once the queue is empty every further request gets a 500.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Result<HttpResponse, ApiError>>) -> Self {
        let script = Script { replies: replies.into_iter().collect(), requests: Vec::new() };
        Self { script: Arc::new(Mutex::new(script)) }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    /// `(method, url)` of every request so far.
    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.requests().into_iter().map(|r| (r.method, r.url)).collect()
    }

    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.calls().iter().filter(|(m, u)| *m == method && u == url).count()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request);
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 500, body: "unscripted".to_owned() }))
    }
}

pub fn json(status: u16, body: serde_json::Value) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse { status, body: body.to_string() })
}

pub fn empty(status: u16) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse { status, body: "null".to_owned() })
}

pub fn offline() -> Result<HttpResponse, ApiError> {
    Err(ApiError::Network("connection refused".to_owned()))
}

/// Client over `transport` with a fresh in-memory store seeded with `token`.
pub fn client(
    transport: &ScriptedTransport,
    token: Option<&str>,
) -> (ApiClient<ScriptedTransport>, Arc<MemoryTokenStore>) {
    let store = Arc::new(token.map_or_else(MemoryTokenStore::new, MemoryTokenStore::with_token));
    let shared: Arc<dyn TokenStore> = store.clone();
    (ApiClient::new(transport.clone(), shared, ""), store)
}
