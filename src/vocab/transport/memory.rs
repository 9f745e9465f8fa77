use super::{RawResponse, ResourcePath, Transport};
use crate::error::{Result, VocabError};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// Books served by `--mock`, with their words.
pub const SAMPLE_NOTEBOOKS: &[(&str, &[&str])] = &[
    ("English Vocabulary", &["Ephemeral", "Ubiquitous"]),
    ("Technical Terms", &["Idempotent", "Latency", "Throughput"]),
];

/// In-memory transport serving canned responses.
///
/// Routes are keyed by the rendered (encoded) path, so `/books/English%20Vocabulary`
/// is what a test registers and what the request log shows. Unknown paths answer 404.
/// One-shot responses queued for a path are served first, in order, before its route.
///
/// Uses `Mutex` for the request log and the queue because `Transport` requires `Send + Sync`.
#[derive(Default)]
pub struct InMemoryTransport {
    routes: HashMap<String, RawResponse>,
    queued: Mutex<HashMap<String, VecDeque<RawResponse>>>,
    latency: Option<Duration>,
    fail_transport: bool,
    requests: Mutex<Vec<String>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport pre-loaded with [`SAMPLE_NOTEBOOKS`].
    pub fn with_sample_notebooks() -> Self {
        let books: Vec<&str> = SAMPLE_NOTEBOOKS.iter().map(|(name, _)| *name).collect();
        let mut transport =
            Self::new().with_json(&ResourcePath::books(), 200, json!({"books": books, "status": "ok"}));

        for (name, words) in SAMPLE_NOTEBOOKS {
            transport = transport.with_json(
                &ResourcePath::book(name),
                200,
                json!({
                    "book_name": name,
                    "status": "ok",
                    "word_count": words.len(),
                    "words": words,
                }),
            );
        }
        transport
    }

    /// Registers a raw body for a path.
    pub fn with_response(mut self, path: &ResourcePath, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(path.to_string(), RawResponse::new(status, body));
        self
    }

    /// Registers a JSON body for a path.
    pub fn with_json(self, path: &ResourcePath, status: u16, body: serde_json::Value) -> Self {
        self.with_response(path, status, body.to_string())
    }

    /// Queues a JSON body that answers the next request for a path, once.
    pub fn with_json_once(self, path: &ResourcePath, status: u16, body: serde_json::Value) -> Self {
        if let Ok(mut queued) = self.queued.lock() {
            queued
                .entry(path.to_string())
                .or_default()
                .push_back(RawResponse::new(status, body.to_string()));
        }
        self
    }

    /// Delays every response, like a slow backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    /// Makes every request fail before reaching a route, like a refused connection.
    pub fn with_transport_failure(mut self) -> Self {
        self.fail_transport = true;
        self
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn get(&self, path: &ResourcePath) -> Result<RawResponse> {
        let key = path.to_string();
        if let Ok(mut log) = self.requests.lock() {
            log.push(key.clone());
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.fail_transport {
            return Err(VocabError::Transport(format!(
                "GET {} failed: connection refused",
                key
            )));
        }

        let next = self
            .queued
            .lock()
            .ok()
            .and_then(|mut queued| queued.get_mut(&key).and_then(VecDeque::pop_front));
        if let Some(response) = next {
            return Ok(response);
        }

        Ok(self.routes.get(&key).cloned().unwrap_or_else(|| {
            RawResponse::new(404, json!({"status": "error", "message": "not found"}).to_string())
        }))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
