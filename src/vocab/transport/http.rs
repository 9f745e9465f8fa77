use super::{RawResponse, ResourcePath, Transport};
use crate::error::{Result, VocabError};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_BASE_PATH: &str = "/api";

/// Transport backed by a real HTTP backend.
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Builds a transport rooted at `server_url` + `base_path`.
    ///
    /// `server_url` must be absolute (`http://localhost:8000`); `base_path` replaces
    /// whatever path it carries.
    pub fn new(server_url: &str, base_path: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(server_url)
            .map_err(|e| VocabError::Config(format!("Invalid server URL {}: {}", server_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(VocabError::Config(format!(
                "Server URL cannot be used as a base: {}",
                server_url
            )));
        }
        base.set_path(base_path);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VocabError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for a resource: the base path followed by the path's encoded rendering,
    /// so the URL requested is the one logged.
    pub fn url_for(&self, path: &ResourcePath) -> Result<Url> {
        if !path.is_addressable() {
            return Err(VocabError::InvalidPath(path.to_string()));
        }
        let mut url = self.base.clone();
        url.set_path(&format!("{}{}", self.base.path().trim_end_matches('/'), path));
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &ResourcePath) -> Result<RawResponse> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| VocabError::Transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| VocabError::Transport(format!("Failed to read response: {}", e)))?;

        tracing::debug!(%url, status, bytes = body.len(), "response");
        Ok(RawResponse { status, body })
    }

    fn name(&self) -> &str {
        "http"
    }
}
