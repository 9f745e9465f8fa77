//! # Transport Layer
//!
//! The [`Transport`] trait is the only way the data access service reaches the backend.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: talks to a real backend over HTTP
//!   - Requests go to `{server_url}{base_path}/{segments...}`
//!   - `base_path` defaults to `/api`
//!
//! - [`memory::InMemoryTransport`]: canned responses keyed by path
//!   - Powers `--mock` and every service/view test
//!   - Optional simulated latency, request log
//!
//! A transport only moves bytes: it reports the status code and body text and leaves
//! status checks, JSON decoding and validation to the service.

use crate::error::Result;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

pub mod http;
pub mod memory;

/// Characters escaped inside a single path segment.
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A backend resource, relative to the API base path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// `/books`
    pub fn books() -> Self {
        Self::new(["books"])
    }

    /// `/books/{id}`
    pub fn book(id: &str) -> Self {
        Self::new(["books", id])
    }

    /// `false` if any segment is empty, `.` or `..`. URLs normalize those away, so such a
    /// path would reach a different resource than the one named.
    pub fn is_addressable(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| !matches!(segment.as_str(), "" | "." | ".."))
    }

    /// Raw (unencoded) segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    /// Renders the path with every segment percent-encoded, e.g. `/books/English%20Vocabulary`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{}", utf8_percent_encode(segment, PATH_SEGMENT))?;
        }
        Ok(())
    }
}

/// What came back from the backend, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract interface for issuing GET requests against the backend.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a resource. Errors only on transport-level failures (connection, timeout);
    /// non-2xx statuses are returned as regular responses.
    async fn get(&self, path: &ResourcePath) -> Result<RawResponse>;

    /// Short name for diagnostics.
    fn name(&self) -> &str;
}

/// Lets a client pick the transport at runtime.
#[async_trait]
impl Transport for Box<dyn Transport> {
    async fn get(&self, path: &ResourcePath) -> Result<RawResponse> {
        (**self).get(path).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_encoded_paths() {
        assert_eq!(ResourcePath::books().to_string(), "/books");
        assert_eq!(
            ResourcePath::book("English Vocabulary").to_string(),
            "/books/English%20Vocabulary"
        );
        assert_eq!(ResourcePath::book("a/b?c").to_string(), "/books/a%2Fb%3Fc");
    }

    #[test]
    fn dot_and_empty_segments_are_not_addressable() {
        assert!(ResourcePath::books().is_addressable());
        assert!(ResourcePath::book("v1.2..3").is_addressable());
        assert!(!ResourcePath::book("").is_addressable());
        assert!(!ResourcePath::book(".").is_addressable());
        assert!(!ResourcePath::book("..").is_addressable());
    }

    #[test]
    fn keeps_raw_segments() {
        let path = ResourcePath::book("English Vocabulary");
        assert_eq!(path.segments(), ["books", "English Vocabulary"]);
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}
