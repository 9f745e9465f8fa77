//! # Data Access Service
//!
//! The sole boundary between the application and the backend. Every operation runs the
//! same pipeline:
//!
//! 1. GET the resource through the [`Transport`]; a path with an empty, `.` or `..`
//!    segment (an empty id, say) → [`VocabError::InvalidPath`] without a request
//! 2. Non-2xx status → [`VocabError::Request`]
//! 3. Body is not JSON → [`VocabError::Decode`]
//! 4. Body has the wrong shape → [`VocabError::Validation`]
//! 5. Map the validated payload into the domain type
//!
//! Failures are logged here, once, and handed back unchanged. The service keeps no state:
//! no retries, no caching, no deduplication. That belongs to [`crate::query`].

use crate::error::{Result, VocabError};
use crate::model::{BookDetailsResponse, BookListResponse, Notebook, NotebookDetails};
use crate::schema::{validate_detail_response, validate_list_response, ValidationError};
use crate::transport::{ResourcePath, Transport};
use serde_json::Value;

pub struct NotebookService<T: Transport> {
    transport: T,
}

impl<T: Transport> NotebookService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All notebooks, in backend order.
    pub async fn list_notebooks(&self) -> Result<Vec<Notebook>> {
        let list: BookListResponse = self
            .fetch_validated(ResourcePath::books(), validate_list_response)
            .await?;
        Ok(list.books.into_iter().map(Notebook::from_book_name).collect())
    }

    /// The notebook named by the detail payload.
    ///
    /// The returned id comes from `book_name`, not from `id`; the two are not compared.
    pub async fn get_notebook(&self, id: &str) -> Result<Notebook> {
        let detail = self.get_book_details(id).await?;
        Ok(Notebook::from_book_name(detail.book_name))
    }

    pub async fn get_notebook_details(&self, id: &str) -> Result<NotebookDetails> {
        Ok(self.get_book_details(id).await?.into())
    }

    pub async fn get_notebook_words(&self, id: &str) -> Result<Vec<String>> {
        Ok(self.get_book_details(id).await?.words)
    }

    /// The full validated detail payload.
    pub async fn get_book_details(&self, id: &str) -> Result<BookDetailsResponse> {
        self.fetch_validated(ResourcePath::book(id), validate_detail_response)
            .await
    }

    async fn fetch_validated<R>(
        &self,
        path: ResourcePath,
        validate: fn(&Value) -> std::result::Result<R, ValidationError>,
    ) -> Result<R> {
        let result = self.fetch(&path, validate).await;
        if let Err(e) = &result {
            tracing::error!(transport = self.transport.name(), path = %path, error = %e, "API error");
        }
        result
    }

    async fn fetch<R>(
        &self,
        path: &ResourcePath,
        validate: fn(&Value) -> std::result::Result<R, ValidationError>,
    ) -> Result<R> {
        if !path.is_addressable() {
            return Err(VocabError::InvalidPath(path.to_string()));
        }
        let response = self.transport.get(path).await?;
        if !response.is_success() {
            return Err(VocabError::Request {
                status: response.status,
            });
        }

        let value: Value = serde_json::from_str(&response.body)?;
        Ok(validate(&value)?)
    }
}
