//! # API Facade
//!
//! The single entry point for UI clients. It owns the data access service and the query
//! client and dispatches to the views and the router.
//!
//! ## What the API Does NOT Do
//!
//! - **Presentation**: returns [`ViewState`]s and [`Page`]s, never strings
//! - **Error surfacing**: page loads never fail; failures arrive as `ViewState::Error`
//!
//! ## Generic Over Transport
//!
//! `VocabApi<T: Transport>` is generic over the backend:
//! - Production: `VocabApi<HttpTransport>`
//! - Testing and `--mock`: `VocabApi<InMemoryTransport>`

use crate::error::Result;
use crate::model::{Notebook, NotebookPage};
use crate::query::QueryClient;
use crate::router::Route;
use crate::service::NotebookService;
use crate::transport::Transport;
use crate::views::{detail, list, ViewState};
use std::sync::Arc;

/// A resolved client route with its loaded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    List(ViewState<Vec<Notebook>>),
    Detail {
        notebook_id: String,
        state: ViewState<NotebookPage>,
    },
    NotFound {
        path: String,
    },
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::List(_) => Route::NotebookList,
            Page::Detail { notebook_id, .. } => Route::detail(notebook_id.clone()),
            Page::NotFound { path } => Route::NotFound { path: path.clone() },
        }
    }

    pub fn title(&self) -> &'static str {
        self.route().title()
    }
}

pub struct VocabApi<T: Transport + 'static> {
    service: Arc<NotebookService<T>>,
    queries: QueryClient,
}

impl<T: Transport + 'static> VocabApi<T> {
    pub fn new(transport: T, queries: QueryClient) -> Self {
        Self {
            service: Arc::new(NotebookService::new(transport)),
            queries,
        }
    }

    pub async fn notebook_list(&self) -> ViewState<Vec<Notebook>> {
        list::load(&self.service, &self.queries).await
    }

    pub async fn notebook_detail(&self, notebook_id: &str) -> ViewState<NotebookPage> {
        detail::load(&self.service, &self.queries, notebook_id).await
    }

    /// Words of a notebook, straight from the service.
    pub async fn notebook_words(&self, notebook_id: &str) -> Result<Vec<String>> {
        self.service.get_notebook_words(notebook_id).await
    }

    /// Resolves `path` and loads the page behind it.
    pub async fn open(&self, path: &str) -> Page {
        match Route::resolve(path) {
            Route::NotebookList => Page::List(self.notebook_list().await),
            Route::NotebookDetail { notebook_id } => {
                let state = self.notebook_detail(&notebook_id).await;
                Page::Detail { notebook_id, state }
            }
            Route::NotFound { path } => Page::NotFound { path },
        }
    }

    pub fn service(&self) -> &NotebookService<T> {
        &self.service
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::InMemoryTransport;

    fn api() -> VocabApi<InMemoryTransport> {
        VocabApi::new(InMemoryTransport::with_sample_notebooks(), QueryClient::new())
    }

    #[tokio::test]
    async fn open_list_route() {
        let page = api().open("/vocabulary-notebooks").await;
        let Page::List(state) = &page else {
            panic!("expected list page, got {:?}", page);
        };
        assert_eq!(state.success().unwrap().len(), 2);
        assert_eq!(page.title(), "Vocabulary Notebooks");
    }

    #[tokio::test]
    async fn open_detail_route_decodes_the_id() {
        let api = api();
        let page = api
            .open("/vocabulary-notebooks/English%20Vocabulary")
            .await;
        match page {
            Page::Detail { notebook_id, state } => {
                assert_eq!(notebook_id, "English Vocabulary");
                let page = state.success().unwrap();
                assert_eq!(page.details.words, vec!["Ephemeral", "Ubiquitous"]);
            }
            other => panic!("expected detail page, got {:?}", other),
        }
        assert!(api
            .service()
            .transport()
            .requests()
            .iter()
            .all(|p| p == "/books/English%20Vocabulary"));
    }

    #[tokio::test]
    async fn open_unknown_route_does_not_fetch() {
        let api = api();
        let page = api.open("/blogs").await;
        assert_eq!(
            page,
            Page::NotFound {
                path: "/blogs".into()
            }
        );
        assert_eq!(page.title(), "Page Not Found");
        assert!(api.service().transport().requests().is_empty());
    }

    #[tokio::test]
    async fn unknown_notebook_renders_error_page() {
        let page = api().open("/vocabulary-notebooks/Nope").await;
        let Page::Detail { state, .. } = page else {
            panic!("expected detail page");
        };
        assert!(state.is_error());
    }

    #[tokio::test]
    async fn words_come_from_the_service() {
        let words = api().notebook_words("Technical Terms").await.unwrap();
        assert_eq!(words, vec!["Idempotent", "Latency", "Throughput"]);
    }

    #[test]
    fn page_route_round_trip() {
        let page = Page::Detail {
            notebook_id: "Technical Terms".into(),
            state: ViewState::Loading,
        };
        assert_eq!(page.route().path(), "/vocabulary-notebooks/Technical%20Terms");
    }
}
