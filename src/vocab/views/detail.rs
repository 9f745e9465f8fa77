//! Detail view: one notebook and its words.
//!
//! Two queries back this view, the notebook itself and its word list. Both hit
//! `/books/{id}` but live under separate keys, so they are issued concurrently and joined.
//! The first failure short-circuits the join; a half that succeeded is discarded.

use super::ViewState;
use crate::model::{Notebook, NotebookDetails, NotebookPage};
use crate::query::{QueryClient, QueryKey};
use crate::service::NotebookService;
use crate::transport::Transport;
use std::sync::Arc;

pub const NOTEBOOK_QUERY: &str = "vocabularyNotebook";
pub const ENTRIES_QUERY: &str = "vocabularyEntries";

pub fn notebook_key(id: &str) -> QueryKey {
    QueryKey::new([NOTEBOOK_QUERY, id])
}

pub fn entries_key(id: &str) -> QueryKey {
    QueryKey::new([ENTRIES_QUERY, id])
}

pub async fn load<T: Transport + 'static>(
    service: &Arc<NotebookService<T>>,
    queries: &QueryClient,
    notebook_id: &str,
) -> ViewState<NotebookPage> {
    if notebook_id.is_empty() {
        return ViewState::Error("no notebook id given".to_string());
    }

    let notebook = {
        let service = Arc::clone(service);
        let id = notebook_id.to_string();
        queries.fetch(notebook_key(notebook_id), move || async move {
            service.get_notebook(&id).await
        })
    };
    let details = {
        let service = Arc::clone(service);
        let id = notebook_id.to_string();
        queries.fetch(entries_key(notebook_id), move || async move {
            service.get_notebook_details(&id).await
        })
    };

    let joined = tokio::try_join!(notebook, details)
        .map(|(notebook, details)| NotebookPage { notebook, details });
    ViewState::from_result(joined)
}

/// Current combined state of both queries without fetching. `None` until either query
/// has been issued.
pub fn snapshot(queries: &QueryClient, notebook_id: &str) -> Option<ViewState<NotebookPage>> {
    let notebook = queries.state::<Notebook>(&notebook_key(notebook_id));
    let details = queries.state::<NotebookDetails>(&entries_key(notebook_id));
    if notebook.is_none() && details.is_none() {
        return None;
    }

    let notebook = notebook.unwrap_or(ViewState::Loading);
    let details = details.unwrap_or(ViewState::Loading);
    Some(
        notebook
            .join(details)
            .map(|(notebook, details)| NotebookPage { notebook, details }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::InMemoryTransport;
    use crate::transport::ResourcePath;
    use serde_json::json;
    use std::time::Duration;

    fn service(transport: InMemoryTransport) -> Arc<NotebookService<InMemoryTransport>> {
        Arc::new(NotebookService::new(transport))
    }

    #[tokio::test]
    async fn joins_notebook_and_words() {
        let svc = service(InMemoryTransport::with_sample_notebooks());
        let queries = QueryClient::new();

        let state = load(&svc, &queries, "English Vocabulary").await;
        let page = state.success().unwrap();
        assert_eq!(page.notebook.name, "English Vocabulary");
        assert_eq!(page.details.word_count.as_u64(), Some(2));
        assert_eq!(page.details.words, vec!["Ephemeral", "Ubiquitous"]);

        // One request per query key.
        assert_eq!(svc.transport().requests().len(), 2);
        assert_eq!(snapshot(&queries, "English Vocabulary"), Some(state));
    }

    #[tokio::test]
    async fn unknown_notebook_is_error() {
        let svc = service(InMemoryTransport::with_sample_notebooks());
        let state = load(&svc, &QueryClient::new(), "Missing").await;
        assert!(state.is_error());
    }

    #[tokio::test]
    async fn empty_id_is_error_without_fetching() {
        let svc = service(InMemoryTransport::with_sample_notebooks());
        let state = load(&svc, &QueryClient::new(), "").await;
        assert!(state.is_error());
        assert!(svc.transport().requests().is_empty());
    }

    #[test]
    fn snapshot_is_error_when_details_failed_after_notebook_succeeded() {
        // Notebook query succeeded, detail query failed with a 500: no partial page.
        let notebook = ViewState::Success(Notebook::from_book_name("English Vocabulary"));
        let details: ViewState<NotebookDetails> =
            ViewState::Error("API request failed with status 500".into());
        let joined = notebook.join(details);
        assert!(joined.is_error());
        assert!(joined.success().is_none());
    }

    #[tokio::test]
    async fn details_failing_after_notebook_succeeded_fails_the_view() {
        let path = ResourcePath::book("English Vocabulary");
        let svc = service(
            InMemoryTransport::new()
                .with_json_once(
                    &path,
                    200,
                    json!({
                        "book_name": "English Vocabulary",
                        "status": "ok",
                        "word_count": 2,
                        "words": ["Ephemeral", "Ubiquitous"]
                    }),
                )
                .with_response(&path, 500, "oops"),
        );
        let queries = QueryClient::new();

        let state = load(&svc, &queries, "English Vocabulary").await;
        assert_eq!(
            state,
            ViewState::Error("API request failed with status 500".into())
        );
        assert_eq!(svc.transport().requests().len(), 2);

        // The notebook half did succeed; only the joined view is an error.
        let notebook = queries.state::<Notebook>(&notebook_key("English Vocabulary"));
        assert!(matches!(notebook, Some(ViewState::Success(_))));
        let details = queries.state::<NotebookDetails>(&entries_key("English Vocabulary"));
        assert!(matches!(details, Some(ViewState::Error(_))));
        assert_eq!(snapshot(&queries, "English Vocabulary"), Some(state));
    }

    #[tokio::test]
    async fn snapshot_is_loading_while_fetching() {
        let svc = service(
            InMemoryTransport::with_sample_notebooks().with_latency(Duration::from_millis(30)),
        );
        let queries = QueryClient::new();
        assert!(snapshot(&queries, "Technical Terms").is_none());

        let (state, during) = tokio::join!(load(&svc, &queries, "Technical Terms"), async {
            tokio::task::yield_now().await;
            snapshot(&queries, "Technical Terms")
        });

        assert_eq!(during, Some(ViewState::Loading));
        assert_eq!(state.success().unwrap().details.word_count.as_u64(), Some(3));
    }

    #[tokio::test]
    async fn server_error_on_details_fails_the_whole_view() {
        // Same path for both queries, so a 500 there fails both; the view must not
        // render whichever half might have won the race.
        let svc = service(
            InMemoryTransport::new()
                .with_json(
                    &ResourcePath::books(),
                    200,
                    json!({"books": ["English Vocabulary"], "status": "ok"}),
                )
                .with_response(&ResourcePath::book("English Vocabulary"), 500, "oops"),
        );
        let state = load(&svc, &QueryClient::new(), "English Vocabulary").await;
        assert_eq!(
            state,
            ViewState::Error("API request failed with status 500".into())
        );
    }
}
