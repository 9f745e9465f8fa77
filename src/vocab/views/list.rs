use super::ViewState;
use crate::model::Notebook;
use crate::query::{QueryClient, QueryKey};
use crate::service::NotebookService;
use crate::transport::Transport;
use std::sync::Arc;

pub const NOTEBOOKS_QUERY: &str = "vocabularyNotebooks";

pub fn query_key() -> QueryKey {
    QueryKey::new([NOTEBOOKS_QUERY])
}

/// Loads the notebook list through the query client.
pub async fn load<T: Transport + 'static>(
    service: &Arc<NotebookService<T>>,
    queries: &QueryClient,
) -> ViewState<Vec<Notebook>> {
    let service = Arc::clone(service);
    let result = queries
        .fetch(query_key(), move || async move { service.list_notebooks().await })
        .await;
    ViewState::from_result(result)
}

/// Current state of the list query without fetching.
pub fn snapshot(queries: &QueryClient) -> Option<ViewState<Vec<Notebook>>> {
    queries.state(&query_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::InMemoryTransport;
    use crate::transport::ResourcePath;
    use serde_json::json;

    fn service(transport: InMemoryTransport) -> Arc<NotebookService<InMemoryTransport>> {
        Arc::new(NotebookService::new(transport))
    }

    #[tokio::test]
    async fn populated_list() {
        let svc = service(InMemoryTransport::with_sample_notebooks());
        let queries = QueryClient::new();

        let state = load(&svc, &queries).await;
        let notebooks = state.success().unwrap();
        assert_eq!(notebooks.len(), 2);
        assert_eq!(notebooks[0].name, "English Vocabulary");
        assert_eq!(snapshot(&queries), Some(state));
    }

    #[tokio::test]
    async fn empty_list_is_success_not_error() {
        let svc = service(InMemoryTransport::new().with_json(
            &ResourcePath::books(),
            200,
            json!({"books": [], "status": "ok"}),
        ));
        let state = load(&svc, &QueryClient::new()).await;
        assert_eq!(state, ViewState::Success(vec![]));
    }

    #[tokio::test]
    async fn backend_failure_is_error_state() {
        let svc = service(InMemoryTransport::new().with_response(&ResourcePath::books(), 503, ""));
        let state = load(&svc, &QueryClient::new()).await;
        assert!(state.is_error());
    }
}
