use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A named word list owned by the backend.
///
/// The backend only knows book names, so `id` and `name` carry the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub name: String,
}

impl Notebook {
    pub fn from_book_name(book_name: impl Into<String>) -> Self {
        let name = book_name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// Word count and words of a notebook, exactly as the backend reported them.
///
/// `word_count` is any JSON number and is expected to equal `words.len()`; nothing here
/// reconciles the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDetails {
    pub word_count: Number,
    pub words: Vec<String>,
}

/// Validated `GET /books` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<String>,
    pub status: String,
}

/// Validated `GET /books/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetailsResponse {
    pub book_name: String,
    pub status: String,
    pub word_count: Number,
    pub words: Vec<String>,
}

impl From<BookDetailsResponse> for NotebookDetails {
    fn from(detail: BookDetailsResponse) -> Self {
        Self {
            word_count: detail.word_count,
            words: detail.words,
        }
    }
}

/// Everything the detail page shows once both of its queries succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookPage {
    pub notebook: Notebook,
    pub details: NotebookDetails,
}
