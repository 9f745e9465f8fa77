//! Client routes.
//!
//! | Path                                  | Route                |
//! |---------------------------------------|----------------------|
//! | `/vocabulary-notebooks`               | `NotebookList`       |
//! | `/vocabulary-notebooks/:notebookId`   | `NotebookDetail`     |
//! | anything else                         | `NotFound`           |
//!
//! A single trailing slash is accepted. Query strings and fragments are ignored.
//! The notebook id is percent-decoded, so `/vocabulary-notebooks/English%20Vocabulary`
//! selects the notebook `English Vocabulary`.

use crate::transport::PATH_SEGMENT;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

pub const NOTEBOOKS_ROOT: &str = "vocabulary-notebooks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    NotebookList,
    NotebookDetail { notebook_id: String },
    NotFound { path: String },
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        let not_found = || Route::NotFound {
            path: path.to_string(),
        };

        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let Some(bare) = bare.strip_prefix('/') else {
            return not_found();
        };
        let bare = bare.strip_suffix('/').unwrap_or(bare);

        let mut segments = bare.split('/');
        if segments.next() != Some(NOTEBOOKS_ROOT) {
            return not_found();
        }

        match (segments.next(), segments.next()) {
            (None, _) => Route::NotebookList,
            (Some(id), None) if !id.is_empty() => match percent_decode_str(id).decode_utf8() {
                Ok(id) => Route::NotebookDetail {
                    notebook_id: id.into_owned(),
                },
                Err(_) => not_found(),
            },
            _ => not_found(),
        }
    }

    /// Canonical path for this route. Resolving it yields the same route.
    pub fn path(&self) -> String {
        match self {
            Route::NotebookList => format!("/{}", NOTEBOOKS_ROOT),
            Route::NotebookDetail { notebook_id } => format!(
                "/{}/{}",
                NOTEBOOKS_ROOT,
                utf8_percent_encode(notebook_id, PATH_SEGMENT)
            ),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::NotebookList => "Vocabulary Notebooks",
            Route::NotebookDetail { .. } => "Vocabulary Notebook Details",
            Route::NotFound { .. } => "Page Not Found",
        }
    }

    pub fn detail(notebook_id: impl Into<String>) -> Route {
        Route::NotebookDetail {
            notebook_id: notebook_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_route_with_and_without_trailing_slash() {
        assert_eq!(Route::resolve("/vocabulary-notebooks"), Route::NotebookList);
        assert_eq!(Route::resolve("/vocabulary-notebooks/"), Route::NotebookList);
        assert_eq!(
            Route::resolve("/vocabulary-notebooks?page=2"),
            Route::NotebookList
        );
    }

    #[test]
    fn detail_route_decodes_the_id() {
        assert_eq!(
            Route::resolve("/vocabulary-notebooks/English%20Vocabulary"),
            Route::detail("English Vocabulary")
        );
        assert_eq!(
            Route::resolve("/vocabulary-notebooks/Technical Terms/"),
            Route::detail("Technical Terms")
        );
    }

    #[test]
    fn everything_else_is_not_found() {
        for path in [
            "/",
            "",
            "vocabulary-notebooks",
            "/blogs",
            "/vocabulary-notebooks/a/b",
            "/vocabulary-notebooks//",
            "/vocabulary-notebook",
            "/vocabulary-notebooks/%FF",
        ] {
            assert_eq!(
                Route::resolve(path),
                Route::NotFound {
                    path: path.to_string()
                },
                "path {:?}",
                path
            );
        }
    }

    #[test]
    fn path_round_trips_through_resolve() {
        for route in [
            Route::NotebookList,
            Route::detail("English Vocabulary"),
            Route::detail("a/b?c#d"),
            Route::detail("100%"),
        ] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
        assert_eq!(
            Route::detail("English Vocabulary").path(),
            "/vocabulary-notebooks/English%20Vocabulary"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(Route::NotebookList.title(), "Vocabulary Notebooks");
        assert_eq!(Route::detail("x").title(), "Vocabulary Notebook Details");
        assert_eq!(
            Route::resolve("/nope").title(),
            "Page Not Found"
        );
    }
}
