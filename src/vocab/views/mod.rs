//! # View Layer
//!
//! Views turn query outcomes into a [`ViewState`], the only thing a UI client renders.
//! A view never panics and never returns an error: every failure becomes
//! `ViewState::Error`, and the UI shows a static message for it.
//!
//! - [`list`]: all notebooks (`/vocabulary-notebooks`)
//! - [`detail`]: one notebook and its words (`/vocabulary-notebooks/:notebookId`)

use serde::Serialize;
use std::fmt::Display;

pub mod detail;
pub mod list;

/// What a view shows.
///
/// A success carrying an empty collection is still a success; views that need to tell
/// "nothing there" apart do so on the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    /// Carries the underlying error description for diagnostics, not for display.
    Error(String),
    Success(T),
}

impl<T> ViewState<T> {
    pub fn from_result<E: Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    /// Combines two views: loading while either is loading, otherwise the first error,
    /// otherwise both values. Nothing is shown from a half that succeeded.
    pub fn join<U>(self, other: ViewState<U>) -> ViewState<(T, U)> {
        match (self, other) {
            (ViewState::Loading, _) | (_, ViewState::Loading) => ViewState::Loading,
            (ViewState::Error(e), _) | (_, ViewState::Error(e)) => ViewState::Error(e),
            (ViewState::Success(a), ViewState::Success(b)) => ViewState::Success((a, b)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Error(e) => ViewState::Error(e),
            ViewState::Success(value) => ViewState::Success(f(value)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_waits_for_both() {
        let loading: ViewState<u8> = ViewState::Loading;
        assert!(loading.clone().join(ViewState::Success(1)).is_loading());
        assert!(ViewState::Success(1).join(loading.clone()).is_loading());
        // Still loading even if the other side already failed.
        assert!(ViewState::<u8>::Error("boom".into())
            .join(loading)
            .is_loading());
    }

    #[test]
    fn join_reports_first_error() {
        let joined = ViewState::<u8>::Error("first".into()).join(ViewState::<u8>::Error("second".into()));
        assert_eq!(joined, ViewState::Error("first".into()));

        let joined = ViewState::Success(1).join(ViewState::<u8>::Error("detail".into()));
        assert_eq!(joined, ViewState::Error("detail".into()));
    }

    #[test]
    fn join_pairs_successes() {
        let joined = ViewState::Success("nb").join(ViewState::Success(2));
        assert_eq!(joined, ViewState::Success(("nb", 2)));
    }

    #[test]
    fn from_result_and_map() {
        let ok: Result<u8, String> = Ok(2);
        assert_eq!(ViewState::from_result(ok).map(|v| v * 2), ViewState::Success(4));

        let err: Result<u8, String> = Err("nope".into());
        let state = ViewState::from_result(err).map(|v| v * 2);
        assert!(state.is_error());
        assert!(state.success().is_none());
    }
}
