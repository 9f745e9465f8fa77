//! # Query Client
//!
//! A small in-process stand-in for a UI query cache. Given a key and an async producer it
//! returns the producer's result, with two guarantees:
//!
//! - **Deduplication**: callers asking for a key that is already being fetched await the
//!   same fetch instead of starting another one.
//! - **Memoization**: a successful result younger than `stale_after` is returned without
//!   fetching. The default `stale_after` is zero, so every call refetches unless a fetch is
//!   already in flight.
//!
//! Failures are never memoized. There is no retry and no eviction policy beyond staleness.
//!
//! Values of different types share one table, so the client stores them type-erased and
//! checks the type again on the way out.

use crate::error::{Result, VocabError};
use crate::views::ViewState;
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Identifies one memoized fetch, e.g. `["vocabularyNotebook", "English Vocabulary"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// Errors are shared between every caller of a deduplicated fetch.
pub type QueryResult<T> = std::result::Result<T, Arc<VocabError>>;

type Erased = Arc<dyn Any + Send + Sync>;
type Outcome = std::result::Result<Erased, Arc<VocabError>>;
type InFlight = Shared<BoxFuture<'static, Outcome>>;
type SlotTable = Arc<Mutex<HashMap<QueryKey, Slot>>>;

enum Slot {
    Fetching { fetch: InFlight, generation: u64 },
    Ready { value: Erased, fetched_at: DateTime<Utc> },
    Failed { error: Arc<VocabError> },
}

pub struct QueryClient {
    slots: SlotTable,
    stale_after: chrono::Duration,
    generation: AtomicU64,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            stale_after: chrono::Duration::zero(),
            generation: AtomicU64::new(0),
        }
    }

    /// Keeps successful results for `stale_after` before fetching them again.
    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = chrono::Duration::from_std(stale_after).unwrap_or(chrono::Duration::MAX);
        self
    }

    /// Runs `producer` for `key`, unless a fetch for `key` is in flight (joined) or a fresh
    /// result is memoized (returned). `producer` is only called when a fetch actually starts.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, producer: F) -> QueryResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let fetch = {
            let mut slots = self.slots.lock().map_err(|_| poisoned())?;
            match slots.get(&key) {
                Some(Slot::Fetching { fetch, .. }) => {
                    tracing::debug!(query = %key, "joining in-flight fetch");
                    fetch.clone()
                }
                Some(Slot::Ready { value, fetched_at }) if self.is_fresh(*fetched_at) => {
                    tracing::debug!(query = %key, "serving memoized result");
                    return downcast(&key, value);
                }
                _ => {
                    let generation = self.generation.fetch_add(1, Ordering::Relaxed);
                    let fetch = start(Arc::clone(&self.slots), key.clone(), generation, producer());
                    slots.insert(
                        key.clone(),
                        Slot::Fetching {
                            fetch: fetch.clone(),
                            generation,
                        },
                    );
                    fetch
                }
            }
        };

        let value = fetch.await?;
        downcast(&key, &value)
    }

    /// Snapshot of a key: in flight → `Loading`, last success → `Success`, last failure →
    /// `Error`. `None` if the key was never fetched (or was invalidated).
    pub fn state<T: Clone + 'static>(&self, key: &QueryKey) -> Option<ViewState<T>> {
        let slots = self.slots.lock().ok()?;
        let state = match slots.get(key)? {
            Slot::Fetching { .. } => ViewState::Loading,
            Slot::Ready { value, .. } => match downcast::<T>(key, value) {
                Ok(v) => ViewState::Success(v),
                Err(e) => ViewState::Error(e.to_string()),
            },
            Slot::Failed { error } => ViewState::Error(error.to_string()),
        };
        Some(state)
    }

    /// Forgets a key. A fetch still in flight completes for its callers but is not stored.
    pub fn invalidate(&self, key: &QueryKey) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.clear();
        }
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        Utc::now().signed_duration_since(fetched_at) < self.stale_after
    }
}

/// Wraps the producer's future so that whichever caller drives it to completion also
/// records the outcome in the table.
fn start<T, Fut>(slots: SlotTable, key: QueryKey, generation: u64, work: Fut) -> InFlight
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    async move {
        let outcome: Outcome = work
            .await
            .map(|v| Arc::new(v) as Erased)
            .map_err(Arc::new);
        settle(&slots, &key, generation, &outcome);
        outcome
    }
    .boxed()
    .shared()
}

fn settle(slots: &SlotTable, key: &QueryKey, generation: u64, outcome: &Outcome) {
    let Ok(mut slots) = slots.lock() else {
        return;
    };
    let current = matches!(
        slots.get(key),
        Some(Slot::Fetching { generation: g, .. }) if *g == generation
    );
    if !current {
        return;
    }

    let slot = match outcome {
        Ok(value) => Slot::Ready {
            value: Arc::clone(value),
            fetched_at: Utc::now(),
        },
        Err(error) => Slot::Failed {
            error: Arc::clone(error),
        },
    };
    slots.insert(key.clone(), slot);
}

fn downcast<T: Clone + 'static>(key: &QueryKey, value: &Erased) -> QueryResult<T> {
    (**value).downcast_ref::<T>().cloned().ok_or_else(|| {
        Arc::new(VocabError::Query(format!(
            "query {} holds a value of a different type",
            key
        )))
    })
}

fn poisoned() -> Arc<VocabError> {
    Arc::new(VocabError::Query("query table lock poisoned".to_string()))
}
