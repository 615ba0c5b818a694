//! In-memory query cache.
//!
//! Entries move through `pending -> ready | failed`. The entry table sits
//! behind one [`tokio::sync::Mutex`]; the "is something already pending for
//! this key" check and the insert of a new pending fetch happen under the
//! same guard, so two callers for one key can never both start a fetch.
//!
//! Fetches are spawned onto the runtime. A fetch always runs to completion
//! and stores its result, even if every caller waiting on it has gone away.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use futures::future::{BoxFuture, FutureExt, Shared};
use gallery_core::clock::Clock;
use gallery_core::error::FetchError;
use gallery_core::types::Timestamp;
use tokio::sync::Mutex;

use crate::state::QueryState;

/// Zero staleness: every `query` call outside an in-flight fetch refetches.
pub const DEFAULT_STALE_TIME: Duration = Duration::ZERO;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, FetchError>>>;
type EntryTable<K, V> = Arc<Mutex<HashMap<K, Entry<V>>>>;

enum Entry<V> {
    Pending(SharedFetch<V>),
    Ready { value: V, fetched_at: Timestamp },
    Failed { error: FetchError, fetched_at: Timestamp },
}

/// Keyed cache with staleness windows and in-flight deduplication.
///
/// Cloning is cheap and clones share the same entries.
pub struct QueryCache<K, V> {
    entries: EntryTable<K, V>,
    clock: Arc<dyn Clock>,
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    /// Return the value for `key`, fetching it if needed.
    ///
    /// - A successful entry younger than `stale_time` is returned as is.
    /// - If a fetch for `key` is in flight, the caller waits on that fetch.
    /// - Otherwise `fetch` is called once and its future spawned.
    ///
    /// Errors are stored but never considered fresh, so the next call after
    /// a failure fetches again.
    pub async fn query<F, Fut>(
        &self,
        key: K,
        fetch: F,
        stale_time: Duration,
    ) -> Result<V, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let pending = {
            let mut entries = self.entries.lock().await;
            match entries.get(&key) {
                Some(Entry::Ready { value, fetched_at })
                    if self.is_fresh(*fetched_at, stale_time) =>
                {
                    tracing::debug!(key = ?key, "Query cache hit");
                    return Ok(value.clone());
                }
                Some(Entry::Pending(shared)) => {
                    tracing::debug!(key = ?key, "Attaching to in-flight fetch");
                    shared.clone()
                }
                _ => {
                    tracing::debug!(key = ?key, "Query cache miss, fetching");
                    let shared = self.spawn_fetch(key.clone(), fetch());
                    entries.insert(key, Entry::Pending(shared.clone()));
                    shared
                }
            }
        };

        pending.await
    }

    /// Current tri-state for `key`.
    pub async fn state(&self, key: &K) -> QueryState<V> {
        match self.entries.lock().await.get(key) {
            None => QueryState::Idle,
            Some(Entry::Pending(_)) => QueryState::Loading,
            Some(Entry::Ready { value, .. }) => QueryState::Ready(value.clone()),
            Some(Entry::Failed { error, .. }) => QueryState::Failed(error.clone()),
        }
    }

    /// When the settled entry for `key` was fetched.
    pub async fn fetched_at(&self, key: &K) -> Option<Timestamp> {
        match self.entries.lock().await.get(key) {
            Some(Entry::Ready { fetched_at, .. } | Entry::Failed { fetched_at, .. }) => {
                Some(*fetched_at)
            }
            _ => None,
        }
    }

    /// Drop the settled entry for `key`. An in-flight fetch is left alone.
    ///
    /// Returns whether an entry was removed.
    pub async fn invalidate(&self, key: &K) -> bool {
        let mut entries = self.entries.lock().await;
        if matches!(entries.get(key), Some(Entry::Pending(_)) | None) {
            return false;
        }
        entries.remove(key);
        true
    }

    /// Drop every settled entry.
    pub async fn clear(&self) {
        self.entries
            .lock()
            .await
            .retain(|_, entry| matches!(entry, Entry::Pending(_)));
    }

    /// Number of entries, in flight or settled.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    // ---- private helpers ----

    fn is_fresh(&self, fetched_at: Timestamp, stale_time: Duration) -> bool {
        let age = self.clock.now() - fetched_at;
        match TimeDelta::from_std(stale_time) {
            Ok(window) => age < window,
            // Larger than chrono can represent: never goes stale.
            Err(_) => true,
        }
    }

    /// Spawn `fut` and return a shareable handle to its result.
    ///
    /// The spawned task stores the outcome in the entry table itself, so
    /// the cache is populated whether or not anyone awaits the handle.
    fn spawn_fetch<Fut>(&self, key: K, fut: Fut) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V, FetchError>> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        let clock = Arc::clone(&self.clock);
        let task_key = key.clone();

        let handle = tokio::spawn(async move {
            let result = fut.await;
            let fetched_at = clock.now();
            let entry = match &result {
                Ok(value) => Entry::Ready {
                    value: value.clone(),
                    fetched_at,
                },
                Err(error) => {
                    tracing::warn!(key = ?task_key, error = %error, "Query fetch failed");
                    Entry::Failed {
                        error: error.clone(),
                        fetched_at,
                    }
                }
            };
            entries.lock().await.insert(task_key, entry);
            result
        });

        let entries = Arc::clone(&self.entries);
        let clock = Arc::clone(&self.clock);
        async move {
            match handle.await {
                Ok(result) => result,
                Err(join_err) => {
                    // The task never reached its store; record the failure
                    // so the next query refetches instead of re-awaiting.
                    let error = FetchError::Internal(format!("fetch task failed: {join_err}"));
                    tracing::error!(key = ?key, error = %error, "Query fetch task aborted");
                    entries.lock().await.insert(
                        key,
                        Entry::Failed {
                            error: error.clone(),
                            fetched_at: clock.now(),
                        },
                    );
                    Err(error)
                }
            }
        }
        .boxed()
        .shared()
    }
}
