use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

/// Where a fetcher currently is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug)]
struct Inner<T> {
    phase: FetchPhase,
    data: Vec<T>,
    error: Option<String>,
    generation: u64,
}

/// Replace-only result cell shared between a fetcher and its consumers.
///
/// A cycle runs `begin` -> `complete` | `fail`. `begin` hands out a
/// generation token; completions carrying a stale token are discarded, so an
/// older in-flight fetch can never overwrite the result of a newer one. A
/// failed cycle keeps the previous data so consumers always have either the
/// prior list or an explicit error to show.
#[derive(Debug, Clone)]
pub struct FetchStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

/// Point-in-time copy of a store's observable state.
#[derive(Debug, Clone)]
pub struct FetchSnapshot<T> {
    pub phase: FetchPhase,
    pub data: Vec<T>,
    pub error: Option<String>,
}

impl<T> FetchSnapshot<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }
}

impl<T: Clone> FetchStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                phase: FetchPhase::Idle,
                data: Vec::new(),
                error: None,
                generation: 0,
            })),
        }
    }

    /// Starts a new cycle: clears the error, flips to loading, and returns
    /// the cycle's generation token. Previous data stays visible while the
    /// new fetch runs.
    pub async fn begin(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.phase = FetchPhase::Loading;
        inner.error = None;
        inner.generation
    }

    /// Atomically replaces the data for the given cycle. Returns false (and
    /// changes nothing) when a newer cycle has started since.
    pub async fn complete(&self, generation: u64, data: Vec<T>) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        inner.phase = FetchPhase::Success;
        inner.data = data;
        inner.error = None;
        true
    }

    /// Records a whole-call failure for the given cycle, preserving the
    /// previously fetched data.
    pub async fn fail(&self, generation: u64, message: String) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        inner.phase = FetchPhase::Failure;
        inner.error = Some(message);
        true
    }

    pub async fn snapshot(&self) -> FetchSnapshot<T> {
        let inner = self.inner.read().await;
        FetchSnapshot {
            phase: inner.phase,
            data: inner.data.clone(),
            error: inner.error.clone(),
        }
    }
}

impl<T: Clone> Default for FetchStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cycle_replaces_data_and_clears_error() {
        let store = FetchStore::new();
        let generation = store.begin().await;
        assert!(store.fail(generation, "boom".to_string()).await);

        let generation = store.begin().await;
        let snapshot = store.snapshot().await;
        assert!(snapshot.is_loading());
        assert_eq!(snapshot.error, None);

        assert!(store.complete(generation, vec![1, 2]).await);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.phase, FetchPhase::Success);
        assert_eq!(snapshot.data, vec![1, 2]);
    }

    #[tokio::test]
    async fn failure_preserves_previous_data() {
        let store = FetchStore::new();
        let generation = store.begin().await;
        store.complete(generation, vec!["a"]).await;

        let generation = store.begin().await;
        assert!(store.fail(generation, "rpc down".to_string()).await);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.phase, FetchPhase::Failure);
        assert_eq!(snapshot.data, vec!["a"]);
        assert_eq!(snapshot.error.as_deref(), Some("rpc down"));
    }

    #[tokio::test]
    async fn stale_generation_is_discarded() {
        let store = FetchStore::new();
        let old = store.begin().await;
        let new = store.begin().await;

        assert!(!store.complete(old, vec![1]).await);
        assert!(!store.fail(old, "late failure".to_string()).await);
        let snapshot = store.snapshot().await;
        assert!(snapshot.is_loading());
        assert!(snapshot.data.is_empty());

        assert!(store.complete(new, vec![2]).await);
        assert_eq!(store.snapshot().await.data, vec![2]);
    }
}
